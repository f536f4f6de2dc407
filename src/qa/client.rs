// Copyright (c) 2025 WikiQA
// SPDX-License-Identifier: BUSL-1.1
//! Extractive QA model client
//!
//! HTTP client for a HuggingFace-Inference-compatible question-answering
//! endpoint. The model copies an answer span out of the given context and
//! attaches a confidence score.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

use super::config::QaConfig;

/// An answer span with its confidence score
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QaPrediction {
    /// The answer text, a contiguous span copied from the context
    pub answer: String,
    /// Model confidence in [0, 1]
    pub score: f32,
}

/// Errors that can occur during a QA model query
#[derive(Debug, Error)]
pub enum QaError {
    /// API error from the QA endpoint
    #[error("QA API error: {status} - {message}")]
    ApiError {
        /// HTTP status code (0 if the request never completed)
        status: u16,
        /// Error message
        message: String,
    },

    /// The request timed out
    #[error("QA request timed out after {timeout_ms}ms")]
    Timeout {
        /// Timeout duration in milliseconds
        timeout_ms: u64,
    },

    /// The endpoint responded with JSON we could not interpret
    #[error("Unexpected QA response: {0}")]
    InvalidResponse(String),
}

/// Any model that can answer a question against a context
#[async_trait]
pub trait QaModel: Send + Sync {
    /// Answer `question` using only `context`
    async fn answer(&self, question: &str, context: &str) -> Result<QaPrediction, QaError>;
}

/// Client for a HuggingFace-Inference-compatible QA endpoint
///
/// Sends `{"inputs": {"question": ..., "context": ...}}` and expects
/// `{"answer": ..., "score": ...}` back.
pub struct HfQuestionAnsweringClient {
    client: Client,
    endpoint: String,
    api_token: Option<String>,
    timeout_ms: u64,
}

impl HfQuestionAnsweringClient {
    /// Create a new QA client
    pub fn new(config: &QaConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            endpoint: config.endpoint.clone(),
            api_token: config.api_token.clone(),
            timeout_ms: config.timeout_secs * 1000,
        }
    }
}

#[async_trait]
impl QaModel for HfQuestionAnsweringClient {
    async fn answer(&self, question: &str, context: &str) -> Result<QaPrediction, QaError> {
        debug!(
            "QA query '{}' against {} chars of context",
            question,
            context.chars().count()
        );

        let mut request = self.client.post(&self.endpoint).json(&json!({
            "inputs": {
                "question": question,
                "context": context,
            }
        }));
        if let Some(ref token) = self.api_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                QaError::Timeout {
                    timeout_ms: self.timeout_ms,
                }
            } else {
                QaError::ApiError {
                    status: 0,
                    message: e.to_string(),
                }
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "QA request failed".to_string());
            return Err(QaError::ApiError {
                status: status.as_u16(),
                message,
            });
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| QaError::InvalidResponse(e.to_string()))?;

        parse_qa_response(&body)
    }
}

/// Extract the answer span and score from an inference API response
pub(crate) fn parse_qa_response(body: &Value) -> Result<QaPrediction, QaError> {
    let answer = body["answer"]
        .as_str()
        .ok_or_else(|| QaError::InvalidResponse("response has no answer".to_string()))?;
    let score = body["score"]
        .as_f64()
        .ok_or_else(|| QaError::InvalidResponse("response has no score".to_string()))?;

    Ok(QaPrediction {
        answer: answer.to_string(),
        score: score as f32,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_qa_response() {
        let body = json!({"answer": "Ulm, Germany", "score": 0.92, "start": 20, "end": 32});
        let prediction = parse_qa_response(&body).unwrap();
        assert_eq!(prediction.answer, "Ulm, Germany");
        assert!((prediction.score - 0.92).abs() < 1e-6);
    }

    #[test]
    fn test_parse_qa_response_missing_answer() {
        let body = json!({"score": 0.5});
        assert!(matches!(
            parse_qa_response(&body),
            Err(QaError::InvalidResponse(_))
        ));
    }

    #[test]
    fn test_parse_qa_response_missing_score() {
        let body = json!({"answer": "something"});
        assert!(matches!(
            parse_qa_response(&body),
            Err(QaError::InvalidResponse(_))
        ));
    }

    #[test]
    fn test_prediction_serialization() {
        let prediction = QaPrediction {
            answer: "Germany".to_string(),
            score: 0.8,
        };
        let json = serde_json::to_string(&prediction).unwrap();
        assert!(json.contains("answer"));
        assert!(json.contains("score"));
    }

    #[test]
    fn test_client_creation() {
        let client = HfQuestionAnsweringClient::new(&QaConfig::default());
        assert!(client.endpoint.contains("squad2"));
    }
}
