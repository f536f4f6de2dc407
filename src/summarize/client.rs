// Copyright (c) 2025 WikiQA
// SPDX-License-Identifier: BUSL-1.1
//! Summarization model client
//!
//! HTTP client for a HuggingFace-Inference-compatible abstractive
//! summarization endpoint.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

use super::config::SummarizeConfig;

/// Errors that can occur during summarization
#[derive(Debug, Error)]
pub enum SummarizeError {
    /// API error from the summarization endpoint
    #[error("Summarization API error: {status} - {message}")]
    ApiError {
        /// HTTP status code (0 if the request never completed)
        status: u16,
        /// Error message
        message: String,
    },

    /// The request timed out
    #[error("Summarization request timed out after {timeout_ms}ms")]
    Timeout {
        /// Timeout duration in milliseconds
        timeout_ms: u64,
    },

    /// The endpoint responded with JSON we could not interpret
    #[error("Unexpected summarization response: {0}")]
    InvalidResponse(String),
}

/// Any model that can produce an abstractive summary
#[async_trait]
pub trait SummaryModel: Send + Sync {
    /// Summarize the given text
    async fn summarize(&self, text: &str) -> Result<String, SummarizeError>;
}

/// Client for a HuggingFace-Inference-compatible summarization endpoint
///
/// Sends `{"inputs": text}` and expects `[{"summary_text": "..."}]` back.
pub struct HfSummarizationClient {
    client: Client,
    endpoint: String,
    api_token: Option<String>,
    timeout_ms: u64,
}

impl HfSummarizationClient {
    /// Create a new summarization client
    pub fn new(config: &SummarizeConfig) -> Self {
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
impl SummaryModel for HfSummarizationClient {
    async fn summarize(&self, text: &str) -> Result<String, SummarizeError> {
        debug!("Summarizing {} chars via {}", text.chars().count(), self.endpoint);

        let mut request = self.client.post(&self.endpoint).json(&json!({
            "inputs": text,
        }));
        if let Some(ref token) = self.api_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                SummarizeError::Timeout {
                    timeout_ms: self.timeout_ms,
                }
            } else {
                SummarizeError::ApiError {
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
                .unwrap_or_else(|_| "summarization request failed".to_string());
            return Err(SummarizeError::ApiError {
                status: status.as_u16(),
                message,
            });
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| SummarizeError::InvalidResponse(e.to_string()))?;

        parse_summary_response(&body)
    }
}

/// Extract the summary text from an inference API response
pub(crate) fn parse_summary_response(body: &Value) -> Result<String, SummarizeError> {
    body[0]["summary_text"]
        .as_str()
        .map(|s| s.to_string())
        .ok_or_else(|| {
            SummarizeError::InvalidResponse("response has no summary_text".to_string())
        })
}
