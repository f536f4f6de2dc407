// Copyright (c) 2025 WikiQA
// SPDX-License-Identifier: BUSL-1.1
//! Configuration for question answering

use std::env;
use url::Url;

/// Default extractive QA model endpoint (HuggingFace Inference API)
pub const DEFAULT_QA_ENDPOINT: &str =
    "https://api-inference.huggingface.co/models/deepset/xlm-roberta-base-squad2";

/// Configuration for the answer selector
#[derive(Debug, Clone)]
pub struct QaConfig {
    /// Extractive QA model endpoint
    pub endpoint: String,
    /// Optional bearer token for the inference API
    pub api_token: Option<String>,
    /// Paragraphs at or below this trimmed length are skipped (default: 50).
    /// A noise filter, not a semantic boundary.
    pub min_paragraph_chars: usize,
    /// Best answers at or below this confidence are rejected (default: 0.25)
    pub score_threshold: f32,
    /// Request timeout in seconds (default: 30)
    pub timeout_secs: u64,
}

impl QaConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            endpoint: env::var("QA_ENDPOINT").unwrap_or_else(|_| DEFAULT_QA_ENDPOINT.to_string()),
            api_token: env::var("QA_API_TOKEN")
                .or_else(|_| env::var("HF_API_TOKEN"))
                .ok(),
            min_paragraph_chars: env::var("QA_MIN_PARAGRAPH_CHARS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(50),
            score_threshold: env::var("QA_SCORE_THRESHOLD")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(0.25),
            timeout_secs: env::var("QA_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), String> {
        Url::parse(&self.endpoint)
            .map_err(|e| format!("invalid QA_ENDPOINT '{}': {}", self.endpoint, e))?;
        if !(0.0..=1.0).contains(&self.score_threshold) {
            return Err(format!(
                "score_threshold must be within [0, 1], got {}",
                self.score_threshold
            ));
        }
        if self.timeout_secs == 0 {
            return Err("timeout_secs must be at least 1".to_string());
        }
        Ok(())
    }
}

impl Default for QaConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_QA_ENDPOINT.to_string(),
            api_token: None,
            min_paragraph_chars: 50,
            score_threshold: 0.25,
            timeout_secs: 30,
        }
    }
}
