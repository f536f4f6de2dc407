// Copyright (c) 2025 WikiQA
// SPDX-License-Identifier: BUSL-1.1
//! Configuration for the summarizer

use std::env;
use url::Url;

/// Default summarization model endpoint (HuggingFace Inference API)
pub const DEFAULT_SUMMARIZER_ENDPOINT: &str =
    "https://api-inference.huggingface.co/models/csebuetnlp/mT5_multilingual_XLSum";

/// Configuration for summarization
#[derive(Debug, Clone)]
pub struct SummarizeConfig {
    /// Summarization model endpoint
    pub endpoint: String,
    /// Optional bearer token for the inference API
    pub api_token: Option<String>,
    /// Inputs shorter than this many characters are not summarized (default: 100)
    pub min_input_chars: usize,
    /// Only this many leading characters are sent to the model (default: 1000).
    /// A raw character cut, not sentence aware.
    pub max_input_chars: usize,
    /// Maximum sentences kept from the model output (default: 3)
    pub max_sentences: usize,
    /// Request timeout in seconds (default: 30)
    pub timeout_secs: u64,
}

impl SummarizeConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            endpoint: env::var("SUMMARIZER_ENDPOINT")
                .unwrap_or_else(|_| DEFAULT_SUMMARIZER_ENDPOINT.to_string()),
            api_token: env::var("SUMMARIZER_API_TOKEN")
                .or_else(|_| env::var("HF_API_TOKEN"))
                .ok(),
            min_input_chars: env::var("SUMMARIZER_MIN_INPUT_CHARS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(100),
            max_input_chars: env::var("SUMMARIZER_MAX_INPUT_CHARS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(1000),
            max_sentences: env::var("SUMMARIZER_MAX_SENTENCES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3),
            timeout_secs: env::var("SUMMARIZER_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), String> {
        Url::parse(&self.endpoint)
            .map_err(|e| format!("invalid SUMMARIZER_ENDPOINT '{}': {}", self.endpoint, e))?;
        if self.max_input_chars < self.min_input_chars {
            return Err("max_input_chars must be at least min_input_chars".to_string());
        }
        if self.max_sentences == 0 {
            return Err("max_sentences must be at least 1".to_string());
        }
        if self.timeout_secs == 0 {
            return Err("timeout_secs must be at least 1".to_string());
        }
        Ok(())
    }
}

impl Default for SummarizeConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_SUMMARIZER_ENDPOINT.to_string(),
            api_token: None,
            min_input_chars: 100,
            max_input_chars: 1000,
            max_sentences: 3,
            timeout_secs: 30,
        }
    }
}
