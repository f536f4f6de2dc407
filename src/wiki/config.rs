// Copyright (c) 2025 WikiQA
// SPDX-License-Identifier: BUSL-1.1
//! Configuration for Wikipedia article retrieval

use std::env;
use url::Url;

/// Configuration for the Wikipedia client
#[derive(Debug, Clone)]
pub struct WikiConfig {
    /// Override the MediaWiki API endpoint (default: per-language
    /// `https://{lang}.wikipedia.org/w/api.php`). Used for testing against
    /// a local stub.
    pub endpoint_override: Option<String>,
    /// Request timeout in seconds (default: 10)
    pub timeout_secs: u64,
    /// User agent sent with API requests
    pub user_agent: String,
}

impl WikiConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            endpoint_override: env::var("WIKI_API_ENDPOINT").ok(),
            timeout_secs: env::var("WIKI_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
            user_agent: env::var("WIKI_USER_AGENT")
                .unwrap_or_else(|_| default_user_agent()),
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), String> {
        if self.timeout_secs == 0 {
            return Err("timeout_secs must be at least 1".to_string());
        }
        if let Some(ref endpoint) = self.endpoint_override {
            Url::parse(endpoint)
                .map_err(|e| format!("invalid WIKI_API_ENDPOINT '{}': {}", endpoint, e))?;
        }
        Ok(())
    }
}

impl Default for WikiConfig {
    fn default() -> Self {
        Self {
            endpoint_override: None,
            timeout_secs: 10,
            user_agent: default_user_agent(),
        }
    }
}

fn default_user_agent() -> String {
    format!("WikiQABot/{} (contact@wikiqa.dev)", crate::version::VERSION)
}
