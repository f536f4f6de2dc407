// Copyright (c) 2025 WikiQA
// SPDX-License-Identifier: BUSL-1.1
//! Top-level service configuration
//!
//! Aggregates the per-module configs and the knobs that belong to the
//! pipeline itself. Every threshold the pipeline uses is a named, tunable
//! field here rather than an inline literal.

use std::env;

use crate::qa::QaConfig;
use crate::summarize::SummarizeConfig;
use crate::wiki::WikiConfig;

/// Configuration for the whole assistant service
#[derive(Debug, Clone)]
pub struct AssistantConfig {
    /// Wikipedia client settings
    pub wiki: WikiConfig,
    /// Summarizer settings
    pub summarize: SummarizeConfig,
    /// Answer selector settings
    pub qa: QaConfig,
    /// Cap on displayed content and full-text answering context, in
    /// characters (default: 3000). A raw character cut, not sentence aware.
    pub context_max_chars: usize,
    /// HTTP API port (default: 8080)
    pub api_port: u16,
}

impl AssistantConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            wiki: WikiConfig::from_env(),
            summarize: SummarizeConfig::from_env(),
            qa: QaConfig::from_env(),
            context_max_chars: env::var("CONTEXT_MAX_CHARS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            api_port: env::var("API_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8080),
        }
    }

    /// Validate all configuration values
    pub fn validate(&self) -> Result<(), String> {
        self.wiki.validate()?;
        self.summarize.validate()?;
        self.qa.validate()?;
        if self.context_max_chars < self.summarize.min_input_chars {
            return Err("context_max_chars must be at least min_input_chars".to_string());
        }
        if self.api_port == 0 {
            return Err("api_port must be non-zero".to_string());
        }
        Ok(())
    }
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            wiki: WikiConfig::default(),
            summarize: SummarizeConfig::default(),
            qa: QaConfig::default(),
            context_max_chars: 3000,
            api_port: 8080,
        }
    }
}
