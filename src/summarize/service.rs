// Copyright (c) 2025 WikiQA
// SPDX-License-Identifier: BUSL-1.1
//! Summarization service
//!
//! Wraps a summary model with the input gate, prefix truncation, and
//! sentence trimming that turn raw model output into a display summary.

use tracing::debug;

use super::client::{SummarizeError, SummaryModel};
use super::config::SummarizeConfig;
use crate::text::{split_sentences, truncate_chars};

/// Fixed message returned when the input is too short to summarize
pub const SHORT_TEXT_MESSAGE: &str = "Text is too short to summarize.";

/// Summarization service
pub struct Summarizer {
    model: Box<dyn SummaryModel>,
    config: SummarizeConfig,
}

impl Summarizer {
    /// Create a new summarizer backed by the given model
    pub fn new(model: Box<dyn SummaryModel>, config: SummarizeConfig) -> Self {
        Self { model, config }
    }

    /// Summarize text to at most `max_sentences` sentences
    ///
    /// Inputs shorter than `min_input_chars` return [`SHORT_TEXT_MESSAGE`]
    /// without a model call. Otherwise only the first `max_input_chars`
    /// characters are sent to the model. Model failures propagate; there is
    /// no retry.
    pub async fn summarize(&self, text: &str) -> Result<String, SummarizeError> {
        if text.chars().count() < self.config.min_input_chars {
            debug!("Input below {} chars, skipping model call", self.config.min_input_chars);
            return Ok(SHORT_TEXT_MESSAGE.to_string());
        }

        let input = truncate_chars(text, self.config.max_input_chars);
        let raw = self.model.summarize(input).await?;

        Ok(first_sentences(&raw, self.config.max_sentences))
    }
}

/// Keep at most `max` sentences, joined by single spaces
fn first_sentences(text: &str, max: usize) -> String {
    split_sentences(text)
        .into_iter()
        .take(max)
        .map(str::trim)
        .collect::<Vec<_>>()
        .join(" ")
}
