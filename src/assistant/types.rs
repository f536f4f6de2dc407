// Copyright (c) 2025 WikiQA
// SPDX-License-Identifier: BUSL-1.1
//! Core types for the assistant pipeline

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::summarize::SummarizeError;
use crate::wiki::{Language, WikiError};

/// Which text the question is answered against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContextMode {
    /// Answer against the generated summary
    Summary,
    /// Answer against a truncated prefix of the full article body
    #[serde(rename = "full")]
    FullText,
}

impl Default for ContextMode {
    fn default() -> Self {
        ContextMode::Summary
    }
}

impl fmt::Display for ContextMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContextMode::Summary => write!(f, "summary"),
            ContextMode::FullText => write!(f, "full"),
        }
    }
}

/// One user submission
#[derive(Debug, Clone)]
pub struct AssistantQuery {
    /// Wikipedia page title as typed by the user
    pub title: String,
    /// Language edition to look up
    pub language: Language,
    /// Free-text question
    pub question: String,
    /// Context the question is answered against
    pub context_mode: ContextMode,
}

/// The four display values produced for a successful request
#[derive(Debug, Clone)]
pub struct AssistantAnswer {
    /// Canonical article title
    pub title: String,
    /// Truncated article body prefix
    pub content: String,
    /// Summary, at most a few sentences (or the short-text message)
    pub summary: String,
    /// Best answer span, or the no-answer message
    pub answer: String,
    /// Context the answer was selected from
    pub context_mode: ContextMode,
    /// Wall time spent answering, in milliseconds
    pub answer_time_ms: u64,
}

/// Errors that abort a request
///
/// Low-confidence answers and too-short inputs are not errors; they surface
/// as fixed sentinel strings inside a successful [`AssistantAnswer`].
#[derive(Debug, Error)]
pub enum AssistantError {
    /// Article lookup failed (missing page, ambiguous title, network error)
    #[error(transparent)]
    Article(#[from] WikiError),

    /// Summarization model failed; the whole request aborts with no
    /// partial-result recovery
    #[error(transparent)]
    Summarization(#[from] SummarizeError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_mode_default() {
        assert_eq!(ContextMode::default(), ContextMode::Summary);
    }

    #[test]
    fn test_context_mode_serde() {
        assert_eq!(
            serde_json::to_string(&ContextMode::Summary).unwrap(),
            "\"summary\""
        );
        assert_eq!(
            serde_json::to_string(&ContextMode::FullText).unwrap(),
            "\"full\""
        );
        let mode: ContextMode = serde_json::from_str("\"full\"").unwrap();
        assert_eq!(mode, ContextMode::FullText);
    }

    #[test]
    fn test_assistant_error_from_wiki_error() {
        let error: AssistantError = WikiError::PageNotFound {
            title: "Nope".to_string(),
        }
        .into();
        assert!(error.to_string().contains("Nope"));
    }
}
