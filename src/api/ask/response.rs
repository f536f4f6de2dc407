// Copyright (c) 2025 WikiQA
// SPDX-License-Identifier: BUSL-1.1
//! Ask API response types

use serde::{Deserialize, Serialize};

use crate::assistant::{AssistantAnswer, ContextMode};
use crate::wiki::Language;

/// Response body for POST /v1/ask
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AskApiResponse {
    /// Canonical article title (may differ from the requested title)
    pub title: String,

    /// Truncated article body prefix
    pub content: String,

    /// Summary, at most a few sentences (or the short-text message)
    pub summary: String,

    /// Best answer span, or the no-answer message
    pub answer: String,

    /// Language edition the article was fetched from
    pub language: Language,

    /// Context the answer was selected from
    pub context_mode: ContextMode,

    /// Wall time spent answering, in milliseconds
    pub answer_time_ms: u64,

    /// Request ID for tracking
    pub request_id: String,
}

impl AskApiResponse {
    /// Build a response from a pipeline result
    pub fn new(answer: AssistantAnswer, language: Language, request_id: String) -> Self {
        Self {
            title: answer.title,
            content: answer.content,
            summary: answer.summary,
            answer: answer.answer,
            language,
            context_mode: answer.context_mode,
            answer_time_ms: answer.answer_time_ms,
            request_id,
        }
    }
}
