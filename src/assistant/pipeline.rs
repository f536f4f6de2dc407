// Copyright (c) 2025 WikiQA
// SPDX-License-Identifier: BUSL-1.1
//! The fetch, summarize, answer pipeline
//!
//! Strictly linear per request. No retries and no partial-result recovery;
//! a fetch or summarization failure aborts the request as a typed error.

use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

use super::types::{AssistantAnswer, AssistantError, AssistantQuery, ContextMode};
use crate::qa::AnswerSelector;
use crate::summarize::Summarizer;
use crate::text::truncate_chars;
use crate::wiki::ArticleSource;

/// Orchestrates one fetch → summarize → answer request
pub struct Assistant {
    articles: Arc<dyn ArticleSource>,
    summarizer: Summarizer,
    selector: AnswerSelector,
    context_max_chars: usize,
}

impl Assistant {
    /// Create a new assistant
    ///
    /// `context_max_chars` caps both the displayed content and the full-text
    /// answering context.
    pub fn new(
        articles: Arc<dyn ArticleSource>,
        summarizer: Summarizer,
        selector: AnswerSelector,
        context_max_chars: usize,
    ) -> Self {
        Self {
            articles,
            summarizer,
            selector,
            context_max_chars,
        }
    }

    /// Run the full pipeline for one query
    pub async fn run(&self, query: &AssistantQuery) -> Result<AssistantAnswer, AssistantError> {
        let start = Instant::now();
        debug!(
            "Running query: title='{}' lang={} context={}",
            query.title, query.language, query.context_mode
        );

        let article = self
            .articles
            .fetch_article(&query.title, query.language)
            .await?;

        let summary = self.summarizer.summarize(&article.body).await?;

        let content = truncate_chars(&article.body, self.context_max_chars).to_string();
        let context = match query.context_mode {
            ContextMode::Summary => summary.as_str(),
            ContextMode::FullText => content.as_str(),
        };

        let answer = self.selector.answer(context, &query.question).await;

        let answer_time_ms = start.elapsed().as_millis() as u64;
        info!(
            "Answered '{}' against '{}' ({} context) in {}ms",
            query.question, article.title, query.context_mode, answer_time_ms
        );

        Ok(AssistantAnswer {
            title: article.title,
            content,
            summary,
            answer,
            context_mode: query.context_mode,
            answer_time_ms,
        })
    }
}
