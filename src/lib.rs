// Copyright (c) 2025 WikiQA
// SPDX-License-Identifier: BUSL-1.1
pub mod api;
pub mod assistant;
pub mod config;
pub mod qa;
pub mod summarize;
pub mod text;
pub mod version;
pub mod wiki;

// Re-export main types
pub use assistant::{Assistant, AssistantAnswer, AssistantError, AssistantQuery, ContextMode};
pub use config::AssistantConfig;
pub use qa::{AnswerSelector, QaConfig, QaModel, QaPrediction, NO_ANSWER_MESSAGE};
pub use summarize::{SummarizeConfig, Summarizer, SummaryModel, SHORT_TEXT_MESSAGE};
pub use wiki::{Article, ArticleSource, Language, WikiClient, WikiConfig, WikiError};
