// Copyright (c) 2025 WikiQA
// SPDX-License-Identifier: BUSL-1.1
//! Shared in-process mocks for pipeline and API tests
#![allow(dead_code)]

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use wikiqa_node::qa::{AnswerSelector, QaConfig, QaError, QaModel, QaPrediction};
use wikiqa_node::summarize::{SummarizeConfig, SummarizeError, Summarizer, SummaryModel};
use wikiqa_node::wiki::{Article, ArticleSource, Language, WikiError};
use wikiqa_node::Assistant;

/// Article source that always resolves to the same article
pub struct StaticArticleSource {
    pub article: Article,
}

#[async_trait]
impl ArticleSource for StaticArticleSource {
    async fn fetch_article(&self, _title: &str, _lang: Language) -> Result<Article, WikiError> {
        Ok(self.article.clone())
    }
}

/// Article source where every title is missing
pub struct MissingArticleSource;

#[async_trait]
impl ArticleSource for MissingArticleSource {
    async fn fetch_article(&self, title: &str, _lang: Language) -> Result<Article, WikiError> {
        Err(WikiError::PageNotFound {
            title: title.to_string(),
        })
    }
}

/// Summary model that always returns the same summary
pub struct StaticSummaryModel {
    pub summary: String,
}

#[async_trait]
impl SummaryModel for StaticSummaryModel {
    async fn summarize(&self, _text: &str) -> Result<String, SummarizeError> {
        Ok(self.summary.clone())
    }
}

/// Summary model that always fails
pub struct FailingSummaryModel;

#[async_trait]
impl SummaryModel for FailingSummaryModel {
    async fn summarize(&self, _text: &str) -> Result<String, SummarizeError> {
        Err(SummarizeError::ApiError {
            status: 503,
            message: "model unavailable".to_string(),
        })
    }
}

/// QA model that records every context it is queried with and returns a
/// fixed prediction
pub struct RecordingQaModel {
    pub prediction: QaPrediction,
    pub contexts: Arc<Mutex<Vec<String>>>,
}

impl RecordingQaModel {
    pub fn new(answer: &str, score: f32) -> (Self, Arc<Mutex<Vec<String>>>) {
        let contexts = Arc::new(Mutex::new(Vec::new()));
        let model = Self {
            prediction: QaPrediction {
                answer: answer.to_string(),
                score,
            },
            contexts: Arc::clone(&contexts),
        };
        (model, contexts)
    }
}

#[async_trait]
impl QaModel for RecordingQaModel {
    async fn answer(&self, _question: &str, context: &str) -> Result<QaPrediction, QaError> {
        self.contexts.lock().unwrap().push(context.to_string());
        Ok(self.prediction.clone())
    }
}

/// Assemble an assistant from mock parts with default configuration
pub fn build_assistant(
    source: Arc<dyn ArticleSource>,
    summary_model: Box<dyn SummaryModel>,
    qa_model: Box<dyn QaModel>,
) -> Assistant {
    Assistant::new(
        source,
        Summarizer::new(summary_model, SummarizeConfig::default()),
        AnswerSelector::new(qa_model, QaConfig::default()),
        3000,
    )
}

/// A multi-paragraph Einstein-like article body, longer than 3000 characters
pub fn sample_body() -> String {
    let mut body = String::new();
    body.push_str("Albert Einstein was a German-born theoretical physicist who is widely held to be one of the greatest thinkers of all time.\n");
    body.push_str("He was born in Ulm, in the Kingdom of Württemberg in the German Empire, on 14 March 1879 to a family of secular Jews.\n");
    body.push_str("Einstein developed the theory of relativity, one of the two pillars of modern physics, alongside quantum mechanics.\n");
    // Filler lines push the body past the 3000-character content cap; the
    // ZEBRA marker must never be visible in truncated contexts
    for _ in 0..30 {
        body.push_str("His work is also known for its influence on the philosophy of science, and his mass-energy equivalence formula has been dubbed the world's most famous equation.\n");
    }
    body.push_str("ZEBRA: this closing line sits far beyond the three-thousand character boundary of the article body.\n");
    assert!(body.chars().count() > 3000);
    body
}

/// A canned article wrapping [`sample_body`]
pub fn sample_article() -> Article {
    Article {
        title: "Albert Einstein".to_string(),
        body: sample_body(),
        language: Language::En,
    }
}
