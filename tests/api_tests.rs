// Copyright (c) 2025 WikiQA
// SPDX-License-Identifier: BUSL-1.1
//! Ask endpoint tests exercising the handler against mocked pipelines

mod common;

use common::{
    build_assistant, sample_article, MissingArticleSource, RecordingQaModel, StaticArticleSource,
    StaticSummaryModel,
};
use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use wikiqa_node::api::{ask_handler, AppState, AskApiRequest};
use wikiqa_node::assistant::ContextMode;
use wikiqa_node::wiki::Language;

const SAMPLE_SUMMARY: &str =
    "Einstein was born in Ulm, Germany, and later developed the theory of relativity.";

fn state_with_article() -> AppState {
    let (qa_model, _contexts) = RecordingQaModel::new("Ulm, Germany", 0.9);
    AppState {
        assistant: Arc::new(build_assistant(
            Arc::new(StaticArticleSource {
                article: sample_article(),
            }),
            Box::new(StaticSummaryModel {
                summary: SAMPLE_SUMMARY.to_string(),
            }),
            Box::new(qa_model),
        )),
    }
}

fn state_with_missing_page() -> AppState {
    let (qa_model, _contexts) = RecordingQaModel::new("unused", 0.9);
    AppState {
        assistant: Arc::new(build_assistant(
            Arc::new(MissingArticleSource),
            Box::new(StaticSummaryModel {
                summary: SAMPLE_SUMMARY.to_string(),
            }),
            Box::new(qa_model),
        )),
    }
}

fn request(title: &str) -> AskApiRequest {
    AskApiRequest {
        title: title.to_string(),
        language: Language::En,
        question: "Where was Einstein born?".to_string(),
        context_mode: ContextMode::Summary,
        request_id: Some("req-test-1".to_string()),
    }
}

#[tokio::test]
async fn test_ask_success_returns_four_display_fields() {
    let result = ask_handler(State(state_with_article()), Json(request("Albert Einstein"))).await;

    let body = result.expect("handler should succeed");
    assert_eq!(body.0.title, "Albert Einstein");
    assert!(!body.0.content.is_empty());
    assert_eq!(body.0.summary, SAMPLE_SUMMARY);
    assert_eq!(body.0.answer, "Ulm, Germany");
    assert_eq!(body.0.language, Language::En);
    assert_eq!(body.0.context_mode, ContextMode::Summary);
    assert_eq!(body.0.request_id, "req-test-1");
}

#[tokio::test]
async fn test_ask_generates_request_id_when_absent() {
    let mut req = request("Albert Einstein");
    req.request_id = None;

    let result = ask_handler(State(state_with_article()), Json(req)).await;

    let body = result.expect("handler should succeed");
    assert!(!body.0.request_id.is_empty());
}

#[tokio::test]
async fn test_ask_missing_page_is_404_with_error_body() {
    let result = ask_handler(
        State(state_with_missing_page()),
        Json(request("Xyzzzabc123NoSuchPage")),
    )
    .await;

    let (status, body) = result.expect_err("handler should fail");
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body.0.error_type, "article_not_found");
    assert!(body.0.message.contains("Xyzzzabc123NoSuchPage"));
    assert_eq!(body.0.request_id, Some("req-test-1".to_string()));
}

#[tokio::test]
async fn test_ask_empty_title_is_400() {
    let result = ask_handler(State(state_with_article()), Json(request("   "))).await;

    let (status, body) = result.expect_err("handler should reject the request");
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body.0.error_type, "invalid_request");
}

#[tokio::test]
async fn test_ask_empty_question_is_400() {
    let mut req = request("Albert Einstein");
    req.question = String::new();

    let result = ask_handler(State(state_with_article()), Json(req)).await;

    let (status, body) = result.expect_err("handler should reject the request");
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body.0.error_type, "invalid_request");
}
