// Copyright (c) 2025 WikiQA
// SPDX-License-Identifier: BUSL-1.1
//! Ask API endpoint handler

use axum::{extract::State, http::StatusCode, Json};
use tracing::{debug, info, warn};
use uuid::Uuid;

use super::request::AskApiRequest;
use super::response::AskApiResponse;
use crate::api::errors::{ApiError, ErrorResponse};
use crate::api::http_server::AppState;
use crate::assistant::AssistantQuery;

/// POST /v1/ask - Fetch, summarize, and answer in one request
///
/// # Request
/// - `title`: Wikipedia page title (required, max 300 chars)
/// - `language`: `en` or `tr` (default `tr`)
/// - `question`: Free-text question (required, max 500 chars)
/// - `contextMode`: `summary` or `full` (default `summary`)
/// - `requestId`: Optional request ID for tracking
///
/// # Response
/// - `title`: Canonical article title
/// - `content`: Truncated article body prefix
/// - `summary`: At most a few sentences
/// - `answer`: Best answer span or the no-answer message
/// - `language`, `contextMode`, `answerTimeMs`, `requestId`
///
/// # Errors
/// - 400 Bad Request: Invalid title or question
/// - 404 Not Found: No page for the title
/// - 409 Conflict: Title is ambiguous (disambiguation page)
/// - 502 Bad Gateway: Wikipedia or a model endpoint failed
/// - 504 Gateway Timeout: An upstream call timed out
pub async fn ask_handler(
    State(state): State<AppState>,
    Json(request): Json<AskApiRequest>,
) -> Result<Json<AskApiResponse>, (StatusCode, Json<ErrorResponse>)> {
    debug!("Ask request: title='{}' lang={}", request.title, request.language);

    let request_id = request
        .request_id
        .clone()
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    if let Err(e) = request.validate() {
        warn!("Ask validation failed: {}", e);
        return Err(error_response(ApiError::InvalidRequest(e), request_id));
    }

    let query = AssistantQuery {
        title: request.title,
        language: request.language,
        question: request.question,
        context_mode: request.context_mode,
    };

    let answer = state.assistant.run(&query).await.map_err(|e| {
        warn!("Ask pipeline failed: {}", e);
        error_response(ApiError::from(e), request_id.clone())
    })?;

    info!(
        "Ask complete: '{}' answered against '{}' in {}ms",
        query.question, answer.title, answer.answer_time_ms
    );

    Ok(Json(AskApiResponse::new(answer, query.language, request_id)))
}

fn error_response(error: ApiError, request_id: String) -> (StatusCode, Json<ErrorResponse>) {
    let status =
        StatusCode::from_u16(error.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(error.to_response(Some(request_id))))
}
