// Copyright (c) 2025 WikiQA
// SPDX-License-Identifier: BUSL-1.1
//! API error types and status-code mapping
//!
//! Pipeline failures are rendered as structured error responses with their
//! own status codes, never smuggled through the answer field.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::assistant::AssistantError;
use crate::summarize::SummarizeError;
use crate::wiki::WikiError;

/// JSON body returned for every error response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorResponse {
    pub error_type: String,
    pub message: String,
    pub request_id: Option<String>,
}

/// Errors surfaced by the HTTP API
#[derive(Debug, Clone)]
pub enum ApiError {
    /// Request body failed validation
    InvalidRequest(String),
    /// No Wikipedia page for the requested title
    ArticleNotFound(String),
    /// The title resolves to a disambiguation page
    AmbiguousTitle(String),
    /// An upstream dependency (Wikipedia or a model endpoint) failed
    UpstreamError(String),
    /// An upstream dependency timed out
    UpstreamTimeout(String),
    /// Unexpected internal failure
    InternalError(String),
}

impl ApiError {
    /// Build the JSON error body
    pub fn to_response(&self, request_id: Option<String>) -> ErrorResponse {
        let (error_type, message) = match self {
            ApiError::InvalidRequest(msg) => ("invalid_request", msg.clone()),
            ApiError::ArticleNotFound(msg) => ("article_not_found", msg.clone()),
            ApiError::AmbiguousTitle(msg) => ("ambiguous_title", msg.clone()),
            ApiError::UpstreamError(msg) => ("upstream_error", msg.clone()),
            ApiError::UpstreamTimeout(msg) => ("upstream_timeout", msg.clone()),
            ApiError::InternalError(msg) => ("internal_error", msg.clone()),
        };

        ErrorResponse {
            error_type: error_type.to_string(),
            message,
            request_id,
        }
    }

    /// HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            ApiError::InvalidRequest(_) => 400,
            ApiError::ArticleNotFound(_) => 404,
            ApiError::AmbiguousTitle(_) => 409,
            ApiError::UpstreamError(_) => 502,
            ApiError::UpstreamTimeout(_) => 504,
            ApiError::InternalError(_) => 500,
        }
    }
}

impl From<AssistantError> for ApiError {
    fn from(error: AssistantError) -> Self {
        match error {
            AssistantError::Article(e) => match e {
                WikiError::PageNotFound { .. } => ApiError::ArticleNotFound(e.to_string()),
                WikiError::Disambiguation { .. } => ApiError::AmbiguousTitle(e.to_string()),
                WikiError::Timeout { .. } => ApiError::UpstreamTimeout(e.to_string()),
                WikiError::ApiError { .. } | WikiError::InvalidResponse(_) => {
                    ApiError::UpstreamError(e.to_string())
                }
            },
            AssistantError::Summarization(e) => match e {
                SummarizeError::Timeout { .. } => ApiError::UpstreamTimeout(e.to_string()),
                SummarizeError::ApiError { .. } | SummarizeError::InvalidResponse(_) => {
                    ApiError::UpstreamError(e.to_string())
                }
            },
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::InvalidRequest(msg) => write!(f, "Invalid request: {}", msg),
            ApiError::ArticleNotFound(msg) => write!(f, "Article not found: {}", msg),
            ApiError::AmbiguousTitle(msg) => write!(f, "Ambiguous title: {}", msg),
            ApiError::UpstreamError(msg) => write!(f, "Upstream error: {}", msg),
            ApiError::UpstreamTimeout(msg) => write!(f, "Upstream timeout: {}", msg),
            ApiError::InternalError(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}
