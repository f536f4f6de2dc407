// Copyright (c) 2025 WikiQA
// SPDX-License-Identifier: BUSL-1.1
//! HTTP API and form page
//!
//! The presentation layer: a JSON endpoint plus a minimal HTML form bound
//! one-to-one to the assistant pipeline's inputs and outputs.

pub mod ask;
pub mod errors;
pub mod handlers;
pub mod http_server;

pub use ask::{ask_handler, AskApiRequest, AskApiResponse};
pub use errors::{ApiError, ErrorResponse};
pub use handlers::{health_handler, index_handler, HealthResponse};
pub use http_server::{router, start_server, AppState};
