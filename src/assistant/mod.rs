// Copyright (c) 2025 WikiQA
// SPDX-License-Identifier: BUSL-1.1
//! Request orchestration
//!
//! Sequences fetch, summarize, and answer into one pipeline per request.
//! Each invocation is stateless and independent; there is no cross-request
//! caching or shared mutable state.

pub mod pipeline;
pub mod types;

pub use pipeline::Assistant;
pub use types::{AssistantAnswer, AssistantError, AssistantQuery, ContextMode};
