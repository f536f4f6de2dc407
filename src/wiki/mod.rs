// Copyright (c) 2025 WikiQA
// SPDX-License-Identifier: BUSL-1.1
//! Wikipedia article retrieval
//!
//! Resolves a user-supplied title to the canonical page title and plain-text
//! body via the MediaWiki Action API. The lookup language is an explicit
//! per-call parameter, so concurrent requests in different languages never
//! interfere.

pub mod client;
pub mod config;
pub mod types;

pub use client::WikiClient;
pub use config::WikiConfig;
pub use types::{Article, ArticleSource, Language, WikiError};
