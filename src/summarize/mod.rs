// Copyright (c) 2025 WikiQA
// SPDX-License-Identifier: BUSL-1.1
//! Abstractive summarization
//!
//! Truncates article text to a configured prefix, sends it to an external
//! summarization model, and trims the output to a few sentences.

pub mod client;
pub mod config;
pub mod service;

pub use client::{HfSummarizationClient, SummarizeError, SummaryModel};
pub use config::SummarizeConfig;
pub use service::{Summarizer, SHORT_TEXT_MESSAGE};
