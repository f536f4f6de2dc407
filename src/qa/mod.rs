// Copyright (c) 2025 WikiQA
// SPDX-License-Identifier: BUSL-1.1
//! Extractive question answering
//!
//! Splits a context into paragraphs, queries an extractive QA model per
//! paragraph, and selects the highest-confidence non-empty answer above an
//! acceptance threshold.

pub mod client;
pub mod config;
pub mod selector;

pub use client::{HfQuestionAnsweringClient, QaError, QaModel, QaPrediction};
pub use config::QaConfig;
pub use selector::{AnswerSelector, ParagraphOutcome, SelectionReport, NO_ANSWER_MESSAGE};
