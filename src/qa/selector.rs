// Copyright (c) 2025 WikiQA
// SPDX-License-Identifier: BUSL-1.1
//! Paragraph-based answer selection
//!
//! Queries the QA model once per paragraph and keeps the highest-confidence
//! non-empty answer. Per-paragraph failures are recorded in the selection
//! report and logged, never fatal.

use tracing::{debug, warn};

use super::client::{QaModel, QaPrediction};
use super::config::QaConfig;
use crate::text::split_paragraphs;

/// Fixed message returned when no answer clears the acceptance threshold
pub const NO_ANSWER_MESSAGE: &str = "No answer found. Try asking a more specific question.";

/// What happened to a single paragraph during selection
#[derive(Debug, Clone)]
pub enum ParagraphOutcome {
    /// The model returned a non-empty candidate answer
    Scored {
        /// Candidate answer span
        answer: String,
        /// Model confidence
        score: f32,
    },
    /// The model returned an empty answer span; not a candidate
    EmptyAnswer,
    /// The model query failed; iteration continued with the next paragraph
    Failed {
        /// Why the query failed
        reason: String,
    },
}

/// Result of scanning all paragraphs of a context
#[derive(Debug, Clone, Default)]
pub struct SelectionReport {
    /// Per-paragraph outcomes, in iteration order
    pub outcomes: Vec<ParagraphOutcome>,
    /// Number of paragraphs that passed the length filter
    pub paragraphs_considered: usize,
    /// Best candidate so far (highest score, earliest paragraph on ties)
    pub best: Option<QaPrediction>,
}

impl SelectionReport {
    /// The best candidate, if it clears the acceptance threshold
    pub fn accepted(&self, threshold: f32) -> Option<&QaPrediction> {
        self.best.as_ref().filter(|best| best.score > threshold)
    }
}

/// Selects the best answer across the paragraphs of a context
pub struct AnswerSelector {
    model: Box<dyn QaModel>,
    config: QaConfig,
}

impl AnswerSelector {
    /// Create a new answer selector backed by the given model
    pub fn new(model: Box<dyn QaModel>, config: QaConfig) -> Self {
        Self { model, config }
    }

    /// Scan every qualifying paragraph of `context` for an answer to `question`
    ///
    /// The running best is replaced only on a strictly greater score, so
    /// among equal scores the earliest paragraph's answer is retained.
    pub async fn select(&self, context: &str, question: &str) -> SelectionReport {
        let paragraphs = split_paragraphs(context, self.config.min_paragraph_chars);
        debug!(
            "Scanning {} paragraphs (min length {})",
            paragraphs.len(),
            self.config.min_paragraph_chars
        );

        let mut report = SelectionReport {
            paragraphs_considered: paragraphs.len(),
            ..SelectionReport::default()
        };

        for paragraph in paragraphs {
            match self.model.answer(question, paragraph).await {
                Ok(prediction) => {
                    if prediction.answer.trim().is_empty() {
                        report.outcomes.push(ParagraphOutcome::EmptyAnswer);
                        continue;
                    }

                    let better = report
                        .best
                        .as_ref()
                        .map_or(prediction.score > 0.0, |best| prediction.score > best.score);

                    report.outcomes.push(ParagraphOutcome::Scored {
                        answer: prediction.answer.clone(),
                        score: prediction.score,
                    });

                    if better {
                        report.best = Some(prediction);
                    }
                }
                Err(e) => {
                    warn!("QA model failed on paragraph, skipping: {}", e);
                    report.outcomes.push(ParagraphOutcome::Failed {
                        reason: e.to_string(),
                    });
                }
            }
        }

        report
    }

    /// Best answer text, or [`NO_ANSWER_MESSAGE`] if nothing clears the threshold
    pub async fn answer(&self, context: &str, question: &str) -> String {
        let report = self.select(context, question).await;

        match report.accepted(self.config.score_threshold) {
            Some(best) => best.answer.clone(),
            None => NO_ANSWER_MESSAGE.to_string(),
        }
    }
}
