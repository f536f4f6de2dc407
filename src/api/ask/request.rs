// Copyright (c) 2025 WikiQA
// SPDX-License-Identifier: BUSL-1.1
//! Ask API request types

use serde::{Deserialize, Serialize};

use crate::assistant::ContextMode;
use crate::wiki::Language;

/// Request body for POST /v1/ask
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AskApiRequest {
    /// Wikipedia page title (required, max 300 chars)
    pub title: String,

    /// Language edition (default: tr)
    #[serde(default)]
    pub language: Language,

    /// Free-text question (required, max 500 chars)
    pub question: String,

    /// Whether to answer against the summary or the full text (default: summary)
    #[serde(default)]
    pub context_mode: ContextMode,

    /// Optional request ID for tracking
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub request_id: Option<String>,
}

impl AskApiRequest {
    /// Validate the request
    pub fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("Title cannot be empty".to_string());
        }
        if self.title.len() > 300 {
            return Err("Title too long (max 300 characters)".to_string());
        }
        if self.question.trim().is_empty() {
            return Err("Question cannot be empty".to_string());
        }
        if self.question.len() > 500 {
            return Err("Question too long (max 500 characters)".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_deserialization() {
        let json = r#"{
            "title": "Albert Einstein",
            "language": "en",
            "question": "Where was Einstein born?",
            "contextMode": "summary"
        }"#;

        let request: AskApiRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.title, "Albert Einstein");
        assert_eq!(request.language, Language::En);
        assert_eq!(request.context_mode, ContextMode::Summary);
    }

    #[test]
    fn test_request_defaults() {
        let json = r#"{"title": "Atatürk", "question": "Ne zaman doğdu?"}"#;

        let request: AskApiRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.language, Language::Tr);
        assert_eq!(request.context_mode, ContextMode::Summary);
        assert!(request.request_id.is_none());
    }

    #[test]
    fn test_request_full_text_mode() {
        let json = r#"{
            "title": "Albert Einstein",
            "question": "Where was Einstein born?",
            "contextMode": "full"
        }"#;

        let request: AskApiRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.context_mode, ContextMode::FullText);
    }

    #[test]
    fn test_validation_empty_title() {
        let request = AskApiRequest {
            title: "   ".to_string(),
            language: Language::En,
            question: "valid?".to_string(),
            context_mode: ContextMode::Summary,
            request_id: None,
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_validation_empty_question() {
        let request = AskApiRequest {
            title: "Albert Einstein".to_string(),
            language: Language::En,
            question: "".to_string(),
            context_mode: ContextMode::Summary,
            request_id: None,
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_validation_title_too_long() {
        let request = AskApiRequest {
            title: "a".repeat(301),
            language: Language::En,
            question: "valid?".to_string(),
            context_mode: ContextMode::Summary,
            request_id: None,
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_validation_question_too_long() {
        let request = AskApiRequest {
            title: "Albert Einstein".to_string(),
            language: Language::En,
            question: "q".repeat(501),
            context_mode: ContextMode::Summary,
            request_id: None,
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_validation_success() {
        let request = AskApiRequest {
            title: "Albert Einstein".to_string(),
            language: Language::En,
            question: "Where was Einstein born?".to_string(),
            context_mode: ContextMode::Summary,
            request_id: Some("req-123".to_string()),
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_invalid_language_rejected() {
        let json = r#"{"title": "X", "language": "de", "question": "q"}"#;
        assert!(serde_json::from_str::<AskApiRequest>(json).is_err());
    }
}
