// Copyright (c) 2025 WikiQA
// SPDX-License-Identifier: BUSL-1.1
//! Core types for Wikipedia article retrieval

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Supported Wikipedia language editions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English Wikipedia (en.wikipedia.org)
    En,
    /// Turkish Wikipedia (tr.wikipedia.org)
    Tr,
}

impl Language {
    /// The 2-letter language code used in Wikipedia hostnames
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Tr => "tr",
        }
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::Tr
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "en" => Ok(Language::En),
            "tr" => Ok(Language::Tr),
            other => Err(format!("unsupported language code '{}'", other)),
        }
    }
}

/// A fetched Wikipedia article
///
/// `title` is the canonical page title after redirect resolution, which may
/// differ from the title the user typed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    /// Canonical page title
    pub title: String,
    /// Plain-text article body
    pub body: String,
    /// Language edition the article was fetched from
    pub language: Language,
}

/// Errors that can occur while fetching an article
#[derive(Debug, Error)]
pub enum WikiError {
    /// No page exists for the requested title
    #[error("No Wikipedia page found for '{title}'")]
    PageNotFound {
        /// The title that failed to resolve
        title: String,
    },

    /// The title resolves to a disambiguation page
    #[error("'{title}' is ambiguous, a more specific title is required")]
    Disambiguation {
        /// The canonical title of the disambiguation page
        title: String,
    },

    /// HTTP-level error from the MediaWiki API
    #[error("Wikipedia API error: {status} - {message}")]
    ApiError {
        /// HTTP status code (0 if the request never completed)
        status: u16,
        /// Error message
        message: String,
    },

    /// The request timed out
    #[error("Wikipedia request timed out after {timeout_ms}ms")]
    Timeout {
        /// Timeout duration in milliseconds
        timeout_ms: u64,
    },

    /// The API responded with JSON we could not interpret
    #[error("Unexpected Wikipedia API response: {0}")]
    InvalidResponse(String),
}

/// Any component that can resolve a title to an article
#[async_trait]
pub trait ArticleSource: Send + Sync {
    /// Fetch the article for `title` from the given language edition
    async fn fetch_article(&self, title: &str, lang: Language) -> Result<Article, WikiError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_codes() {
        assert_eq!(Language::En.code(), "en");
        assert_eq!(Language::Tr.code(), "tr");
    }

    #[test]
    fn test_language_from_str() {
        assert_eq!("en".parse::<Language>().unwrap(), Language::En);
        assert_eq!("TR".parse::<Language>().unwrap(), Language::Tr);
        assert!("de".parse::<Language>().is_err());
    }

    #[test]
    fn test_language_serde_round_trip() {
        let json = serde_json::to_string(&Language::En).unwrap();
        assert_eq!(json, "\"en\"");
        let lang: Language = serde_json::from_str("\"tr\"").unwrap();
        assert_eq!(lang, Language::Tr);
    }

    #[test]
    fn test_article_serialization() {
        let article = Article {
            title: "Albert Einstein".to_string(),
            body: "Albert Einstein was a theoretical physicist.".to_string(),
            language: Language::En,
        };

        let json = serde_json::to_string(&article).unwrap();
        assert!(json.contains("Albert Einstein"));
        assert!(json.contains("\"language\":\"en\""));
    }

    #[test]
    fn test_wiki_error_display() {
        let error = WikiError::PageNotFound {
            title: "Xyzzzabc123NoSuchPage".to_string(),
        };
        assert!(error.to_string().contains("Xyzzzabc123NoSuchPage"));

        let error = WikiError::ApiError {
            status: 503,
            message: "upstream unavailable".to_string(),
        };
        assert!(error.to_string().contains("503"));
    }
}
