// Copyright (c) 2025 WikiQA
// SPDX-License-Identifier: BUSL-1.1
//! MediaWiki Action API client
//!
//! Fetches the canonical title and plain-text extract of a page, following
//! redirects. Disambiguation pages are detected via the `disambiguation`
//! page property and surfaced as a distinct error.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, info};

use super::config::WikiConfig;
use super::types::{Article, ArticleSource, Language, WikiError};

/// Client for the MediaWiki Action API
pub struct WikiClient {
    client: Client,
    config: WikiConfig,
}

impl WikiClient {
    /// Create a new Wikipedia client
    pub fn new(config: WikiConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()
            .expect("Failed to create HTTP client");

        Self { client, config }
    }

    /// API endpoint for the given language edition
    fn api_url(&self, lang: Language) -> String {
        match &self.config.endpoint_override {
            Some(endpoint) => endpoint.clone(),
            None => format!("https://{}.wikipedia.org/w/api.php", lang.code()),
        }
    }
}

#[async_trait]
impl ArticleSource for WikiClient {
    async fn fetch_article(&self, title: &str, lang: Language) -> Result<Article, WikiError> {
        let url = self.api_url(lang);
        debug!("Fetching article '{}' from {}", title, url);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("action", "query"),
                ("format", "json"),
                ("formatversion", "2"),
                ("redirects", "1"),
                ("prop", "extracts|pageprops"),
                ("explaintext", "1"),
                ("ppprop", "disambiguation"),
                ("titles", title),
            ])
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    WikiError::Timeout {
                        timeout_ms: self.config.timeout_secs * 1000,
                    }
                } else {
                    WikiError::ApiError {
                        status: 0,
                        message: e.to_string(),
                    }
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(WikiError::ApiError {
                status: status.as_u16(),
                message: "Wikipedia request failed".to_string(),
            });
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| WikiError::InvalidResponse(e.to_string()))?;

        let article = parse_query_response(&body, title, lang)?;

        info!(
            "Resolved '{}' to '{}' ({} chars, {})",
            title,
            article.title,
            article.body.chars().count(),
            lang
        );

        Ok(article)
    }
}

/// Parse an `action=query` response into an article
///
/// With `formatversion=2` the pages come back as an array; missing pages
/// carry `"missing": true` and invalid titles `"invalid": true`.
pub(crate) fn parse_query_response(
    body: &Value,
    requested_title: &str,
    lang: Language,
) -> Result<Article, WikiError> {
    let page = body["query"]["pages"]
        .get(0)
        .ok_or_else(|| WikiError::InvalidResponse("no pages in query response".to_string()))?;

    if page["missing"].as_bool().unwrap_or(false) || page["invalid"].as_bool().unwrap_or(false) {
        return Err(WikiError::PageNotFound {
            title: requested_title.to_string(),
        });
    }

    let canonical_title = page["title"]
        .as_str()
        .ok_or_else(|| WikiError::InvalidResponse("page has no title".to_string()))?
        .to_string();

    if page["pageprops"].get("disambiguation").is_some() {
        return Err(WikiError::Disambiguation {
            title: canonical_title,
        });
    }

    let extract = page["extract"].as_str().unwrap_or("");
    if extract.trim().is_empty() {
        return Err(WikiError::InvalidResponse(format!(
            "page '{}' has no extract",
            canonical_title
        )));
    }

    Ok(Article {
        title: canonical_title,
        body: extract.to_string(),
        language: lang,
    })
}
