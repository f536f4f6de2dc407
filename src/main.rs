// Copyright (c) 2025 WikiQA
// SPDX-License-Identifier: BUSL-1.1
use anyhow::Result;
use std::{env, sync::Arc};
use wikiqa_node::{
    api,
    assistant::Assistant,
    config::AssistantConfig,
    qa::{AnswerSelector, HfQuestionAnsweringClient},
    summarize::{HfSummarizationClient, Summarizer},
    wiki::WikiClient,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber for logging
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info");
    }
    tracing_subscriber::fmt::init();

    println!("🚀 Starting {}...", wikiqa_node::version::get_version_string());

    let config = AssistantConfig::from_env();
    config
        .validate()
        .map_err(|e| anyhow::anyhow!("invalid configuration: {}", e))?;

    tracing::info!(
        "Summarizer endpoint: {} | QA endpoint: {}",
        config.summarize.endpoint,
        config.qa.endpoint
    );

    let wiki = Arc::new(WikiClient::new(config.wiki.clone()));
    let summarizer = Summarizer::new(
        Box::new(HfSummarizationClient::new(&config.summarize)),
        config.summarize.clone(),
    );
    let selector = AnswerSelector::new(
        Box::new(HfQuestionAnsweringClient::new(&config.qa)),
        config.qa.clone(),
    );

    let assistant = Arc::new(Assistant::new(
        wiki,
        summarizer,
        selector,
        config.context_max_chars,
    ));

    api::start_server(assistant, config.api_port).await
}
