// Copyright (c) 2025 WikiQA
// SPDX-License-Identifier: BUSL-1.1
//! Health check and form page handlers

use axum::response::Html;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::version;

/// Response body for GET /health
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// GET /health - Liveness check
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: version::VERSION.to_string(),
    })
}

/// GET / - The assistant form page
///
/// Four inputs bound one-to-one to the ask endpoint's parameters, four
/// output areas bound to its return values. Submission triggers exactly one
/// pipeline invocation; errors render in a distinct box instead of the
/// answer field.
pub async fn index_handler() -> Html<&'static str> {
    Html(FORM_PAGE)
}

const FORM_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Wikipedia QA Assistant</title>
<style>
  body { font-family: sans-serif; max-width: 52rem; margin: 2rem auto; padding: 0 1rem; }
  label { display: block; margin-top: 0.8rem; font-weight: bold; }
  input[type=text] { width: 100%; padding: 0.4rem; }
  textarea { width: 100%; padding: 0.4rem; }
  button { margin-top: 1rem; padding: 0.5rem 1.5rem; }
  #error { color: #b00020; margin-top: 1rem; white-space: pre-wrap; display: none; }
</style>
</head>
<body>
<h1>&#129504; Wikipedia QA Assistant</h1>
<p>Fetches a Wikipedia article, produces a short summary, and answers your question.</p>

<form id="ask-form">
  <label>&#128270; Wikipedia title</label>
  <input type="text" id="title" required>

  <label>&#127757; Language</label>
  <input type="radio" name="language" value="en" id="lang-en"><label for="lang-en" style="display:inline">en</label>
  <input type="radio" name="language" value="tr" id="lang-tr" checked><label for="lang-tr" style="display:inline">tr</label>

  <label>&#10067; Question</label>
  <input type="text" id="question" required>

  <label>&#128172; Answer context</label>
  <input type="radio" name="contextMode" value="summary" id="ctx-summary" checked><label for="ctx-summary" style="display:inline">Summary</label>
  <input type="radio" name="contextMode" value="full" id="ctx-full"><label for="ctx-full" style="display:inline">Full text</label>

  <button type="submit">Ask</button>
</form>

<div id="error"></div>

<label>&#128196; Resolved title</label>
<textarea id="out-title" rows="1" readonly></textarea>
<label>&#128218; Content (truncated)</label>
<textarea id="out-content" rows="10" readonly></textarea>
<label>&#9986; Summary</label>
<textarea id="out-summary" rows="3" readonly></textarea>
<label>&#128172; Answer</label>
<textarea id="out-answer" rows="2" readonly></textarea>

<script>
document.getElementById('ask-form').addEventListener('submit', async (event) => {
  event.preventDefault();
  const errorBox = document.getElementById('error');
  errorBox.style.display = 'none';
  for (const id of ['out-title', 'out-content', 'out-summary', 'out-answer']) {
    document.getElementById(id).value = '';
  }

  const body = {
    title: document.getElementById('title').value,
    language: document.querySelector('input[name=language]:checked').value,
    question: document.getElementById('question').value,
    contextMode: document.querySelector('input[name=contextMode]:checked').value,
  };

  try {
    const response = await fetch('/v1/ask', {
      method: 'POST',
      headers: { 'Content-Type': 'application/json' },
      body: JSON.stringify(body),
    });
    const data = await response.json();
    if (!response.ok) {
      errorBox.textContent = data.message || 'Request failed';
      errorBox.style.display = 'block';
      return;
    }
    document.getElementById('out-title').value = data.title;
    document.getElementById('out-content').value = data.content;
    document.getElementById('out-summary').value = data.summary;
    document.getElementById('out-answer').value = data.answer;
  } catch (e) {
    errorBox.textContent = String(e);
    errorBox.style.display = 'block';
  }
});
</script>
</body>
</html>
"#;
