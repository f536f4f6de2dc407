// Version information for the WikiQA Node

/// Semantic version number from the crate manifest
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Supported features in this version
pub const FEATURES: &[&str] = &[
    "wikipedia-fetch",
    "abstractive-summary",
    "extractive-qa",
    "summary-context",
    "full-text-context",
];

/// Supported Wikipedia language editions
pub const SUPPORTED_LANGUAGES: &[&str] = &["en", "tr"];

/// Get formatted version string for logging
pub fn get_version_string() -> String {
    format!("WikiQA Node {}", VERSION)
}

/// Get full version info for API responses
pub fn get_version_info() -> serde_json::Value {
    serde_json::json!({
        "version": VERSION,
        "features": FEATURES,
        "languages": SUPPORTED_LANGUAGES,
    })
}
