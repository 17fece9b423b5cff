//! Pipeline orchestration: the linear chain from raw URL to filtered XML.
//!
//! The stages run strictly in order — validate, fetch, parse, filter,
//! serialize — and the first failure aborts the whole request. There is no
//! retry and no partial output: the caller gets either the complete filtered
//! document or a single error mapped to an HTTP-style status and message.

use reqwest::Client;
use thiserror::Error;
use url::Url;

use crate::config;
use crate::feed::{self, FetchError, ParseError, SerializeError};
use crate::filter::FilterRules;
use crate::util::{validate_url, UrlValidationError};

/// A stage failure, tagged with the stage that gave up.
///
/// The `Display` form of each variant is exactly the plain-text body the
/// hosting handler sends for it; the sources carry the underlying detail for
/// logs only. In particular the upstream HTTP status inside
/// [`FetchError::HttpStatus`] is never surfaced to clients — every fetch
/// problem collapses into the same generic 500.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Invalid URL")]
    InvalidUrl(#[source] UrlValidationError),
    #[error("Failed to fetch RSS feed")]
    Fetch(#[source] FetchError),
    #[error("Failed to parse RSS feed")]
    Parse(#[source] ParseError),
    #[error("Failed to generate filtered RSS")]
    Serialize(#[source] SerializeError),
}

impl PipelineError {
    /// HTTP-style status for this failure: 400 for client-caused input
    /// errors, 500 for everything upstream or internal.
    pub fn status(&self) -> u16 {
        match self {
            PipelineError::InvalidUrl(_) => 400,
            PipelineError::Fetch(_) | PipelineError::Parse(_) | PipelineError::Serialize(_) => {
                500
            }
        }
    }
}

/// Runs the full pipeline for one feed URL string.
///
/// # Errors
///
/// Returns the first stage failure; see [`PipelineError`] for the mapping
/// to statuses and response messages.
pub async fn run(
    client: &Client,
    rules: &FilterRules,
    raw_url: &str,
) -> Result<String, PipelineError> {
    let url = validate_url(raw_url).map_err(PipelineError::InvalidUrl)?;
    run_validated(client, rules, &url).await
}

/// The pipeline tail for an already-validated URL: fetch → parse → filter →
/// serialize.
///
/// Callers own the SSRF guard; [`run`] is the production entry point and the
/// only place that skips nothing.
pub async fn run_validated(
    client: &Client,
    rules: &FilterRules,
    url: &Url,
) -> Result<String, PipelineError> {
    let bytes = feed::fetch(client, url).await.map_err(PipelineError::Fetch)?;
    let parsed = feed::parse(&bytes).map_err(PipelineError::Parse)?;
    let filtered = rules.filter(&parsed);
    feed::serialize(&filtered).map_err(PipelineError::Serialize)
}

/// Response value handed back to the hosting runtime.
///
/// Host-agnostic on purpose: an integer status, header name/value pairs,
/// and a string body are all any runtime needs to marshal the result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedResponse {
    pub status: u16,
    /// Header pairs; names use the canonical lowercase form.
    pub headers: Vec<(&'static str, String)>,
    pub body: String,
}

impl FeedResponse {
    /// Successful response carrying the filtered feed XML.
    fn feed(body: String) -> Self {
        Self {
            status: 200,
            headers: vec![
                (
                    "content-type",
                    "application/rss+xml; charset=utf-8".to_string(),
                ),
                (
                    "cache-control",
                    format!("public, max-age={}", config::CACHE_MAX_AGE_SECS),
                ),
            ],
            body,
        }
    }

    /// Error response with a short plain-text message.
    fn error(status: u16, message: &str) -> Self {
        Self {
            status,
            headers: vec![("content-type", "text/plain; charset=utf-8".to_string())],
            body: message.to_string(),
        }
    }
}

/// Handles one proxy request.
///
/// `url_param` is the raw value of the `url` query parameter as extracted by
/// the host. A missing or empty value short-circuits to a 400 before any
/// network activity; otherwise the outcome of [`run`] is mapped onto a
/// [`FeedResponse`] with the fixed headers and messages.
pub async fn handle_request(
    client: &Client,
    rules: &FilterRules,
    url_param: Option<&str>,
) -> FeedResponse {
    let raw_url = match url_param {
        Some(url) if !url.is_empty() => url,
        _ => return FeedResponse::error(400, "URL parameter is required"),
    };

    match run(client, rules, raw_url).await {
        Ok(xml) => FeedResponse::feed(xml),
        Err(e) => {
            tracing::warn!(url = %raw_url, error = ?e, "Pipeline stage failed");
            FeedResponse::error(e.status(), &e.to_string())
        }
    }
}
