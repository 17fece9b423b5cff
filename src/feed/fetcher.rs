use reqwest::header;
use thiserror::Error;
use url::Url;

use crate::config;

/// Errors that can occur while retrieving a feed.
///
/// Transport problems and HTTP-level failures are kept distinct so callers
/// can log the upstream status code without exposing it to clients.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Network-level error (DNS, connection, TLS, etc.)
    #[error("Request failed: {0}")]
    Network(#[from] reqwest::Error),
    /// HTTP response with non-2xx status code
    #[error("HTTP error: status {0}")]
    HttpStatus(u16),
    /// Request exceeded the fetch deadline
    #[error("Request timed out")]
    Timeout,
    /// Response body exceeded the size limit
    #[error("Response too large")]
    ResponseTooLarge,
}

/// Fetches the raw bytes of a feed.
///
/// Issues exactly one GET request carrying the identifying
/// `User-Agent: RSS-Filter/1.0` header. The whole operation — connection,
/// headers, and body — must finish within [`config::FETCH_TIMEOUT`].
/// The body is read in full before returning; responses larger than
/// [`config::MAX_FEED_SIZE`] are rejected.
///
/// # Arguments
///
/// * `client` - HTTP client to issue the request with
/// * `url` - Feed URL; callers validate it first (see [`crate::util::validate_url`])
///
/// # Errors
///
/// - [`FetchError::Network`] - DNS, connection, or TLS failure
/// - [`FetchError::Timeout`] - deadline exceeded
/// - [`FetchError::HttpStatus`] - any non-2xx response, no retry
/// - [`FetchError::ResponseTooLarge`] - body over the size cap
pub async fn fetch(client: &reqwest::Client, url: &Url) -> Result<Vec<u8>, FetchError> {
    tokio::time::timeout(config::FETCH_TIMEOUT, fetch_inner(client, url))
        .await
        .map_err(|_| FetchError::Timeout)?
}

async fn fetch_inner(client: &reqwest::Client, url: &Url) -> Result<Vec<u8>, FetchError> {
    let response = client
        .get(url.clone())
        .header(header::USER_AGENT, config::USER_AGENT)
        .send()
        .await
        .map_err(FetchError::Network)?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::HttpStatus(status.as_u16()));
    }

    // Fast path: trust Content-Length when the server provides one
    if let Some(len) = response.content_length() {
        if len as usize > config::MAX_FEED_SIZE {
            return Err(FetchError::ResponseTooLarge);
        }
    }

    let bytes = response.bytes().await.map_err(FetchError::Network)?;
    if bytes.len() > config::MAX_FEED_SIZE {
        return Err(FetchError::ResponseTooLarge);
    }

    Ok(bytes.to_vec())
}
