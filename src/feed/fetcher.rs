use crate::config::Config;
use crate::util::{validate_url, UrlValidationError};
use futures::StreamExt;
use thiserror::Error;

/// Errors that can occur while downloading a page.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The URL was rejected before any request was made
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] UrlValidationError),
    /// Network-level error (DNS, connection, TLS, etc.)
    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),
    /// The server answered with a status code of 400 or above
    #[error("HTTP error: status {status} {reason}")]
    HttpStatus { status: u16, reason: String },
    /// The configured timeout elapsed
    #[error("request timed out")]
    Timeout,
    /// The body exceeded the configured size limit
    #[error("response too large (limit {limit} bytes)")]
    TooLarge { limit: usize },
}

/// Downloads a page body with a single GET request.
///
/// The URL is validated first: http/https only, and no localhost or private
/// network hosts when `allow_private_hosts` is turned off. Any status code of
/// 400 or above fails before the body is read. There is no retry; the request
/// is bounded by `timeout_secs` only when one is configured.
///
/// # Errors
///
/// - [`FetchError::InvalidUrl`] - URL rejected by validation
/// - [`FetchError::Network`] - Connection, TLS or body stream errors
/// - [`FetchError::HttpStatus`] - Status code >= 400
/// - [`FetchError::Timeout`] - Request and body read exceeded `timeout_secs`
/// - [`FetchError::TooLarge`] - Body exceeded `max_page_bytes`
pub async fn fetch_page(
    client: &reqwest::Client,
    url: &str,
    config: &Config,
) -> Result<Vec<u8>, FetchError> {
    validate_url(url, config.allow_private_hosts)?;

    match config.timeout() {
        Some(limit) => tokio::time::timeout(limit, get_body(client, url, config.max_page_bytes))
            .await
            .map_err(|_| FetchError::Timeout)?,
        None => get_body(client, url, config.max_page_bytes).await,
    }
}

async fn get_body(
    client: &reqwest::Client,
    url: &str,
    limit: usize,
) -> Result<Vec<u8>, FetchError> {
    tracing::debug!(url = %url, "Fetching page");
    let response = client.get(url).send().await?;

    let status = response.status();
    if status.as_u16() >= 400 {
        return Err(FetchError::HttpStatus {
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or_default().to_owned(),
        });
    }

    let bytes = read_limited_bytes(response, limit).await?;
    tracing::debug!(url = %url, status = %status, bytes = bytes.len(), "Fetched page");
    Ok(bytes)
}

/// Reads a response body, failing as soon as it exceeds `limit` bytes.
async fn read_limited_bytes(
    response: reqwest::Response,
    limit: usize,
) -> Result<Vec<u8>, FetchError> {
    // Fast path: check Content-Length header
    if let Some(len) = response.content_length() {
        if len > limit as u64 {
            return Err(FetchError::TooLarge { limit });
        }
    }

    let mut bytes = Vec::new();
    let mut stream = response.bytes_stream();

    while let Some(chunk) = stream.next().await {
        let chunk = chunk?;
        if bytes.len().saturating_add(chunk.len()) > limit {
            return Err(FetchError::TooLarge { limit });
        }
        bytes.extend_from_slice(&chunk);
    }

    Ok(bytes)
}
