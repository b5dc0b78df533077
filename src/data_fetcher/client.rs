//! HTTP client construction and the single-attempt fetch wrapper

use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, error, info, instrument};

use crate::constants::{ERROR_BODY_EXCERPT_CHARS, HTTP_POOL_MAX_IDLE_PER_HOST};
use crate::error::AppError;

/// Creates a configured HTTP client with connection pooling and a
/// per-request timeout. One client is built per process and shared by
/// every operation invocation.
pub fn build_client(timeout_seconds: u64) -> Result<Client, reqwest::Error> {
    Client::builder()
        .timeout(Duration::from_secs(timeout_seconds))
        .pool_max_idle_per_host(HTTP_POOL_MAX_IDLE_PER_HOST)
        .build()
}

/// Issues a single GET request and parses the JSON response into `T`.
///
/// This is deliberately fail-fast: one attempt, no retries, no backoff.
/// The caller decides how to phrase a failure for the end user; this
/// function only classifies it:
/// - non-2xx status -> [`AppError::ApiStatus`] with a truncated body excerpt
/// - timeout / connection failure -> the network variants
/// - any other transport failure -> [`AppError::ApiFetch`]
/// - empty, non-JSON, or wrong-shape body -> the malformed-response variants
///
/// Every error path is logged with the URL and at most 200 characters of
/// the offending payload, enough to diagnose without leaking full bodies.
#[instrument(skip(client, headers))]
pub async fn fetch<T: DeserializeOwned>(
    client: &Client,
    url: &str,
    headers: &[(&str, &str)],
) -> Result<T, AppError> {
    info!("Fetching data from URL: {url}");

    let mut request = client.get(url);
    for (name, value) in headers {
        request = request.header(*name, *value);
    }

    let response = match request.send().await {
        Ok(resp) => resp,
        Err(e) => {
            error!("Request failed for URL {}: {}", url, excerpt(&e.to_string()));
            return if e.is_timeout() {
                Err(AppError::network_timeout(url))
            } else if e.is_connect() {
                Err(AppError::network_connection(url, e.to_string()))
            } else {
                Err(AppError::ApiFetch(e))
            };
        }
    };

    let status = response.status();
    debug!("Response status: {status}");

    if !status.is_success() {
        let status_code = status.as_u16();
        let body_excerpt = excerpt(&response.text().await.unwrap_or_default());
        error!("HTTP {} for URL {}: {}", status_code, url, body_excerpt);
        return Err(AppError::api_status_error(status_code, body_excerpt, url));
    }

    let response_text = match response.text().await {
        Ok(text) => text,
        Err(e) => {
            error!("Failed to read response body from URL {}: {}", url, e);
            return Err(AppError::ApiFetch(e));
        }
    };

    debug!("Response length: {} bytes", response_text.len());

    match serde_json::from_str::<T>(&response_text) {
        Ok(parsed) => Ok(parsed),
        Err(e) => {
            error!(
                "Failed to parse API response: {} (URL: {}): {}",
                e,
                url,
                excerpt(&response_text)
            );

            if response_text.trim().is_empty() {
                Err(AppError::api_no_data("Response body is empty", url))
            } else if !response_text.trim_start().starts_with('{')
                && !response_text.trim_start().starts_with('[')
            {
                Err(AppError::api_malformed_json(
                    "Response is not valid JSON",
                    url,
                ))
            } else {
                // Valid JSON but not the shape the caller expected
                Err(AppError::api_unexpected_structure(e.to_string(), url))
            }
        }
    }
}

fn excerpt(text: &str) -> String {
    text.chars().take(ERROR_BODY_EXCERPT_CHARS).collect()
}
