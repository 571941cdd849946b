//! HTTP fetcher for downloading GeoIP ACL sources.
//!
//! Each source is fetched independently with the caller-specified timeout;
//! one source failing never aborts the others. Failed sources are excluded
//! and reported by URL. There is no retry: a source that cannot be reached
//! this run is simply absent from the result.

use anyhow::{Context, Result};
use futures::stream::{self, StreamExt};
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info};

use crate::error::FetchError;
use crate::utils::format_bytes;

/// Maximum size per source file (64 MB). Full GeoIP ACL dumps covering all
/// countries run to tens of megabytes.
const MAX_SOURCE_SIZE: usize = 64 * 1024 * 1024;

/// Concurrent request bound, matching the default source count.
const MAX_CONCURRENT_FETCHES: usize = 3;

/// Raw text retrieved from one source; lives only until parsing.
#[derive(Debug, Clone)]
pub struct SourceBlob {
    pub url: String,
    pub content: String,
}

/// HTTP client for fetching ACL sources.
pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    /// Create a fetcher whose requests identify the country being queried.
    pub fn new(country: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(format!(
                "geoacl/{} Country/{}",
                env!("CARGO_PKG_VERSION"),
                country
            ))
            .build()
            .context("Failed to create HTTP client")?;
        Ok(Self { client })
    }

    /// Fetch a single source, enforcing HTTP success and the size cap.
    pub async fn fetch_source(&self, url: &str) -> Result<SourceBlob> {
        debug!("Requesting {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .with_context(|| format!("request to {} failed", url))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status)).with_context(|| format!("fetching {}", url));
        }

        if let Some(length) = response.content_length() {
            if length as usize > MAX_SOURCE_SIZE {
                return Err(FetchError::TooLarge {
                    size: length as usize,
                    max: MAX_SOURCE_SIZE,
                })
                .with_context(|| format!("fetching {}", url));
            }
        }

        let content = response
            .text()
            .await
            .with_context(|| format!("failed to read body from {}", url))?;

        // Content-Length is not always present; re-check the actual size.
        if content.len() > MAX_SOURCE_SIZE {
            return Err(FetchError::TooLarge {
                size: content.len(),
                max: MAX_SOURCE_SIZE,
            })
            .with_context(|| format!("fetching {}", url));
        }

        info!(
            "Downloaded {} from {}",
            format_bytes(content.len() as u64),
            url
        );

        Ok(SourceBlob {
            url: url.to_string(),
            content,
        })
    }

    /// Fetch all sources concurrently, bounded by [`MAX_CONCURRENT_FETCHES`].
    ///
    /// Results are paired with their URL so callers can report which sources
    /// failed; completion order is not the input order.
    pub async fn fetch_all(&self, urls: &[String]) -> Vec<(String, Result<SourceBlob>)> {
        stream::iter(urls.iter().map(|url| async move {
            let result = self.fetch_source(url).await;
            (url.clone(), result)
        }))
        .buffer_unordered(MAX_CONCURRENT_FETCHES)
        .collect()
        .await
    }
}
