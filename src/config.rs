//! Run configuration: an explicit record built from CLI arguments and
//! validated on construction. No global state; the orchestrator receives
//! everything it needs through this struct.

use anyhow::{bail, Result};
use std::path::PathBuf;
use std::time::Duration;

/// Default GeoIP ACL sources, one per upstream database.
pub const DEFAULT_SOURCES: &[&str] = &[
    "https://geoip.site/download/MaxMind/GeoIP.acl",
    "https://geoip.site/download/IP2Location/GeoIP.acl",
    "https://geoip.site/download/DB-IP/GeoIP.acl",
];

/// Request timeout applied when the CLI does not override it.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for one fetch run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Two-letter country code, uppercased.
    pub country: String,
    pub sources: Vec<String>,
    pub timeout: Duration,
    pub ipv4_output: PathBuf,
    pub ipv6_output: PathBuf,
}

impl RunConfig {
    /// Build and validate a configuration.
    ///
    /// Empty `urls` selects [`DEFAULT_SOURCES`]; missing output paths
    /// default to `<cc>_ipv4.txt` / `<cc>_ipv6.txt`.
    pub fn new(
        country: &str,
        urls: Vec<String>,
        timeout_secs: u64,
        ipv4_output: Option<PathBuf>,
        ipv6_output: Option<PathBuf>,
    ) -> Result<Self> {
        if country.len() != 2 || !country.chars().all(|c| c.is_ascii_alphabetic()) {
            bail!("Country code must be exactly two letters, got '{}'", country);
        }
        let country = country.to_ascii_uppercase();

        if timeout_secs == 0 {
            bail!("Timeout must be at least 1 second");
        }

        let sources: Vec<String> = if urls.is_empty() {
            DEFAULT_SOURCES.iter().map(|s| s.to_string()).collect()
        } else {
            urls
        };
        for url in &sources {
            if !url.starts_with("https://") {
                bail!("Source URL must use HTTPS: {}", url);
            }
        }

        let prefix = country.to_ascii_lowercase();
        Ok(Self {
            ipv4_output: ipv4_output.unwrap_or_else(|| PathBuf::from(format!("{}_ipv4.txt", prefix))),
            ipv6_output: ipv6_output.unwrap_or_else(|| PathBuf::from(format!("{}_ipv6.txt", prefix))),
            country,
            sources,
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}
