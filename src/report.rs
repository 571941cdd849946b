//! End-of-run summary, printable as text or JSON.

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;
use std::time::Duration;

use crate::reducer::NetworkSets;
use crate::utils::format_count;

/// Per-source fetch and parse statistics.
#[derive(Debug, Clone, Serialize)]
pub struct SourceReport {
    pub url: String,
    pub bytes: usize,
    pub networks: usize,
    pub skipped: usize,
}

/// Summary of one complete run.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub country: String,
    pub generated_at: DateTime<Utc>,
    pub sources: Vec<SourceReport>,
    pub failed_sources: Vec<String>,
    pub parsed_networks: usize,
    pub skipped_tokens: usize,
    pub ipv4_networks: usize,
    pub ipv6_networks: usize,
    pub covered_addresses: u128,
    pub elapsed_secs: f64,
}

impl RunReport {
    pub fn new(
        country: &str,
        sources: Vec<SourceReport>,
        failed_sources: Vec<String>,
        sets: &NetworkSets,
        elapsed: Duration,
    ) -> Self {
        let parsed_networks = sources.iter().map(|s| s.networks).sum();
        let skipped_tokens = sources.iter().map(|s| s.skipped).sum();
        Self {
            country: country.to_string(),
            generated_at: Utc::now(),
            sources,
            failed_sources,
            parsed_networks,
            skipped_tokens,
            ipv4_networks: sets.v4.len(),
            ipv6_networks: sets.v6.len(),
            covered_addresses: sets.address_count(),
            elapsed_secs: elapsed.as_secs_f64(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, " Country:  {}", self.country)?;
        writeln!(
            f,
            " Sources:  {} fetched, {} failed",
            self.sources.len(),
            self.failed_sources.len()
        )?;
        writeln!(
            f,
            " Parsed:   {} networks ({} tokens skipped)",
            format_count(self.parsed_networks),
            self.skipped_tokens
        )?;
        writeln!(
            f,
            " Output:   {} IPv4 + {} IPv6 networks",
            format_count(self.ipv4_networks),
            format_count(self.ipv6_networks)
        )?;
        writeln!(f, " Elapsed:  {:.2}s", self.elapsed_secs)
    }
}
