//! Fetch command: the full pipeline from remote sources to output files.

use anyhow::Result;
use std::time::Instant;
use tracing::{info, warn};

use crate::config::RunConfig;
use crate::fetcher::Fetcher;
use crate::parser;
use crate::reducer::reduce;
use crate::report::{RunReport, SourceReport};
use crate::utils::format_count;
use crate::writer;

/// Run the fetch pipeline: download sources concurrently, parse the
/// country's networks, reduce to the minimal sets, write the files, and
/// print a summary.
pub async fn run(config: RunConfig, dry_run: bool, json: bool) -> Result<()> {
    let started = Instant::now();

    info!(
        "Fetching networks for {} from {} sources",
        config.country,
        config.sources.len()
    );

    let fetcher = Fetcher::new(&config.country, config.timeout)?;
    let results = fetcher.fetch_all(&config.sources).await;

    let mut blobs = Vec::new();
    let mut failed_sources = Vec::new();
    for (url, result) in results {
        match result {
            Ok(blob) => blobs.push(blob),
            Err(e) => {
                warn!("Skipping source {}: {:#}", url, e);
                failed_sources.push(url);
            }
        }
    }

    if blobs.is_empty() {
        anyhow::bail!(
            "all {} sources failed, no networks found for {}",
            config.sources.len(),
            config.country
        );
    }

    let mut all_networks = Vec::new();
    let mut source_reports = Vec::new();
    for blob in &blobs {
        let parsed = parser::parse_acl(&blob.content, &config.country);
        info!(
            "Extracted {} networks from {} ({} tokens skipped)",
            format_count(parsed.networks.len()),
            blob.url,
            parsed.skipped
        );
        source_reports.push(SourceReport {
            url: blob.url.clone(),
            bytes: blob.content.len(),
            networks: parsed.networks.len(),
            skipped: parsed.skipped,
        });
        all_networks.extend(parsed.networks);
    }

    let total_parsed = all_networks.len();
    let sets = reduce(all_networks);
    if sets.is_empty() {
        anyhow::bail!(
            "no networks found for country {}; check the country code",
            config.country
        );
    }
    info!(
        "Reduced {} networks to {} IPv4 + {} IPv6",
        format_count(total_parsed),
        format_count(sets.v4.len()),
        format_count(sets.v6.len())
    );

    if dry_run {
        info!("Dry run, skipping output files");
    } else {
        writer::write_sets(&sets, &config.ipv4_output, &config.ipv6_output)?;
    }

    let report = RunReport::new(
        &config.country,
        source_reports,
        failed_sources,
        &sets,
        started.elapsed(),
    );
    if json {
        println!("{}", report.to_json()?);
    } else {
        println!();
        print!("{}", report);
    }

    Ok(())
}
