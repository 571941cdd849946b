//! Reduce command: run the reduction pipeline over local files.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::parser;
use crate::reducer::reduce;
use crate::writer;

/// Reduce networks read from local files and write the minimal sets.
///
/// With a country code, inputs are treated as ACL files scoped to that
/// country's block; without one, as plain one-network-per-line lists.
pub fn run(
    inputs: &[PathBuf],
    country: Option<&str>,
    ipv4_path: &Path,
    ipv6_path: &Path,
) -> Result<()> {
    let country = country.map(|c| c.to_ascii_uppercase());

    let mut networks = Vec::new();
    let mut skipped = 0;
    for path in inputs {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let parsed = match country.as_deref() {
            Some(cc) => parser::parse_acl(&content, cc),
            None => parser::parse_list(&content),
        };
        info!(
            "{}: {} networks ({} tokens skipped)",
            path.display(),
            parsed.networks.len(),
            parsed.skipped
        );
        networks.extend(parsed.networks);
        skipped += parsed.skipped;
    }

    let total = networks.len();
    let sets = reduce(networks);
    writer::write_sets(&sets, ipv4_path, ipv6_path)?;

    println!(
        "{} networks reduced to {} IPv4 + {} IPv6 ({} tokens skipped)",
        total,
        sets.v4.len(),
        sets.v6.len(),
        skipped
    );
    Ok(())
}
