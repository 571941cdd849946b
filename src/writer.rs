//! CIDR-per-line output files, written atomically.
//!
//! Content lands in a temporary file in the destination directory and is
//! renamed into place, so a crashed or failed run never leaves a partially
//! written list behind. An empty set leaves the destination untouched
//! rather than truncating a previous run's output.

use anyhow::{Context, Result};
use std::fmt;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::{info, warn};

use crate::reducer::NetworkSets;

/// Write both family sets to their destinations.
pub fn write_sets(sets: &NetworkSets, ipv4_path: &Path, ipv6_path: &Path) -> Result<()> {
    write_networks(ipv4_path, &sets.v4)?;
    write_networks(ipv6_path, &sets.v6)?;
    Ok(())
}

/// Write one network per line to `path`. Errors propagate: silent data
/// loss at this boundary is unacceptable.
pub fn write_networks<T: fmt::Display>(path: &Path, nets: &[T]) -> Result<()> {
    if nets.is_empty() {
        warn!("No networks to write, leaving {} untouched", path.display());
        return Ok(());
    }

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut file = NamedTempFile::new_in(dir)
        .with_context(|| format!("failed to create temporary file in {}", dir.display()))?;

    for net in nets {
        writeln!(file, "{}", net)
            .with_context(|| format!("failed to write {}", path.display()))?;
    }
    file.as_file()
        .sync_all()
        .with_context(|| format!("failed to flush {}", path.display()))?;

    file.persist(path)
        .with_context(|| format!("failed to persist {}", path.display()))?;

    info!("Wrote {} networks to {}", nets.len(), path.display());
    Ok(())
}
