//! Check command: membership probe against produced network lists.

use anyhow::{anyhow, Context, Result};
use std::fs;
use std::net::IpAddr;
use std::path::PathBuf;

use crate::parser;

/// Report which network(s) in the given list files cover an address.
pub fn run(ip: &str, files: &[PathBuf]) -> Result<()> {
    let addr: IpAddr = ip
        .parse()
        .map_err(|_| anyhow!("Invalid IP address: {}", ip))?;

    let mut found = false;
    for path in files {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        for net in parser::parse_list(&content).networks {
            if net.contains(&addr) {
                println!("{} is covered by {} ({})", addr, net, path.display());
                found = true;
            }
        }
    }

    if !found {
        println!("{} is not covered by any listed network", addr);
    }
    Ok(())
}
