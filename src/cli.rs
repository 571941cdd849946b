//! CLI argument parsing with clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::DEFAULT_TIMEOUT_SECS;

#[derive(Parser)]
#[command(name = "geoacl")]
#[command(author, version, about = "Download and minimize country IP network lists")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Quiet mode (errors only, for cron)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug output)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch sources and write minimized IPv4/IPv6 network files
    Fetch {
        /// Two-letter country code (e.g. BR, US, CN)
        #[arg(short, long)]
        country: String,

        /// Source URL to download from (HTTPS, repeatable; default: geoip.site sources)
        #[arg(long = "url")]
        urls: Vec<String>,

        /// Request timeout in seconds
        #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
        timeout: u64,

        /// IPv4 output file (default: <cc>_ipv4.txt)
        #[arg(long)]
        ipv4: Option<PathBuf>,

        /// IPv6 output file (default: <cc>_ipv6.txt)
        #[arg(long)]
        ipv6: Option<PathBuf>,

        /// Fetch and reduce but do not write output files
        #[arg(long)]
        dry_run: bool,

        /// Print the run summary as JSON
        #[arg(long)]
        json: bool,
    },

    /// Reduce networks from local files instead of remote sources
    Reduce {
        /// Input files (ACL or plain list format)
        #[arg(required = true)]
        inputs: Vec<PathBuf>,

        /// Scope ACL inputs to this country's block
        #[arg(short, long)]
        country: Option<String>,

        /// IPv4 output file
        #[arg(long, default_value = "ipv4.txt")]
        ipv4: PathBuf,

        /// IPv6 output file
        #[arg(long, default_value = "ipv6.txt")]
        ipv6: PathBuf,
    },

    /// Check whether an address is covered by a network list file
    Check {
        /// IP address to check
        ip: String,

        /// Network list files to search
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// Show version
    Version,
}
