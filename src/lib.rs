//! # geoacl - Country IP Network List Downloader
//!
//! Downloads IP network lists for a given country from multiple GeoIP ACL
//! sources, reduces them to a minimal non-redundant set per address family,
//! and writes CIDR-per-line files suitable for firewall/ACL consumption.
//!
//! ## Pipeline
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │  CLI (clap)                                                │
//! │    └── Commands: fetch, reduce, check, version             │
//! ├────────────────────────────────────────────────────────────┤
//! │  Fetcher (reqwest + rustls)                                │
//! │    └── Concurrent downloads, per-source timeout + failure  │
//! ├────────────────────────────────────────────────────────────┤
//! │  Parser (ipnet)                                            │
//! │    └── ACL country blocks and plain lists, noise-tolerant  │
//! ├────────────────────────────────────────────────────────────┤
//! │  Reducer (ipnet)                                           │
//! │    └── Dedup + subset removal, per family                  │
//! ├────────────────────────────────────────────────────────────┤
//! │  Writer                                                    │
//! │    └── Atomic CIDR-per-line output files                   │
//! └────────────────────────────────────────────────────────────┘
//! ```
//!
//! Sources that fail to fetch are excluded with a warning; tokens that fail
//! CIDR validation are skipped and counted. The run fails only when every
//! source is unreachable, when no networks exist for the country, or when an
//! output file cannot be written.
//!
//! ## Example
//!
//! ```no_run
//! use geoacl::fetcher::Fetcher;
//! use geoacl::parser;
//! use geoacl::reducer::reduce;
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let fetcher = Fetcher::new("BR", Duration::from_secs(30))?;
//!     let results = fetcher
//!         .fetch_all(&["https://geoip.site/download/MaxMind/GeoIP.acl".to_string()])
//!         .await;
//!
//!     let mut networks = Vec::new();
//!     for (url, result) in results {
//!         match result {
//!             Ok(blob) => networks.extend(parser::parse_acl(&blob.content, "BR").networks),
//!             Err(e) => eprintln!("{}: {:#}", url, e),
//!         }
//!     }
//!
//!     let sets = reduce(networks);
//!     println!("{} IPv4, {} IPv6 networks", sets.v4.len(), sets.v6.len());
//!     Ok(())
//! }
//! ```
//!
//! ## Modules
//!
//! - [`cli`] - Command-line interface definitions
//! - [`commands`] - CLI command implementations
//! - [`config`] - Run configuration and validation
//! - [`error`] - Typed fetch failures
//! - [`fetcher`] - HTTP client for downloading ACL sources
//! - [`parser`] - Network extraction from raw source text
//! - [`reducer`] - Network-set reduction (the core)
//! - [`report`] - End-of-run summary
//! - [`utils`] - Formatting helpers
//! - [`writer`] - Atomic CIDR-per-line output

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod fetcher;
pub mod parser;
pub mod reducer;
pub mod report;
pub mod utils;
pub mod writer;

pub use cli::{Cli, Commands};
pub use config::RunConfig;
pub use reducer::{reduce, NetworkSets};
