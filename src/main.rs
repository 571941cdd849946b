//! geoacl - Country IP Network List Downloader
//!
//! Fetches country network lists from GeoIP ACL sources and writes
//! minimized IPv4/IPv6 CIDR files.

use anyhow::Result;
use clap::Parser;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use geoacl::cli::{Cli, Commands};
use geoacl::config::RunConfig;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose {
        Level::DEBUG
    } else if cli.quiet {
        Level::ERROR
    } else {
        Level::INFO
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_thread_ids(false)
        .without_time()
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Fetch {
            country,
            urls,
            timeout,
            ipv4,
            ipv6,
            dry_run,
            json,
        } => {
            let config = RunConfig::new(&country, urls, timeout, ipv4, ipv6)?;
            geoacl::commands::fetch::run(config, dry_run, json).await
        }
        Commands::Reduce {
            inputs,
            country,
            ipv4,
            ipv6,
        } => geoacl::commands::reduce::run(&inputs, country.as_deref(), &ipv4, &ipv6),
        Commands::Check { ip, files } => geoacl::commands::check::run(&ip, &files),
        Commands::Version => {
            println!("geoacl {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}
