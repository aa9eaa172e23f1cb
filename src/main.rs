//! Vidgather main entry point
//!
//! Command-line interface for the directory-index video playlist builder.

use anyhow::Context;
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use vidgather::config::build_config;
use vidgather::crawler::crawl;
use vidgather::output::write_playlists;

/// Vidgather: collect video links from HTTP directory listings
///
/// Recursively walks a directory-index tree starting at the given URL,
/// finds video files, and writes one M3U playlist per listing folder.
#[derive(Parser, Debug)]
#[command(name = "vidgather")]
#[command(version)]
#[command(about = "Recursively collect video links by folder", long_about = None)]
struct Cli {
    /// Starting folder URL (prompted for when omitted)
    #[arg(short, long)]
    url: Option<String>,

    /// Base output folder for playlists
    #[arg(short, long, default_value = "./playlists")]
    output: PathBuf,

    /// Disable TLS certificate verification (for invalid certs)
    #[arg(long)]
    insecure: bool,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let raw_url = match cli.url {
        Some(url) => url,
        None => prompt_for_url()?,
    };

    let config = match build_config(&raw_url, &cli.output, cli.insecure) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Invalid configuration: {}", e);
            return Err(e.into());
        }
    };

    if config.insecure {
        tracing::warn!("TLS verification is disabled. Use only with trusted sources.");
    }

    tracing::info!("Crawling {}", config.root_url);
    let collected = crawl(&config).await?;

    let report = write_playlists(&collected, &config.output_root);
    tracing::info!(
        "Done: {} playlists written, {} failed, under {}",
        report.written,
        report.failed,
        config.output_root.display()
    );

    // Finding nothing is not a failure; a diagnostic was already emitted
    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("vidgather=info,warn"),
            1 => EnvFilter::new("vidgather=debug,info"),
            2 => EnvFilter::new("vidgather=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Asks for the starting URL interactively when --url was not given
fn prompt_for_url() -> anyhow::Result<String> {
    print!("Enter the URL of the series: ");
    std::io::stdout().flush().context("Failed to flush stdout")?;

    let mut line = String::new();
    std::io::stdin()
        .read_line(&mut line)
        .context("Failed to read URL from stdin")?;

    Ok(line.trim().to_string())
}
