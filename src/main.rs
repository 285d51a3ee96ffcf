//! Subgrab - SubDB Subtitle Downloader
//!
//! Entry point: sets up logging, loads configuration and runs the
//! fingerprint-and-fetch workflow over every path given on the command line.

use anyhow::Result;
use clap::Parser;
use std::ffi::OsString;
use std::path::Path;
use tracing::info;

use subgrab::cli::{Args, USAGE_MESSAGE};
use subgrab::config::{Config, DEFAULT_CONFIG_FILE};
use subgrab::logging;
use subgrab::workflow::Workflow;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let raw_args: Vec<OsString> = std::env::args_os().collect();
    let args = Args::parse_from(&raw_args);

    let program = raw_args.first().cloned().unwrap_or_else(|| OsString::from("subgrab"));
    let guard = logging::init(logging::log_file_path(program), args.verbose)?;
    info!("Parameters given: {:?}", raw_args);

    if args.paths.is_empty() {
        println!("{}", USAGE_MESSAGE);
        drop(guard);
        std::process::exit(1);
    }

    // Load configuration
    let config = match &args.config {
        Some(config_path) => Config::from_file(config_path)?,
        None => {
            if Path::new(DEFAULT_CONFIG_FILE).exists() {
                info!("Found {} in current directory, loading...", DEFAULT_CONFIG_FILE);
                Config::from_file(DEFAULT_CONFIG_FILE)?
            } else {
                Config::default()
            }
        }
    };

    let workflow = Workflow::new(config)?;
    workflow.process_paths(&args.paths).await;

    Ok(())
}
