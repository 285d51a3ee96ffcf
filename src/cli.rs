use clap::Parser;
use std::path::PathBuf;

/// Printed to stdout when no paths are given
pub const USAGE_MESSAGE: &str = "At least one parameter is required.";

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Video files or directories to scan recursively
    pub paths: Vec<PathBuf>,
}
