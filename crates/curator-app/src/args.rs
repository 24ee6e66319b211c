use std::path::PathBuf;

use clap::Parser;

/// CLI arguments for curator.
#[derive(Parser, Debug)]
#[command(name = "curator", about = "Terminal console for moderating certification posts")]
pub struct Args {
    /// Admin API base URL (overrides the config file)
    #[arg(long)]
    pub base_url: Option<String>,

    /// Extra config file applied on top of the default locations
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}
