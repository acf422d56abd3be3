use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "rainbow")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "List tenant instances and clusters from the Sparkle API")]
#[command(long_about = "A small console over the Sparkle REST API. Navigate to /<tenant>/instance or /<tenant>/cluster to list a tenant's instances or clusters.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Sparkle API base URL, overrides the configured host and port
    #[arg(long, global = true, value_name = "URL", env = "RAINBOW_API_URL")]
    pub api_url: Option<String>,

    /// Enable verbose logging (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output in JSON format where applicable
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Navigate to one or more paths and render the last view
    Open {
        /// Paths such as /acme/instance; each navigation supersedes the previous one
        #[arg(value_name = "PATH", required = true)]
        paths: Vec<String>,
    },

    /// Read paths from stdin and render each view once its data arrives
    Browse,

    /// Show the route table
    Routes,
}

impl Cli {
    /// Initialize logging based on verbosity level
    pub fn init_logging(&self) {
        if self.quiet {
            return;
        }

        let level = match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        };

        env_logger::Builder::from_default_env()
            .filter_level(level)
            .init();
    }
}
