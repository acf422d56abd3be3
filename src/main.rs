use clap::Parser;
use log::debug;
use rainbow::{cli::Cli, config};
use std::process;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

async fn run() -> rainbow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    cli.init_logging();

    // Load configuration
    let mut config = config::load_config(cli.config.as_deref())?;
    if let Some(url) = &cli.api_url {
        config.api.set_url(url)?;
    }
    debug!("Using Sparkle API at {}", config.api.base_url());

    rainbow::run_command(cli.command, &config, cli.json).await
}
