//! Surveillance Console - terminal admin console for the Surveillance-guy backend
//!
//! This is the binary entry point. All logic lives in the workspace crates.

use std::path::PathBuf;

use clap::Parser;
use color_eyre::Result;
use sgc_app::config::{default_config_path, init_config, load_settings};

/// Surveillance Console - manage accounts, jobs and templates from the terminal
#[derive(Parser, Debug)]
#[command(name = "sgc")]
#[command(about = "Terminal console for the Surveillance-guy backend", long_about = None)]
struct Args {
    /// Path to the config file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Backend base URL, overriding the config file
    #[arg(long, value_name = "URL")]
    root_path: Option<String>,

    /// Write a default config file and exit
    #[arg(long)]
    init_config: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    let config_path = args.config.unwrap_or_else(default_config_path);

    if args.init_config {
        if init_config(&config_path)? {
            eprintln!("Wrote default config to {}", config_path.display());
        } else {
            eprintln!("Config already exists at {}", config_path.display());
        }
        return Ok(());
    }

    sgc_core::logging::init()?;

    let settings = load_settings(&config_path).with_root_path(args.root_path);
    tracing::info!("Backend root path: {}", settings.root_path);

    sgc_tui::run(settings).await?;
    Ok(())
}
