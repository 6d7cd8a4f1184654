//! Page Shell server.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request
//!     ───────────────▶ ┌──────────┐    ┌─────────────┐    ┌──────────────┐
//!                      │  http    │───▶│   shell     │───▶│   routing    │
//!                      │  server  │    │  render()   │    │  RouteTable  │
//!                      └──────────┘    └──────┬──────┘    └──────┬───────┘
//!                                             │                  │ Page
//!     Client Response                         ▼                  │
//!     ◀─────────────── ┌──────────┐    ┌─────────────┐           │
//!                      │ response │◀───│   pages     │◀──────────┘
//!                      │ (status) │    │ nav + page  │
//!                      └──────────┘    └─────────────┘
//!
//!     Cross-cutting: config, observability, lifecycle
//! ```

use std::path::PathBuf;

use clap::Parser;

use page_shell::config::{self, ShellConfig};
use page_shell::lifecycle::startup;

#[derive(Parser)]
#[command(name = "page-shell")]
#[command(about = "Serve the page shell over HTTP", long_about = None)]
struct Args {
    /// Path to a TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override listener.bind_address.
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => config::load_config(path)?,
        None => ShellConfig::default(),
    };

    if let Some(bind) = args.bind {
        config.listener.bind_address = bind;
        config::validation::validate_config(&config).map_err(config::ConfigError::Validation)?;
    }

    startup::run(config).await?;
    Ok(())
}
