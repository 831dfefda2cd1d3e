//! Point-buy palette browser entry point.
mod app;
mod config;
mod favorites;
mod logging;

use anyhow::Result;
use app::Cli;
use clap::Parser;
use config::CliConfig;

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = CliConfig::from_env();
    let _guard = logging::setup_logging(&config)?;

    let cli = Cli::parse();
    let stdout = std::io::stdout();
    app::run(cli, &config, &mut stdout.lock())
}
