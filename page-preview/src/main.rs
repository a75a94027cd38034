use anyhow::{Context, Result};
use chrono::{Local, NaiveDateTime};
use clap::Parser;
use pagekit_ui::HeaderStatus;
use std::path::PathBuf;

mod config;
mod framebuffer;
mod render;

use config::PreviewConfig;

const TIME_ARG_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Render the boot page with its status header on the host
#[derive(Parser, Debug)]
#[command(name = "pagekit-preview")]
#[command(version, about, long_about = None)]
struct Cli {
    /// JSON config with display size, header layout and icon glyphs
    #[arg(long)]
    config: Option<PathBuf>,

    /// WiFi signal strength in percent
    #[arg(long, default_value_t = 100.0, allow_negative_numbers = true)]
    wifi: f32,

    /// Show the remote API as connected
    #[arg(long)]
    api_connected: bool,

    /// Clock value as "YYYY-MM-DD HH:MM" (defaults to local time)
    #[arg(long, value_parser = parse_time)]
    time: Option<NaiveDateTime>,

    /// Write a PBM image instead of printing ASCII art
    #[arg(long, short)]
    output: Option<PathBuf>,
}

fn parse_time(value: &str) -> Result<NaiveDateTime, String> {
    NaiveDateTime::parse_from_str(value, TIME_ARG_FORMAT)
        .map_err(|e| format!("expected \"{TIME_ARG_FORMAT}\": {e}"))
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config = PreviewConfig::load(cli.config.as_deref())?;
    let status = HeaderStatus {
        now: cli.time.unwrap_or_else(|| Local::now().naive_local()),
        wifi_percent: cli.wifi,
        api_connected: cli.api_connected,
    };
    log::debug!("Rendering {}x{} boot frame: {status:?}", config.width, config.height);

    let frame = render::render_boot(&config, &status)?;

    match cli.output {
        Some(path) => {
            std::fs::write(&path, frame.to_pbm())
                .with_context(|| format!("Failed to write image: {}", path.display()))?;
            log::info!("Wrote {}", path.display());
        }
        None => print!("{}", frame.to_ascii()),
    }

    Ok(())
}
