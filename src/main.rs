#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use anyhow::{Context, Result};
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use mastery_core::{JourneyConfig, JourneyVariant};

/// Journey settings, set from the command line before launch
static JOURNEY_CONFIG: OnceLock<JourneyConfig> = OnceLock::new();

/// Get the journey configuration (set from command line or default)
pub fn journey_config() -> JourneyConfig {
    JOURNEY_CONFIG.get().cloned().unwrap_or_default()
}

/// Manifest Mastery - guided career manifestation
#[derive(Parser, Debug)]
#[command(name = "manifest-mastery-desktop")]
#[command(about = "Manifest Mastery - goals, limiting beliefs, affirmations and a vision board")]
struct Args {
    /// JSON journey configuration
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Step sequence: extended (with overview) or compact
    #[arg(long)]
    variant: Option<JourneyVariant>,

    /// Year shown in the vision board title
    #[arg(long)]
    board_year: Option<i32>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();
    mastery_core::logging::init(args.verbose.max(1));

    let mut config = match &args.config {
        Some(path) => JourneyConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => JourneyConfig::default(),
    };
    if let Some(variant) = args.variant {
        config = config.with_variant(variant);
    }
    if let Some(year) = args.board_year {
        config = config.with_board_year(year);
    }

    tracing::info!(
        variant = %config.variant,
        board_year = config.board_year,
        max_goals = config.max_goals,
        "Starting Manifest Mastery"
    );
    let _ = JOURNEY_CONFIG.set(config);

    let window = Config::new().with_window(
        WindowBuilder::new()
            .with_title(mastery_core::catalog::APP_TITLE)
            .with_inner_size(dioxus::desktop::LogicalSize::new(880.0, 960.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(window)
        .launch(app::App);

    Ok(())
}
