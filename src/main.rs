#![allow(non_snake_case)]

mod app;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use anyhow::Context;
use apology_core::CardContent;
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use tracing_subscriber::EnvFilter;

/// Card content, loaded once before launch
static CONTENT: OnceLock<CardContent> = OnceLock::new();

/// Get the card content (loaded from --content or the defaults)
pub fn get_content() -> CardContent {
    CONTENT.get().cloned().unwrap_or_default()
}

/// Apology Card - a four-step animated card
#[derive(Parser, Debug)]
#[command(name = "apology-card")]
#[command(about = "Apology Card - intro, apology, reunion and a voucher")]
struct Args {
    /// JSON file overriding dates, names, coupon code and image paths
    #[arg(short, long)]
    content: Option<PathBuf>,

    /// Window width in logical pixels
    #[arg(long, default_value_t = 900.0)]
    width: f64,

    /// Window height in logical pixels
    #[arg(long, default_value_t = 1000.0)]
    height: f64,

    /// Window title
    #[arg(short, long, default_value = "Îmi pare rău")]
    title: String,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let content = CardContent::load_or_default(args.content.as_deref())
        .context("failed to load card content")?;
    let _ = CONTENT.set(content);

    tracing::info!(
        "Starting card '{}' ({}x{}), content: {:?}",
        args.title,
        args.width,
        args.height,
        args.content
    );

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&args.title)
            .with_inner_size(dioxus::desktop::LogicalSize::new(args.width, args.height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);

    Ok(())
}
