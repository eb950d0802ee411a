#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod hooks;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::{Arc, OnceLock};

use anyhow::Context;
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use learnerspoint_core::SiteConfig;
use tracing_subscriber::EnvFilter;

use crate::context::{SharedSite, Theme};

/// What the window opens with, set once from the command line
#[derive(Clone, Debug)]
pub struct Launch {
    pub site: SharedSite,
    pub theme: Theme,
    pub route: String,
}

static LAUNCH: OnceLock<Launch> = OnceLock::new();

/// Get the launch settings (set from command line or built-in defaults)
pub fn launch_options() -> Launch {
    LAUNCH.get().cloned().unwrap_or_else(|| Launch {
        site: Arc::new(SiteConfig::default()),
        theme: Theme::default(),
        route: "/".to_string(),
    })
}

/// Learner's Point - tutoring and coaching site
#[derive(Parser, Debug)]
#[command(name = "learnerspoint-desktop")]
#[command(about = "Learner's Point - tutoring and coaching in Lucknow")]
struct Args {
    /// Route to open first (e.g. /enroll or /Contact)
    #[arg(short, long, default_value = "/")]
    route: String,

    /// JSON file overriding the built-in site content
    #[arg(short, long)]
    content: Option<PathBuf>,

    /// Initial page theme
    #[arg(short, long, value_enum, default_value_t = Theme::Light)]
    theme: Theme,

    /// Log filter (RUST_LOG takes precedence)
    #[arg(long, default_value = "info")]
    log: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&args.log))
        .context("invalid log filter")?;
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config_dir = dirs::config_dir().map(|dir| dir.join("learnerspoint"));
    let site = SiteConfig::discover(args.content.as_deref(), config_dir);

    let title = format!("{} - {}", site.brand.name, site.brand.tagline);
    tracing::info!(route = %args.route, theme = ?args.theme, "Starting {}", site.brand.name);

    let _ = LAUNCH.set(Launch {
        site: Arc::new(site),
        theme: args.theme,
        route: args.route,
    });

    // Configure desktop window
    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&title)
            .with_inner_size(dioxus::desktop::LogicalSize::new(1280.0, 900.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);

    Ok(())
}
