//! Revival
//!
//! # What this program is
//! A single-screen album page (built with the `iced` GUI library): a track
//! list scrolling under a big artwork header. As the list moves, the header
//! darkens, the big title fades and lifts, and a compact title slides into a
//! bar that turns opaque once the artwork is covered.
//!
//! # How it hangs together
//! - `AlbumView` = the whole state (scroll offset, pull-down, layout, animation)
//! - `Message` = something happened (scrolled, wheel, resize, frame, button)
//! - `update(state, message)` = applies it
//! - `view(state)` = recomputes the header geometry and draws
//!
//! **Message happens -> update changes state -> view redraws**
//!
//! # Architecture constraints
//! - `core::*` is pure data + math, no widgets.
//! - All geometry is derived from one signed offset every frame; nothing
//!   derived is stored.
//! - No disk IO after startup (config + artwork path are read once).

mod config;
mod core;
mod gui;

use std::path::Path;

use anyhow::{Context, Result};
use iced::{Size, Theme};
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, fmt, prelude::*, reload};

use crate::config::{AppConfig, CONFIG_PATH, load_config};
use crate::gui::AlbumView;

type ReloadHandle = reload::Handle<EnvFilter, tracing_subscriber::Registry>;

fn main() {
    let reload_handle = init_tracing();
    if let Err(err) = run(&reload_handle) {
        error!("{err:?}");
        std::process::exit(1);
    }
}

fn run(reload_handle: &ReloadHandle) -> Result<()> {
    let config = load_config(Path::new(CONFIG_PATH));
    if std::env::var_os("RUST_LOG").is_none() {
        set_log_level(reload_handle, config.log_level.as_filter_str());
    }

    info!(
        width = config.window_width,
        height = config.window_height,
        safe_area_top = config.safe_area_top,
        image_height_ratio = config.image_height_ratio,
        level = %config.log_level,
        "Starting Revival"
    );

    run_app(config).context("Failed to start the GUI")
}

fn run_app(config: AppConfig) -> iced::Result {
    let size = Size::new(config.window_width, config.window_height);

    iced::application(move || AlbumView::new(&config), gui::update, gui::view)
        .title("Revival")
        .theme(theme)
        .subscription(gui::subscription)
        .window_size(size)
        .run()
}

fn theme(_state: &AlbumView) -> Theme {
    Theme::Dark
}

fn init_tracing() -> ReloadHandle {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let (filter_layer, handle) = reload::Layer::new(env_filter);
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(true)
                .with_line_number(true)
                .with_filter(filter_layer),
        )
        .init();
    handle
}

fn set_log_level(handle: &ReloadHandle, level: &str) {
    let parsed = EnvFilter::builder()
        .parse(level)
        .unwrap_or_else(|_| EnvFilter::new("info"));
    if let Err(err) = handle.modify(|filter| *filter = parsed) {
        warn!(%level, "Failed to apply log level from config: {err}");
    } else {
        info!(%level, "Applied log level from config");
    }
}
