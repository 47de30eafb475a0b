//! Configuration loading.
//!
//! All user-tunable settings live here and are loaded from
//! `conf/config.toml` if present. Missing or invalid entries fall back to
//! defaults so the window can still open.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::core::parallax::DEFAULT_IMAGE_HEIGHT_RATIO;

pub const CONFIG_PATH: &str = "conf/config.toml";

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_window_width")]
    pub window_width: f32,
    #[serde(default = "default_window_height")]
    pub window_height: f32,
    /// Top inset reserved for a status bar or notch.
    #[serde(default)]
    pub safe_area_top: f32,
    #[serde(default = "default_image_height_ratio")]
    pub image_height_ratio: f32,
    #[serde(default)]
    pub artwork_path: Option<PathBuf>,
    #[serde(default = "default_overscroll_speed")]
    pub overscroll_speed: f32,
    #[serde(default)]
    pub log_level: LogLevel,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            window_width: default_window_width(),
            window_height: default_window_height(),
            safe_area_top: 0.0,
            image_height_ratio: default_image_height_ratio(),
            artwork_path: None,
            overscroll_speed: default_overscroll_speed(),
            log_level: LogLevel::default(),
        }
    }
}

impl AppConfig {
    /// Replace out-of-range values with defaults, one warning per field.
    fn sanitized(mut self) -> Self {
        if !(self.image_height_ratio.is_finite()
            && self.image_height_ratio > 0.0
            && self.image_height_ratio <= 1.0)
        {
            warn!(
                value = self.image_height_ratio,
                "image_height_ratio must be in (0, 1]; using default"
            );
            self.image_height_ratio = default_image_height_ratio();
        }
        if !(self.safe_area_top.is_finite() && self.safe_area_top >= 0.0) {
            warn!(value = self.safe_area_top, "safe_area_top must be >= 0; using 0");
            self.safe_area_top = 0.0;
        }
        if !(self.window_width.is_finite() && self.window_width > 0.0) {
            warn!(value = self.window_width, "window_width must be positive; using default");
            self.window_width = default_window_width();
        }
        if !(self.window_height.is_finite() && self.window_height > 0.0) {
            warn!(value = self.window_height, "window_height must be positive; using default");
            self.window_height = default_window_height();
        }
        if !self.overscroll_speed.is_finite() {
            self.overscroll_speed = default_overscroll_speed();
        }
        self.overscroll_speed = self.overscroll_speed.clamp(0.05, 0.95);
        self
    }
}

/// Logging verbosity, mapped onto an `EnvFilter` directive.
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_filter_str())
    }
}

impl LogLevel {
    pub fn as_filter_str(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

pub fn parse_config(contents: &str) -> Result<AppConfig, toml::de::Error> {
    toml::from_str::<AppConfig>(contents).map(AppConfig::sanitized)
}

pub fn load_config(path: &Path) -> AppConfig {
    let contents = match fs::read_to_string(path) {
        Ok(data) => {
            info!(path = %path.display(), "Loaded config");
            data
        }
        Err(err) => {
            warn!(path = %path.display(), "Falling back to default config: {err}");
            return AppConfig::default();
        }
    };

    match parse_config(&contents) {
        Ok(cfg) => {
            debug!(?cfg, "Parsed configuration from disk");
            cfg
        }
        Err(err) => {
            warn!(path = %path.display(), "Invalid config TOML: {err}");
            AppConfig::default()
        }
    }
}

fn default_window_width() -> f32 {
    430.0
}

fn default_window_height() -> f32 {
    932.0
}

fn default_image_height_ratio() -> f32 {
    DEFAULT_IMAGE_HEIGHT_RATIO
}

fn default_overscroll_speed() -> f32 {
    0.25
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let cfg = parse_config("").expect("empty toml parses");
        assert_eq!(cfg.window_width, 430.0);
        assert_eq!(cfg.window_height, 932.0);
        assert_eq!(cfg.safe_area_top, 0.0);
        assert_eq!(cfg.image_height_ratio, DEFAULT_IMAGE_HEIGHT_RATIO);
        assert!(cfg.artwork_path.is_none());
        assert_eq!(cfg.log_level, LogLevel::Info);
    }

    #[test]
    fn reads_every_field() {
        let cfg = parse_config(
            r#"
            window_width = 390.0
            window_height = 844.0
            safe_area_top = 47.0
            image_height_ratio = 0.5
            artwork_path = "assets/cover.jpg"
            overscroll_speed = 0.3
            log_level = "trace"
            "#,
        )
        .expect("valid toml");

        assert_eq!(cfg.window_width, 390.0);
        assert_eq!(cfg.safe_area_top, 47.0);
        assert_eq!(cfg.image_height_ratio, 0.5);
        assert_eq!(cfg.artwork_path, Some(PathBuf::from("assets/cover.jpg")));
        assert_eq!(cfg.overscroll_speed, 0.3);
        assert_eq!(cfg.log_level, LogLevel::Trace);
    }

    #[test]
    fn out_of_range_values_fall_back() {
        let cfg = parse_config(
            r#"
            image_height_ratio = 0.0
            safe_area_top = -5.0
            window_height = -1.0
            overscroll_speed = 3.0
            "#,
        )
        .expect("valid toml");

        assert_eq!(cfg.image_height_ratio, DEFAULT_IMAGE_HEIGHT_RATIO);
        assert_eq!(cfg.safe_area_top, 0.0);
        assert_eq!(cfg.window_height, 932.0);
        assert_eq!(cfg.overscroll_speed, 0.95);
    }

    #[test]
    fn unknown_log_level_is_an_error() {
        assert!(parse_config(r#"log_level = "loud""#).is_err());
    }

    #[test]
    fn missing_file_gives_defaults() {
        let cfg = load_config(Path::new("does/not/exist.toml"));
        assert_eq!(cfg.image_height_ratio, DEFAULT_IMAGE_HEIGHT_RATIO);
    }

    #[test]
    fn log_level_display_matches_filter() {
        assert_eq!(LogLevel::Warn.to_string(), "warn");
        assert_eq!(LogLevel::Debug.as_filter_str(), "debug");
    }
}
