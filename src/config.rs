//! Configuration handling for the wizard
//!
//! Two layers: brand constants baked in at build time (see `build.rs`) and a
//! small user configuration file for storage and export locations.

use anyhow::Result;
use directories::{ProjectDirs, UserDirs};
use ratatui::style::Color;
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

/// Brand label shown in the header and the exported document title
pub const BRAND: &str = env!("WIZARD_APP_BRAND");

/// Primary brand color as a `#rrggbb` string
pub const PRIMARY_COLOR: &str = env!("WIZARD_PRIMARY_COLOR");

/// Accent brand color as a `#rrggbb` string
pub const ACCENT_COLOR: &str = env!("WIZARD_ACCENT_COLOR");

/// Display colors derived from the build-time brand constants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub primary: Color,
    pub accent: Color,
}

impl Theme {
    pub fn brand() -> Self {
        Self {
            primary: parse_hex_color(PRIMARY_COLOR).unwrap_or(Color::Cyan),
            accent: parse_hex_color(ACCENT_COLOR).unwrap_or(Color::Yellow),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::brand()
    }
}

/// Parse a `#rrggbb` (or `rrggbb`) string into an RGB color
pub fn parse_hex_color(value: &str) -> Option<Color> {
    let hex = value.trim().trim_start_matches('#');
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

/// User configuration for the wizard
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
pub struct WizardConfig {
    /// Directory holding the persisted profile and the log file
    pub data_dir: Option<PathBuf>,
    /// Directory exported PDFs are written to
    pub export_dir: Option<PathBuf>,
}

impl WizardConfig {
    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("com", "thekeyfinancial", "client-review-tui")
    }

    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        if let Some(path) = Self::config_path() {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: WizardConfig = serde_json::from_str(&content)?;
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// Resolved data directory: explicit override, then the platform data dir
    pub fn resolved_data_dir(&self) -> Option<PathBuf> {
        self.data_dir
            .clone()
            .or_else(|| Self::project_dirs().map(|dirs| dirs.data_dir().to_path_buf()))
    }

    /// Resolved export directory: override, then Downloads, then the working directory
    pub fn resolved_export_dir(&self) -> PathBuf {
        self.export_dir
            .clone()
            .or_else(|| {
                UserDirs::new().and_then(|dirs| dirs.download_dir().map(|d| d.to_path_buf()))
            })
            .unwrap_or_else(|| PathBuf::from("."))
    }
}
