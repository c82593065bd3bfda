//! Settings file model

use serde::{Deserialize, Serialize};

/// Color scheme for TUI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    /// Dark theme (default): Black bg, White fg
    #[default]
    Dark,
    /// Light theme: White bg, Black fg
    Light,
}

/// quoteboard settings (from config.toml)
///
/// Every field is optional; missing values fall back to the built-in
/// defaults when the engine is created.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Initial hourly rate
    pub hourly_rate: Option<f64>,

    /// Initial standard page count
    pub standard_pages: Option<f64>,

    /// Initial pillar page count
    pub pillar_pages: Option<f64>,

    /// Preset applied at session start (essential, advanced, premium)
    pub preset: Option<String>,

    /// TUI theme
    pub color_scheme: ColorScheme,
}
