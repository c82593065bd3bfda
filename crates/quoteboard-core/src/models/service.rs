//! Service definitions and presets

use crate::error::CoreError;
use crate::models::CategoryId;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Named bundle of services
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    Essential,
    Advanced,
    Premium,
}

impl Preset {
    pub fn all() -> &'static [Preset] {
        &[Preset::Essential, Preset::Advanced, Preset::Premium]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Preset::Essential => "essential",
            Preset::Advanced => "advanced",
            Preset::Premium => "premium",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Preset::Essential => "Essential",
            Preset::Advanced => "Advanced",
            Preset::Premium => "Premium",
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Preset {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "essential" => Ok(Preset::Essential),
            "advanced" => Ok(Preset::Advanced),
            "premium" => Ok(Preset::Premium),
            _ => Err(CoreError::UnknownPreset {
                name: s.to_string(),
            }),
        }
    }
}

/// Argument of `apply_preset`: a named preset or the full reset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresetSelection {
    Named(Preset),
    Clear,
}

impl From<Preset> for PresetSelection {
    fn from(preset: Preset) -> Self {
        PresetSelection::Named(preset)
    }
}

impl fmt::Display for PresetSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PresetSelection::Named(preset) => preset.fmt(f),
            PresetSelection::Clear => f.write_str("clear"),
        }
    }
}

impl FromStr for PresetSelection {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("clear") {
            return Ok(PresetSelection::Clear);
        }
        s.parse().map(PresetSelection::Named)
    }
}

/// Static definition of an offered service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceDefinition {
    pub id: String,
    pub name: String,
    pub category: CategoryId,
    /// Baseline effort in hours (per page for per-page categories)
    pub default_hours: f64,
    pub presets: Vec<Preset>,
}

impl ServiceDefinition {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: CategoryId,
        default_hours: f64,
        presets: &[Preset],
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category,
            default_hours,
            presets: presets.to_vec(),
        }
    }

    pub fn in_preset(&self, preset: Preset) -> bool {
        self.presets.contains(&preset)
    }
}
