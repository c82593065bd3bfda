//! Settings file loading
//!
//! Reads `<config_dir>/quoteboard/config.toml`. A missing file means
//! defaults; a malformed one is an error carrying the path.

use crate::catalog::Catalog;
use crate::engine::PricingEngine;
use crate::error::CoreError;
use crate::models::{GlobalParameters, Parameter, Preset, Settings};
use std::path::{Path, PathBuf};

/// Default settings location (`~/.config/quoteboard/config.toml` on Linux)
pub fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("quoteboard").join("config.toml"))
}

impl Settings {
    /// Load settings from `path`, returning defaults when the file is absent
    pub fn load(path: &Path) -> Result<Self, CoreError> {
        match Self::load_existing(path) {
            Err(CoreError::FileRead { source, .. })
                if source.kind() == std::io::ErrorKind::NotFound =>
            {
                tracing::debug!(path = %path.display(), "No settings file, using defaults");
                Ok(Self::default())
            }
            result => result,
        }
    }

    /// Load settings from `path`, which must exist
    pub fn load_existing(path: &Path) -> Result<Self, CoreError> {
        let content = std::fs::read_to_string(path).map_err(|source| CoreError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;

        let settings: Settings = toml::from_str(&content).map_err(|source| CoreError::TomlParse {
            path: path.to_path_buf(),
            message: source.message().to_string(),
            source,
        })?;
        tracing::info!(path = %path.display(), "Settings loaded");
        Ok(settings)
    }

    /// Load from the default location, or defaults if it cannot be determined
    pub fn load_default() -> Result<Self, CoreError> {
        match default_settings_path() {
            Some(path) => Self::load(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load a file the user named explicitly (it must exist), otherwise the
    /// default location (which may be absent)
    pub fn load_from(explicit: Option<&Path>) -> Result<Self, CoreError> {
        match explicit {
            Some(path) => Self::load_existing(path),
            None => Self::load_default(),
        }
    }

    /// Starting parameters: file values over built-in defaults, clamped
    pub fn initial_parameters(&self) -> GlobalParameters {
        let mut params = GlobalParameters::default();
        let overrides = [
            (Parameter::HourlyRate, self.hourly_rate),
            (Parameter::StandardPageCount, self.standard_pages),
            (Parameter::PillarPageCount, self.pillar_pages),
        ];
        for (parameter, value) in overrides {
            if let Some(value) = value {
                params.set(parameter, value);
            }
        }
        params
    }

    pub fn initial_preset(&self) -> Result<Option<Preset>, CoreError> {
        self.preset.as_deref().map(str::parse::<Preset>).transpose()
    }

    /// Engine over the built-in catalog, seeded from these settings
    pub fn build_engine(&self) -> Result<PricingEngine, CoreError> {
        let mut engine = PricingEngine::new(Catalog::builtin(), self.initial_parameters());
        if let Some(preset) = self.initial_preset()? {
            engine.apply_preset(preset);
        }
        Ok(engine)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ColorScheme;

    #[test]
    fn test_initial_parameters_merge_and_clamp() {
        let settings = Settings {
            hourly_rate: Some(95.0),
            pillar_pages: Some(-3.0),
            ..Default::default()
        };
        let params = settings.initial_parameters();
        assert_eq!(params.hourly_rate, 95.0);
        assert_eq!(params.standard_page_count, 10.0);
        assert_eq!(params.pillar_page_count, 0.0);
    }

    #[test]
    fn test_initial_preset() {
        let settings = Settings {
            preset: Some("Advanced".to_string()),
            ..Default::default()
        };
        assert_eq!(settings.initial_preset().unwrap(), Some(Preset::Advanced));
        assert_eq!(Settings::default().initial_preset().unwrap(), None);

        let bad = Settings {
            preset: Some("gold".to_string()),
            ..Default::default()
        };
        assert!(bad.build_engine().is_err());
    }

    #[test]
    fn test_parse_toml() {
        let settings: Settings = toml::from_str(
            r#"
            hourly_rate = 110.0
            standard_pages = 25
            preset = "essential"
            color_scheme = "light"
            "#,
        )
        .unwrap();
        assert_eq!(settings.hourly_rate, Some(110.0));
        assert_eq!(settings.standard_pages, Some(25.0));
        assert_eq!(settings.pillar_pages, None);
        assert_eq!(settings.color_scheme, ColorScheme::Light);

        let engine = settings.build_engine().unwrap();
        assert_eq!(engine.active_count(), 10);
    }
}
