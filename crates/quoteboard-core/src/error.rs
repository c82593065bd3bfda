//! Error types for quoteboard-core
//!
//! Engine mutations never fail: out-of-range numbers are clamped and unknown
//! service ids are no-ops. Errors only surface while building a catalog,
//! parsing user-facing names, or loading settings.

use crate::models::CategoryId;
use std::path::PathBuf;
use thiserror::Error;

/// Core error type for quoteboard operations
#[derive(Error, Debug)]
pub enum CoreError {
    // ===================
    // Catalog Errors
    // ===================
    #[error("Duplicate category group: {id}")]
    DuplicateCategory { id: CategoryId },

    #[error("Duplicate service id: {id}")]
    DuplicateService { id: String },

    #[error("Service {service} references category {category} which has no group")]
    UnknownCategory {
        service: String,
        category: CategoryId,
    },

    #[error("Service {service} has invalid default hours: {hours}")]
    InvalidDefaultHours { service: String, hours: f64 },

    // ===================
    // Parse Errors
    // ===================
    #[error("Unknown preset: {name} (expected essential, advanced, premium or clear)")]
    UnknownPreset { name: String },

    #[error("Unknown parameter: {name} (expected hourly_rate, standard_page_count or pillar_page_count)")]
    UnknownParameter { name: String },

    #[error("Invalid hours assignment '{input}' (expected SERVICE=HOURS)")]
    InvalidHoursAssignment { input: String },

    // ===================
    // Settings Errors
    // ===================
    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse TOML in {path}: {message}")]
    TomlParse {
        path: PathBuf,
        message: String,
        #[source]
        source: toml::de::Error,
    },
}

impl CoreError {
    /// Actionable hint for the user, if one applies
    pub fn suggestion(&self) -> Option<String> {
        match self {
            CoreError::UnknownPreset { .. } => {
                Some("Run 'quoteboard catalog' to see which services each preset enables".to_string())
            }
            CoreError::InvalidHoursAssignment { .. } => {
                Some("Example: --hours meta=0.5".to_string())
            }
            CoreError::FileRead { path, source } if source.kind() == std::io::ErrorKind::NotFound => {
                Some(format!(
                    "Create {} or unset --config / QUOTEBOARD_CONFIG",
                    path.display()
                ))
            }
            CoreError::FileRead { path, .. } => {
                Some(format!("Check permissions: chmod +r {}", path.display()))
            }
            CoreError::TomlParse { path, .. } => Some(format!(
                "Fix or remove the settings file: {}",
                path.display()
            )),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_category_message() {
        let err = CoreError::UnknownCategory {
            service: "meta".to_string(),
            category: CategoryId::InitSingle,
        };
        assert_eq!(
            err.to_string(),
            "Service meta references category init_single which has no group"
        );
    }

    #[test]
    fn test_suggestions() {
        let err = CoreError::InvalidHoursAssignment {
            input: "meta".to_string(),
        };
        assert!(err.suggestion().unwrap().contains("meta=0.5"));

        let err = CoreError::DuplicateService {
            id: "arch".to_string(),
        };
        assert!(err.suggestion().is_none());
    }
}
