//! Data models for quoteboard

pub mod category;
pub mod config;
pub mod params;
pub mod service;

pub use category::{BillingType, CalculationMethod, CategoryGroup, CategoryId};
pub use config::{ColorScheme, Settings};
pub use params::{clamp_non_negative, GlobalParameters, Parameter};
pub use service::{Preset, PresetSelection, ServiceDefinition};
