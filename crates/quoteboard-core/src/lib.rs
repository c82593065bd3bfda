//! quoteboard-core - Core library for quoteboard
//!
//! Provides the service catalog, the pricing engine and the settings loader
//! for the SEO quote configurator.

pub mod catalog;
pub mod engine;
pub mod error;
pub mod format;
pub mod models;
pub mod pricing;
pub mod settings;

pub use catalog::Catalog;
pub use engine::{EngineCommand, LineItem, PricingEngine, QuoteSnapshot, QuoteTotals, ServiceConfiguration};
pub use error::CoreError;
