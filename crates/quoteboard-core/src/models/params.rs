//! Global quote parameters

use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Clamp a user-supplied number to `>= 0`
///
/// NaN and infinities count as invalid input and become 0. Any finite
/// non-negative value is kept, there is no upper bound.
pub fn clamp_non_negative(value: f64) -> f64 {
    if !value.is_finite() || value < 0.0 {
        0.0
    } else {
        value
    }
}

/// Session-wide pricing parameters
///
/// All fields stay `>= 0`; writes go through [`GlobalParameters::set`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GlobalParameters {
    /// Currency amount per hour
    pub hourly_rate: f64,
    pub standard_page_count: f64,
    /// Pages weighted at 1.5x in per-page calculations
    pub pillar_page_count: f64,
}

impl Default for GlobalParameters {
    fn default() -> Self {
        Self {
            hourly_rate: 120.0,
            standard_page_count: 10.0,
            pillar_page_count: 2.0,
        }
    }
}

impl GlobalParameters {
    pub fn new(hourly_rate: f64, standard_page_count: f64, pillar_page_count: f64) -> Self {
        Self {
            hourly_rate: clamp_non_negative(hourly_rate),
            standard_page_count: clamp_non_negative(standard_page_count),
            pillar_page_count: clamp_non_negative(pillar_page_count),
        }
    }

    pub fn get(&self, parameter: Parameter) -> f64 {
        match parameter {
            Parameter::HourlyRate => self.hourly_rate,
            Parameter::StandardPageCount => self.standard_page_count,
            Parameter::PillarPageCount => self.pillar_page_count,
        }
    }

    /// Store `max(0, value)` for the given parameter
    pub fn set(&mut self, parameter: Parameter, value: f64) {
        let value = clamp_non_negative(value);
        match parameter {
            Parameter::HourlyRate => self.hourly_rate = value,
            Parameter::StandardPageCount => self.standard_page_count = value,
            Parameter::PillarPageCount => self.pillar_page_count = value,
        }
    }
}

/// Name of a global parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Parameter {
    HourlyRate,
    StandardPageCount,
    PillarPageCount,
}

impl Parameter {
    pub fn all() -> &'static [Parameter] {
        &[
            Parameter::HourlyRate,
            Parameter::StandardPageCount,
            Parameter::PillarPageCount,
        ]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Parameter::HourlyRate => "hourly_rate",
            Parameter::StandardPageCount => "standard_page_count",
            Parameter::PillarPageCount => "pillar_page_count",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Parameter::HourlyRate => "Stundensatz (€)",
            Parameter::StandardPageCount => "Std. Seiten",
            Parameter::PillarPageCount => "Pillar Pages",
        }
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Parameter {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "hourly_rate" | "hourlyRate" | "rate" => Ok(Parameter::HourlyRate),
            "standard_page_count" | "standardPageCount" | "standard_pages" | "standardPages" => {
                Ok(Parameter::StandardPageCount)
            }
            "pillar_page_count" | "pillarPageCount" | "pillar_pages" | "pillarPages" => {
                Ok(Parameter::PillarPageCount)
            }
            _ => Err(CoreError::UnknownParameter {
                name: s.to_string(),
            }),
        }
    }
}
