//! Category groups: billing bucket and calculation method per category

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a category group
///
/// The set is closed: every service in a catalog points at one of these six.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryId {
    InitGlobal,
    InitOffpageGlobal,
    InitSingle,
    RunGlobal,
    RunSingle,
    RunOffpageGlobal,
}

impl CategoryId {
    pub fn all() -> &'static [CategoryId] {
        &[
            CategoryId::InitGlobal,
            CategoryId::InitOffpageGlobal,
            CategoryId::InitSingle,
            CategoryId::RunGlobal,
            CategoryId::RunSingle,
            CategoryId::RunOffpageGlobal,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryId::InitGlobal => "init_global",
            CategoryId::InitOffpageGlobal => "init_offpage_global",
            CategoryId::InitSingle => "init_single",
            CategoryId::RunGlobal => "run_global",
            CategoryId::RunSingle => "run_single",
            CategoryId::RunOffpageGlobal => "run_offpage_global",
        }
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which aggregate bucket a category's cost and hours roll into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BillingType {
    /// Initial setup, billed once
    OneTime,
    /// Recurring, billed every month
    Monthly,
}

impl BillingType {
    pub fn display_name(self) -> &'static str {
        match self {
            BillingType::OneTime => "Einmalig",
            BillingType::Monthly => "Monatlich",
        }
    }
}

/// Whether a category's effort scales with the page count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CalculationMethod {
    /// Flat effort regardless of page count
    Global,
    /// Effort per page, weighted by standard and pillar page counts
    PerPage,
}

impl CalculationMethod {
    pub fn display_name(self) -> &'static str {
        match self {
            CalculationMethod::Global => "Globaler Aufwand",
            CalculationMethod::PerPage => "Aufwand pro Seite",
        }
    }
}

/// Static category definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryGroup {
    pub id: CategoryId,
    pub label: String,
    pub billing_type: BillingType,
    pub calculation_method: CalculationMethod,
}

impl CategoryGroup {
    pub fn new(
        id: CategoryId,
        label: impl Into<String>,
        billing_type: BillingType,
        calculation_method: CalculationMethod,
    ) -> Self {
        Self {
            id,
            label: label.into(),
            billing_type,
            calculation_method,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_id_serde_names() {
        for id in CategoryId::all() {
            let json = serde_json::to_string(id).unwrap();
            assert_eq!(json, format!("\"{}\"", id.as_str()));
        }
    }

    #[test]
    fn test_billing_type_serializes_kebab_case() {
        assert_eq!(
            serde_json::to_string(&BillingType::OneTime).unwrap(),
            "\"one-time\""
        );
        assert_eq!(
            serde_json::to_string(&CalculationMethod::PerPage).unwrap(),
            "\"per-page\""
        );
    }
}
