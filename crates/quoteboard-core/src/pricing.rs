//! Cost formulas for quote line items
//!
//! A line item's cost is its hours times a page multiplier times the hourly
//! rate. The multiplier depends on the category's calculation method:
//!
//! - **Global**: 1, the effort is flat regardless of page count
//! - **Per page**: `standard_pages + pillar_pages * 1.5`
//!
//! Pillar pages carry more editorial and technical effort, hence the fixed
//! [`PILLAR_PAGE_WEIGHT`].
//!
//! # Examples
//!
//! ```
//! use quoteboard_core::models::{CalculationMethod, GlobalParameters};
//! use quoteboard_core::pricing::{page_multiplier, service_cost};
//!
//! let params = GlobalParameters::new(50.0, 10.0, 2.0);
//! assert_eq!(page_multiplier(CalculationMethod::PerPage, &params), 13.0);
//!
//! // 0.5h per page × 13 pages × 50/h
//! let cost = service_cost(true, 0.5, CalculationMethod::PerPage, &params);
//! assert_eq!(cost, 325.0);
//!
//! // Inactive line items cost nothing
//! assert_eq!(service_cost(false, 0.5, CalculationMethod::PerPage, &params), 0.0);
//! ```

use crate::models::{CalculationMethod, GlobalParameters};

/// Weight of a pillar page relative to a standard page
pub const PILLAR_PAGE_WEIGHT: f64 = 1.5;

/// Multiplier applied to a service's hours
///
/// ```text
/// Global   → 1
/// PerPage  → standard_pages + pillar_pages × 1.5
/// ```
pub fn page_multiplier(method: CalculationMethod, params: &GlobalParameters) -> f64 {
    match method {
        CalculationMethod::Global => 1.0,
        CalculationMethod::PerPage => {
            params.standard_page_count + params.pillar_page_count * PILLAR_PAGE_WEIGHT
        }
    }
}

/// Hours a service contributes to a bucket, independent of the hourly rate
///
/// Zero hours or a zero multiplier give exactly 0, even when the other
/// factor has overflowed to infinity.
pub fn effective_hours(hours: f64, method: CalculationMethod, params: &GlobalParameters) -> f64 {
    let multiplier = page_multiplier(method, params);
    if hours == 0.0 || multiplier == 0.0 {
        return 0.0;
    }
    hours * multiplier
}

/// Cost of one line item
///
/// Returns exactly 0 when the service is inactive, whatever its hours, and
/// never NaN.
pub fn service_cost(
    active: bool,
    hours: f64,
    method: CalculationMethod,
    params: &GlobalParameters,
) -> f64 {
    let effective = effective_hours(hours, method, params);
    if !active || effective == 0.0 || params.hourly_rate == 0.0 {
        return 0.0;
    }
    effective * params.hourly_rate
}
