//! # Labor Estimation
//!
//! Converts total surface area into required labor-days using a
//! configurable coverage rate (m² one labor-day covers).
//!
//! The result is rounded to one decimal place because labor-days are
//! displayed at one decimal; the rounded value IS the contract, not a
//! cosmetic formatting choice.

use serde::{Deserialize, Serialize};

/// Default coverage rate: m² one labor-day covers.
pub const DEFAULT_COVERAGE_RATE: f64 = 15.0;

/// Labor calculation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaborConfig {
    /// Square meters covered per labor-day. Must be positive to divide;
    /// non-positive values yield 0.0 labor-days (guarded, not an error).
    pub coverage_rate: f64,
}

impl Default for LaborConfig {
    fn default() -> Self {
        LaborConfig {
            coverage_rate: DEFAULT_COVERAGE_RATE,
        }
    }
}

/// Required labor-days for `total_area` at `coverage_rate`, rounded
/// half-away-from-zero to one decimal place.
///
/// `coverage_rate <= 0` yields 0.0 rather than an error: an unset rate is
/// valid in-progress configuration state.
pub fn labor_days(total_area: f64, coverage_rate: f64) -> f64 {
    if coverage_rate > 0.0 {
        round_one_decimal(total_area / coverage_rate)
    } else {
        0.0
    }
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
