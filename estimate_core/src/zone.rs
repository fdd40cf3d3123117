//! # Zone Data Model
//!
//! A `Zone` is one named construction surface: a wall run with a single
//! height and up to ten width segments. Its area is always derived from
//! height and widths (see [`crate::calculations::area`]) and never edited
//! directly.
//!
//! ## JSON Example
//!
//! ```json
//! {
//!   "name": "Living room north wall",
//!   "height": 2.4,
//!   "widths": [3.6, 1.2, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
//!   "area": 11.52
//! }
//! ```

use serde::{Deserialize, Serialize};

/// Number of width slots per zone. Unused slots hold 0.0.
pub const WIDTH_SLOTS: usize = 10;

/// One named construction surface.
///
/// Heights and widths are meters; values originate from free-form user
/// entry or OCR auto-fill, so the calculation layer treats non-finite
/// values as 0.0 rather than failing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Zone {
    /// User label for this zone (may be empty)
    pub name: String,

    /// Surface height in meters
    pub height: f64,

    /// Width segments in meters, fixed at ten slots
    pub widths: [f64; WIDTH_SLOTS],

    /// Derived area in m². Refreshed by every calculation pass;
    /// never an input.
    pub area: f64,
}

impl Zone {
    /// Create a zone with a name and all-zero dimensions.
    pub fn named(name: impl Into<String>) -> Self {
        Zone {
            name: name.into(),
            ..Zone::default()
        }
    }

    /// Sum of all width slots, treating non-finite entries as 0.0.
    pub fn width_sum(&self) -> f64 {
        self.widths
            .iter()
            .map(|w| if w.is_finite() { *w } else { 0.0 })
            .sum()
    }
}

impl Default for Zone {
    fn default() -> Self {
        Zone {
            name: String::new(),
            height: 0.0,
            widths: [0.0; WIDTH_SLOTS],
            area: 0.0,
        }
    }
}
