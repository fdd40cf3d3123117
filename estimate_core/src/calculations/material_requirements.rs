//! # Material Requirement Calculation
//!
//! Converts total surface area into a per-material required quantity.
//! Quantities round UP — running short of putty mid-wall costs more than
//! a spare bag — except that quotients within floating-point epsilon of an
//! integer boundary snap to that integer first, so `52.0 m² / 10.4 m²·unit⁻¹`
//! needs 5 units, not 6.
//!
//! A material configured with non-positive coverage produces a
//! [`Quantity::NotComputable`] sentinel row: that is valid configuration
//! state the presentation layer must render distinctly, not an error.

use serde::{Deserialize, Serialize};

use crate::format;
use crate::materials::MaterialRegistry;

/// Relative tolerance for snapping a quotient to an integer boundary
/// before ceiling.
const BOUNDARY_EPSILON: f64 = 1e-9;

/// Required quantity for one material: a unit count, or a sentinel for
/// rows whose coverage setting cannot support division.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum Quantity {
    /// Whole units required, already rounded up
    Units(u64),
    /// Coverage per unit was zero, negative, or unset
    NotComputable,
}

/// One derived requirement row. Recomputed in full on every calculation
/// pass; never incrementally updated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialRequirement {
    /// Item name, as configured
    pub name: String,

    /// Reporting unit label, as configured
    pub unit_name: String,

    /// The coverage setting the row was computed from (m² per unit)
    pub coverage_per_unit: f64,

    /// Required quantity, rounded up, or the not-computable sentinel
    pub quantity: Quantity,
}

impl MaterialRequirement {
    /// Coverage setting as display text (2 decimals, or the unset marker).
    pub fn coverage_text(&self) -> String {
        match self.quantity {
            Quantity::NotComputable => format::COVERAGE_UNSET.to_string(),
            Quantity::Units(_) => format::coverage(self.coverage_per_unit),
        }
    }

    /// Required quantity as display text ("11 kg", or the sentinel marker).
    pub fn quantity_text(&self) -> String {
        match self.quantity {
            Quantity::Units(n) => format::quantity(n, &self.unit_name),
            Quantity::NotComputable => format::NOT_COMPUTABLE.to_string(),
        }
    }
}

/// Compute requirement rows for every registered material.
///
/// `total_area <= 0` yields an empty vec — "nothing to compute yet" is
/// signaled by absence, matching the display layer's placeholder state.
/// Row order follows registry iteration order.
pub fn material_requirements(
    total_area: f64,
    registry: &MaterialRegistry,
) -> Vec<MaterialRequirement> {
    if !(total_area > 0.0) {
        return Vec::new();
    }

    registry
        .iter()
        .map(|setting| {
            let coverage = setting.coverage_per_unit;
            let quantity = if coverage.is_finite() && coverage > 0.0 {
                Quantity::Units(ceil_units(total_area / coverage))
            } else {
                Quantity::NotComputable
            };
            MaterialRequirement {
                name: setting.name.clone(),
                unit_name: setting.unit_name.clone(),
                coverage_per_unit: coverage,
                quantity,
            }
        })
        .collect()
}

/// Ceiling with an epsilon guard: quotients within relative epsilon of an
/// integer are that integer, so division noise cannot over-provision by a
/// whole unit.
fn ceil_units(quotient: f64) -> u64 {
    let nearest = quotient.round();
    let tolerance = BOUNDARY_EPSILON * quotient.abs().max(1.0);
    let snapped = if (quotient - nearest).abs() <= tolerance {
        nearest
    } else {
        quotient.ceil()
    };
    snapped.max(0.0) as u64
}
