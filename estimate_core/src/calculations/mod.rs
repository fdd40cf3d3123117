//! # Estimation Calculations
//!
//! Pure calculation functions, one concern per module:
//!
//! - [`area`] - per-zone and total surface area
//! - [`labor`] - labor-days from total area and a coverage rate
//! - [`material_requirements`] - per-material quantities from total area
//!
//! [`run_pass`] chains them into the full recompute the presentation layer
//! triggers on every state change. The pass is idempotent and recomputes
//! every derived value from scratch; nothing is incrementally updated.

pub mod area;
pub mod labor;
pub mod material_requirements;

use serde::{Deserialize, Serialize};

use crate::session::SessionState;

// Re-export commonly used types
pub use labor::LaborConfig;
pub use material_requirements::{MaterialRequirement, Quantity};

/// Aggregate results of one calculation pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateResult {
    /// Sum of all zone areas, in m²
    pub total_area: f64,

    /// Required labor-days, rounded to one decimal
    pub labor_days: f64,
}

impl Default for AggregateResult {
    fn default() -> Self {
        AggregateResult {
            total_area: 0.0,
            labor_days: 0.0,
        }
    }
}

/// Run the full calculation pass over a session.
///
/// Refreshes every zone's derived area, the aggregate result, and the
/// material requirement rows stored on the session. Safe to call on every
/// state change.
pub fn run_pass(session: &mut SessionState) -> &AggregateResult {
    let total = area::total_area(&mut session.zones);
    session.aggregate = AggregateResult {
        total_area: total,
        labor_days: labor::labor_days(total, session.labor.coverage_rate),
    };
    session.requirements =
        material_requirements::material_requirements(total, &session.materials);
    &session.aggregate
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::SessionState;

    fn populated_session() -> SessionState {
        let mut session = SessionState::new();
        session.zones[0].height = 2.0;
        session.zones[0].widths[0] = 13.0; // area 26.0
        session.add_zone();
        session.zones[1].height = 1.0;
        session.zones[1].widths[0] = 4.0; // area 4.0
        session
    }

    #[test]
    fn test_run_pass_aggregates() {
        let mut session = populated_session();
        run_pass(&mut session);

        assert!((session.aggregate.total_area - 30.0).abs() < 1e-12);
        // 30 / 15 (default rate) = 2.0
        assert_eq!(session.aggregate.labor_days, 2.0);
        // six canonical materials, all computable
        assert_eq!(session.requirements.len(), 6);
    }

    #[test]
    fn test_run_pass_idempotent() {
        let mut session = populated_session();
        run_pass(&mut session);
        let first_aggregate = session.aggregate.clone();
        let first_rows = session.requirements.clone();

        run_pass(&mut session);
        assert_eq!(session.aggregate, first_aggregate);
        assert_eq!(session.requirements, first_rows);
    }

    #[test]
    fn test_run_pass_empty_session_zeroes_results() {
        let mut session = SessionState::new();
        run_pass(&mut session);
        assert_eq!(session.aggregate, AggregateResult::default());
        assert!(session.requirements.is_empty());
    }

    #[test]
    fn test_run_pass_refreshes_zone_areas() {
        let mut session = populated_session();
        run_pass(&mut session);
        assert!((session.zones[0].area - 26.0).abs() < 1e-12);
        assert!((session.zones[1].area - 4.0).abs() < 1e-12);
    }
}
