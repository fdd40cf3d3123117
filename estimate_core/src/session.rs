//! # Session State
//!
//! The `SessionState` struct is the single source of truth for one
//! estimation session: the zone list, labor configuration, material
//! registry, and the derived results of the last calculation pass. It is
//! owned by the caller and passed by reference; there is no implicit
//! global.
//!
//! ## Structure
//!
//! ```text
//! SessionState
//! ├── meta: SessionMeta (created/modified timestamps)
//! ├── zones: Vec<Zone> (at least one; index-addressed)
//! ├── labor: LaborConfig (coverage rate)
//! ├── materials: MaterialRegistry (canonical six + edits)
//! ├── aggregate / requirements (derived, refreshed by run_pass)
//! └── reset_armed: two-step destructive-reset flag
//! ```
//!
//! Sessions round-trip through JSON. Loading one always reconciles the
//! material registry against the canonical set and heals an empty zone
//! list, so in-flight state from an older release self-repairs.
//!
//! ## Example
//!
//! ```rust
//! use estimate_core::session::SessionState;
//! use estimate_core::calculations;
//!
//! let mut session = SessionState::new();
//! session.zones[0].height = 2.4;
//! session.zones[0].widths[0] = 12.5;
//! calculations::run_pass(&mut session);
//! assert_eq!(session.aggregate.total_area, 30.0);
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::calculations::{AggregateResult, LaborConfig, MaterialRequirement};
use crate::errors::EstimateResult;
use crate::materials::MaterialRegistry;
use crate::ocr::ExtractedDimensions;
use crate::zone::{Zone, WIDTH_SLOTS};

/// Session metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionMeta {
    /// When the session was created
    pub created: DateTime<Utc>,

    /// When the session was last modified
    pub modified: DateTime<Utc>,
}

/// Outcome of a destructive-reset request (two-step confirmation).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResetOutcome {
    /// First request: nothing was reset; a second request will reset
    ArmedConfirmation,
    /// Second request: the session was reset to defaults
    Completed,
}

/// Outcome of applying extracted dimensions to the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AutoFillOutcome {
    /// Dimensions were written into the first zone
    Applied {
        /// Width slots that received a value
        widths_filled: usize,
        /// Extracted widths beyond the slot count, dropped
        widths_discarded: usize,
    },
    /// No zone exists to fill; nothing was changed
    NoZones,
}

/// Root container for one estimation session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionState {
    /// Session timestamps
    pub meta: SessionMeta,

    /// Zones, addressed by position ("zone 1" is index 0).
    /// Healed to at least one default zone on load.
    pub zones: Vec<Zone>,

    /// Labor calculation settings
    pub labor: LaborConfig,

    /// Material registry, reconciled against the canonical set on load
    /// and reset
    pub materials: MaterialRegistry,

    /// Aggregate of the last calculation pass (derived)
    #[serde(default)]
    pub aggregate: AggregateResult,

    /// Requirement rows of the last calculation pass (derived)
    #[serde(default)]
    pub requirements: Vec<MaterialRequirement>,

    /// Pending destructive-reset confirmation flag
    #[serde(default)]
    pub reset_armed: bool,
}

impl SessionState {
    /// Create a session in the canonical default state: one zeroed zone,
    /// the default coverage rate, and the canonical material set.
    pub fn new() -> Self {
        let now = Utc::now();
        SessionState {
            meta: SessionMeta {
                created: now,
                modified: now,
            },
            zones: vec![Zone::default()],
            labor: LaborConfig::default(),
            materials: MaterialRegistry::canonical_defaults(),
            aggregate: AggregateResult::default(),
            requirements: Vec::new(),
            reset_armed: false,
        }
    }

    /// Deserialize a session from JSON and reconcile it.
    ///
    /// This is the "load" event: the material registry is pruned and
    /// refilled against the canonical set and an empty zone list gets its
    /// default zone back, so state saved by a different release heals
    /// itself.
    pub fn from_json(json: &str) -> EstimateResult<Self> {
        let mut session: SessionState = serde_json::from_str(json)?;
        session.reconcile();
        Ok(session)
    }

    /// Serialize the session to pretty JSON.
    pub fn to_json(&self) -> EstimateResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reconcile in-flight state against the canonical defaults.
    pub fn reconcile(&mut self) {
        self.materials.reconcile();
        if self.zones.is_empty() {
            self.zones.push(Zone::default());
        }
    }

    /// Restore every entity to its documented default.
    pub fn reset(&mut self) {
        self.zones = vec![Zone::default()];
        self.labor = LaborConfig::default();
        self.materials = MaterialRegistry::canonical_defaults();
        self.aggregate = AggregateResult::default();
        self.requirements.clear();
        self.reset_armed = false;
        self.touch();
    }

    /// Request a destructive reset.
    ///
    /// The first request only arms a confirmation flag; the second
    /// performs the reset. Other mutating actions disarm the flag, so a
    /// stale first click cannot make a later click destructive.
    pub fn request_reset(&mut self) -> ResetOutcome {
        if self.reset_armed {
            self.reset();
            ResetOutcome::Completed
        } else {
            self.reset_armed = true;
            ResetOutcome::ArmedConfirmation
        }
    }

    /// Append a new zeroed zone. Returns its index.
    pub fn add_zone(&mut self) -> usize {
        self.zones.push(Zone::default());
        self.reset_armed = false;
        self.touch();
        self.zones.len() - 1
    }

    /// Remove the zone at `index`. Returns the removed zone, or `None`
    /// when the index is out of range or only one zone remains (the last
    /// zone is never removable).
    pub fn remove_zone(&mut self, index: usize) -> Option<Zone> {
        if self.zones.len() <= 1 || index >= self.zones.len() {
            return None;
        }
        let removed = self.zones.remove(index);
        self.reset_armed = false;
        self.touch();
        Some(removed)
    }

    /// Write extracted dimensions into the first zone.
    ///
    /// The height overwrites the zone's height; widths fill the slots in
    /// order, extras beyond the slot count are discarded. With no zones
    /// this is a no-op reported as [`AutoFillOutcome::NoZones`].
    pub fn apply_dimensions(&mut self, dims: &ExtractedDimensions) -> AutoFillOutcome {
        let Some(zone) = self.zones.first_mut() else {
            return AutoFillOutcome::NoZones;
        };

        zone.height = dims.height;
        let widths_filled = dims.widths.len().min(WIDTH_SLOTS);
        for (slot, width) in zone.widths.iter_mut().zip(dims.widths.iter()) {
            *slot = *width;
        }
        self.touch();
        AutoFillOutcome::Applied {
            widths_filled,
            widths_discarded: dims.widths.len() - widths_filled,
        }
    }

    /// Update the modified timestamp.
    pub fn touch(&mut self) {
        self.meta.modified = Utc::now();
    }
}

impl Default for SessionState {
    fn default() -> Self {
        SessionState::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::{self, Quantity};
    use crate::materials::MaterialSetting;
    use crate::ocr::parse_dimensions;

    #[test]
    fn test_new_session_defaults() {
        let session = SessionState::new();
        assert_eq!(session.zones.len(), 1);
        assert_eq!(session.zones[0], Zone::default());
        assert_eq!(session.labor.coverage_rate, 15.0);
        assert_eq!(session.materials.len(), 6);
        assert!(session.requirements.is_empty());
        assert!(!session.reset_armed);
    }

    #[test]
    fn test_add_remove_zone() {
        let mut session = SessionState::new();
        let idx = session.add_zone();
        assert_eq!(idx, 1);
        assert_eq!(session.zones.len(), 2);

        assert!(session.remove_zone(0).is_some());
        assert_eq!(session.zones.len(), 1);

        // The last zone is never removable
        assert!(session.remove_zone(0).is_none());
        assert_eq!(session.zones.len(), 1);
    }

    #[test]
    fn test_remove_zone_out_of_range() {
        let mut session = SessionState::new();
        session.add_zone();
        assert!(session.remove_zone(5).is_none());
        assert_eq!(session.zones.len(), 2);
    }

    #[test]
    fn test_two_step_reset() {
        let mut session = SessionState::new();
        session.zones[0].height = 2.4;
        session.labor.coverage_rate = 20.0;
        session.materials.upsert(MaterialSetting::new("Corner bead", "pc", 2.5));
        session.materials.remove("Primer coat");

        // First request arms, nothing changes
        assert_eq!(session.request_reset(), ResetOutcome::ArmedConfirmation);
        assert_eq!(session.zones[0].height, 2.4);
        assert!(session.reset_armed);

        // Second request restores the canonical state exactly
        assert_eq!(session.request_reset(), ResetOutcome::Completed);
        assert_eq!(session.zones.len(), 1);
        assert_eq!(session.zones[0], Zone::default());
        assert_eq!(session.labor.coverage_rate, 15.0);
        assert_eq!(session.materials, MaterialRegistry::canonical_defaults());
        assert!(!session.reset_armed);
    }

    #[test]
    fn test_mutation_disarms_pending_reset() {
        let mut session = SessionState::new();
        session.request_reset();
        assert!(session.reset_armed);

        session.add_zone();
        assert!(!session.reset_armed);

        // The next reset request arms again instead of executing
        assert_eq!(session.request_reset(), ResetOutcome::ArmedConfirmation);
        assert_eq!(session.zones.len(), 2);
    }

    #[test]
    fn test_apply_dimensions() {
        let mut session = SessionState::new();
        let dims = parse_dimensions("H: 12.3\nW: 1.0, 2.5 3.0\nW: 4.0");

        let outcome = session.apply_dimensions(&dims);
        assert_eq!(
            outcome,
            AutoFillOutcome::Applied {
                widths_filled: 4,
                widths_discarded: 0
            }
        );
        assert_eq!(session.zones[0].height, 12.3);
        assert_eq!(&session.zones[0].widths[..4], &[1.0, 2.5, 3.0, 4.0]);
        assert_eq!(session.zones[0].widths[4], 0.0);
    }

    #[test]
    fn test_apply_dimensions_truncates_past_ten() {
        let mut session = SessionState::new();
        let dims = ExtractedDimensions {
            height: 2.0,
            widths: (1..=12).map(f64::from).collect(),
        };

        let outcome = session.apply_dimensions(&dims);
        assert_eq!(
            outcome,
            AutoFillOutcome::Applied {
                widths_filled: 10,
                widths_discarded: 2
            }
        );
        assert_eq!(session.zones[0].widths[9], 10.0);
    }

    #[test]
    fn test_apply_dimensions_without_zones() {
        let mut session = SessionState::new();
        session.zones.clear();
        let dims = ExtractedDimensions {
            height: 2.0,
            widths: vec![1.0],
        };
        assert_eq!(session.apply_dimensions(&dims), AutoFillOutcome::NoZones);
    }

    #[test]
    fn test_load_reconciles_registry_and_zones() {
        let mut session = SessionState::new();
        session.materials.upsert(MaterialSetting::new("Corner bead", "pc", 2.5));
        session.materials.remove("Mid coat");
        session.zones.clear();
        let json = session.to_json().unwrap();

        let loaded = SessionState::from_json(&json).unwrap();
        assert!(loaded.materials.get("Corner bead").is_none());
        assert_eq!(loaded.materials.get("Mid coat").unwrap().coverage_per_unit, 10.0);
        assert_eq!(loaded.materials.len(), 6);
        assert_eq!(loaded.zones.len(), 1);
    }

    #[test]
    fn test_json_roundtrip_preserves_inputs_and_results() {
        let mut session = SessionState::new();
        session.zones[0].name = "West wall".to_string();
        session.zones[0].height = 2.0;
        session.zones[0].widths[0] = 26.0;
        calculations::run_pass(&mut session);

        let json = session.to_json().unwrap();
        let loaded = SessionState::from_json(&json).unwrap();
        assert_eq!(loaded.zones, session.zones);
        assert_eq!(loaded.aggregate, session.aggregate);
        assert_eq!(loaded.requirements, session.requirements);
        assert!(matches!(loaded.requirements[0].quantity, Quantity::Units(_)));
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(SessionState::from_json("{not json").is_err());
    }
}
