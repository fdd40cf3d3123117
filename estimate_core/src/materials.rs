//! # Material Settings Registry
//!
//! Per-material configuration: a unit label and how many square meters one
//! unit of the material covers. The registry is an insertion-ordered,
//! name-keyed collection with a fixed canonical default set of six
//! finishing materials.
//!
//! The canonical set is allowed to evolve between releases, so in-flight
//! state self-heals: [`MaterialRegistry::reconcile`] prunes entries whose
//! name is no longer canonical and re-adds missing canonical entries with
//! their defaults. Reconciliation runs on every session load and on reset,
//! not just when the user asks for it.

use serde::{Deserialize, Serialize};

/// Canonical default material set: (name, unit label, m² covered per unit).
///
/// Iteration order here defines the default result-row order.
const CANONICAL_MATERIALS: [(&str, &str, f64); 6] = [
    ("Fiber tape", "m", 50.0),
    ("Base putty", "kg", 5.0),
    ("Finish putty", "kg", 5.0),
    ("Primer coat", "L", 10.0),
    ("Mid coat", "L", 10.0),
    ("Top coat", "L", 10.0),
];

/// Configuration for one material item.
///
/// `coverage_per_unit` is expected positive; zero or negative values are
/// valid configuration state that yields a "not computable" requirement
/// row rather than an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialSetting {
    /// Item name, unique within the registry
    pub name: String,

    /// Free-form reporting unit label (e.g. "kg", "L", "m")
    pub unit_name: String,

    /// Square meters covered by one unit of this material
    pub coverage_per_unit: f64,
}

impl MaterialSetting {
    pub fn new(
        name: impl Into<String>,
        unit_name: impl Into<String>,
        coverage_per_unit: f64,
    ) -> Self {
        MaterialSetting {
            name: name.into(),
            unit_name: unit_name.into(),
            coverage_per_unit,
        }
    }
}

/// Insertion-ordered registry of material settings, keyed by item name.
///
/// Backed by a `Vec` rather than a map so result rows keep a stable,
/// user-visible order: the canonical default order, extended by any
/// user-added names until the next reconciliation prunes them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MaterialRegistry {
    entries: Vec<MaterialSetting>,
}

impl MaterialRegistry {
    /// Registry holding exactly the canonical default set.
    pub fn canonical_defaults() -> Self {
        MaterialRegistry {
            entries: CANONICAL_MATERIALS
                .iter()
                .map(|(name, unit, coverage)| MaterialSetting::new(*name, *unit, *coverage))
                .collect(),
        }
    }

    /// An empty registry. Mostly useful in tests; a live session always
    /// reconciles to at least the canonical set.
    pub fn empty() -> Self {
        MaterialRegistry { entries: Vec::new() }
    }

    /// Look up a setting by item name.
    pub fn get(&self, name: &str) -> Option<&MaterialSetting> {
        self.entries.iter().find(|s| s.name == name)
    }

    /// Look up a setting mutably by item name.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut MaterialSetting> {
        self.entries.iter_mut().find(|s| s.name == name)
    }

    /// Insert or update a setting. New names append at the end,
    /// preserving iteration order for existing names.
    pub fn upsert(&mut self, setting: MaterialSetting) {
        match self.get_mut(&setting.name) {
            Some(existing) => *existing = setting,
            None => self.entries.push(setting),
        }
    }

    /// Remove a setting by name. Returns the removed entry if it existed.
    pub fn remove(&mut self, name: &str) -> Option<MaterialSetting> {
        let idx = self.entries.iter().position(|s| s.name == name)?;
        Some(self.entries.remove(idx))
    }

    /// Iterate settings in registry order.
    pub fn iter(&self) -> impl Iterator<Item = &MaterialSetting> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Prune-then-refill against the canonical set.
    ///
    /// Entries whose name is not canonical are discarded. Canonical names
    /// that are missing are appended with their default unit and coverage.
    /// Retained canonical entries keep their position and any user edits
    /// to unit or coverage.
    pub fn reconcile(&mut self) {
        self.entries
            .retain(|s| CANONICAL_MATERIALS.iter().any(|(name, _, _)| *name == s.name));
        for (name, unit, coverage) in CANONICAL_MATERIALS.iter() {
            if self.get(name).is_none() {
                self.entries.push(MaterialSetting::new(*name, *unit, *coverage));
            }
        }
    }
}

impl Default for MaterialRegistry {
    fn default() -> Self {
        MaterialRegistry::canonical_defaults()
    }
}
