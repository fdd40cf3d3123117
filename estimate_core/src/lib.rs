//! # estimate_core - Interior Finishing Estimation Engine
//!
//! `estimate_core` computes construction surface areas, required
//! labor-days, and material quantities for interior-finishing work, and
//! can pre-fill zone dimensions from the text an OCR engine recognized in
//! a photographed dimension drawing.
//!
//! ## Design Philosophy
//!
//! - **Stateless computation**: every pass recomputes all derived values
//!   from the session's inputs; nothing is incrementally updated
//! - **JSON-First**: all types implement Serialize/Deserialize
//! - **Best-effort inputs**: values come from free-form entry and noisy
//!   OCR, so malformed numbers degrade to 0.0 or a sentinel row instead
//!   of failing
//!
//! ## Quick Start
//!
//! ```rust
//! use estimate_core::session::SessionState;
//! use estimate_core::calculations;
//!
//! let mut session = SessionState::new();
//! session.zones[0].name = "Bedroom walls".to_string();
//! session.zones[0].height = 2.4;
//! session.zones[0].widths[0] = 12.5;
//!
//! calculations::run_pass(&mut session);
//! assert_eq!(session.aggregate.total_area, 30.0);
//! assert_eq!(session.aggregate.labor_days, 2.0);
//! ```
//!
//! ## Modules
//!
//! - [`session`] - Session container, defaults, reset, OCR auto-fill
//! - [`zone`] - Zone data model (height plus ten width slots)
//! - [`materials`] - Material settings registry with canonical defaults
//! - [`calculations`] - Area, labor, and material-requirement derivation
//! - [`ocr`] - Image-to-text seam and dimension parsing
//! - [`format`] - Display formatting contract
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod errors;
pub mod format;
pub mod materials;
pub mod ocr;
pub mod session;
pub mod zone;

// Re-export commonly used types at crate root for convenience
pub use calculations::{run_pass, AggregateResult, LaborConfig, MaterialRequirement, Quantity};
pub use errors::{EstimateError, EstimateResult};
pub use ocr::{parse_dimensions, ExtractedDimensions, TextRecognizer};
pub use session::{AutoFillOutcome, ResetOutcome, SessionState};
pub use zone::{Zone, WIDTH_SLOTS};
