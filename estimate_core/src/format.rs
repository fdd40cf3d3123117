//! # Display Formatting
//!
//! The numeric formatting contract for displayed outputs: areas and
//! per-unit coverage at two decimals, labor-days at one decimal, required
//! quantities as an integer with its unit label. Presentation layers
//! should route all numbers through these helpers so reports agree with
//! the rounding the calculation layer promises.

/// Marker text for a coverage setting that cannot support division.
pub const COVERAGE_UNSET: &str = "0 or unset";

/// Marker text for a requirement row with no numeric result.
pub const NOT_COMPUTABLE: &str = "not computable";

/// Area in m², two decimals (e.g. "15.50").
pub fn area(value: f64) -> String {
    format!("{:.2}", value)
}

/// Labor-days, one decimal (e.g. "2.0").
pub fn labor_days(value: f64) -> String {
    format!("{:.1}", value)
}

/// Per-unit coverage in m², two decimals.
pub fn coverage(value: f64) -> String {
    format!("{:.2}", value)
}

/// Required quantity with its unit label (e.g. "11 kg").
pub fn quantity(units: u64, unit_name: &str) -> String {
    format!("{} {}", units, unit_name)
}
