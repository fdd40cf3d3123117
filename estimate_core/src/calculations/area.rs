//! # Area Calculation
//!
//! Computes a single zone's surface area and the aggregate across all
//! zones. Inputs originate from free-form user entry or noisy OCR, so the
//! policy is best-effort: non-finite values count as 0.0 and nothing here
//! can fail.

use crate::zone::Zone;

/// Surface area of one zone: `height × Σwidths`, in m².
///
/// Non-finite height or width values are treated as 0.0.
pub fn zone_area(zone: &Zone) -> f64 {
    let height = if zone.height.is_finite() { zone.height } else { 0.0 };
    height * zone.width_sum()
}

/// Total surface area across all zones, in m². 0.0 for an empty slice.
///
/// Side effect: each zone's derived `area` field is refreshed as a
/// byproduct, so a display layer reading `zone.area` after this call
/// sees current values.
pub fn total_area(zones: &mut [Zone]) -> f64 {
    let mut total = 0.0;
    for zone in zones.iter_mut() {
        zone.area = zone_area(zone);
        total += zone.area;
    }
    total
}
