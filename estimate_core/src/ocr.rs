//! # OCR Seam and Dimension Parsing
//!
//! The image-to-text engine is an external collaborator behind the
//! [`TextRecognizer`] trait: it takes an image path and an optional
//! language hint and returns recognized text, or an
//! [`EstimateError::OcrFailed`] the caller reports as a non-fatal notice.
//!
//! [`parse_dimensions`] turns that raw text into structured dimensions.
//! Drawings label the wall height `H: 2.4` and width runs `W: 3.6, 1.2`,
//! possibly across several lines, with arbitrary OCR noise in between.
//! Extraction is a two-stage parse: regexes locate candidate substrings,
//! then each candidate is parsed as a number independently. Fragments that
//! fail to parse are skipped silently — that is the intended policy for
//! noisy input, not an oversight.
//!
//! ## Example
//!
//! ```rust
//! use estimate_core::ocr::parse_dimensions;
//!
//! let dims = parse_dimensions("H: 2.4\nW: 3.6, 1.2\nW: 0.9");
//! assert_eq!(dims.height, 2.4);
//! assert_eq!(dims.widths, vec![3.6, 1.2, 0.9]);
//! ```

use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::errors::EstimateResult;

static HEIGHT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[Hh]:\s*([0-9.]+)").unwrap());

static WIDTH_RUN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[Ww]:\s*([0-9.,\s]+)").unwrap());

static NUMBER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9.]+").unwrap());

/// External image-to-text collaborator.
///
/// Implementations wrap whatever OCR engine is available (a tesseract
/// subprocess, a cloud endpoint, a test stub). A failure must come back
/// as an error, never a panic; callers commit no state on failure.
pub trait TextRecognizer {
    /// Recognize text in the image at `path`. `lang` is an optional
    /// engine-specific language hint (e.g. "eng", "jpn+eng").
    fn recognize(&self, path: &Path, lang: Option<&str>) -> EstimateResult<String>;
}

/// Dimensions extracted from recognized drawing text.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ExtractedDimensions {
    /// Extracted height in meters; 0.0 when no "H:" token was found
    pub height: f64,

    /// Extracted widths in meters, in document order; empty when no
    /// "W:" token was found
    pub widths: Vec<f64>,
}

/// Extract one height and an ordered width list from recognized text.
///
/// Height: the first `H:`/`h:` token wins; a token whose number fails to
/// parse leaves the height at 0.0. Widths: every `W:`/`w:` token
/// contributes, in occurrence order; within each token's digit/point/
/// comma/whitespace run, maximal digit-and-point substrings are parsed
/// left to right and unparseable fragments (such as a bare `.` or
/// `1.2.3`) are dropped.
pub fn parse_dimensions(text: &str) -> ExtractedDimensions {
    let mut dims = ExtractedDimensions::default();

    if let Some(captures) = HEIGHT_RE.captures(text) {
        if let Ok(height) = captures[1].parse::<f64>() {
            dims.height = height;
        }
    }

    for captures in WIDTH_RUN_RE.captures_iter(text) {
        for fragment in NUMBER_RE.find_iter(&captures[1]) {
            if let Ok(width) = fragment.as_str().parse::<f64>() {
                dims.widths.push(width);
            }
        }
    }

    dims
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_height_and_multiline_widths() {
        let dims = parse_dimensions("H: 12.3\nW: 1.0, 2.5 3.0\nW: 4.0");
        assert_eq!(dims.height, 12.3);
        assert_eq!(dims.widths, vec![1.0, 2.5, 3.0, 4.0]);
    }

    #[test]
    fn test_no_tokens() {
        let dims = parse_dimensions("floor plan, scale 1/50");
        assert_eq!(dims.height, 0.0);
        assert!(dims.widths.is_empty());
    }

    #[test]
    fn test_first_height_wins() {
        let dims = parse_dimensions("h: 2.4 elsewhere H: 9.9");
        assert_eq!(dims.height, 2.4);
    }

    #[test]
    fn test_lowercase_tokens() {
        let dims = parse_dimensions("h:2.7 w:1.5,2.0");
        assert_eq!(dims.height, 2.7);
        assert_eq!(dims.widths, vec![1.5, 2.0]);
    }

    #[test]
    fn test_malformed_height_stays_zero() {
        // "1.2.3" matches the candidate pattern but is not a number
        let dims = parse_dimensions("H: 1.2.3\nW: 5.0");
        assert_eq!(dims.height, 0.0);
        assert_eq!(dims.widths, vec![5.0]);
    }

    #[test]
    fn test_malformed_width_fragments_skipped() {
        let dims = parse_dimensions("W: 1.0, 2.5.5, 3.0");
        assert_eq!(dims.widths, vec![1.0, 3.0]);
    }

    #[test]
    fn test_widths_keep_token_then_fragment_order() {
        let dims = parse_dimensions("W: 7.0\nnoise line\nW: 1.0 2.0\nW: 3.5");
        assert_eq!(dims.widths, vec![7.0, 1.0, 2.0, 3.5]);
    }

    #[test]
    fn test_serialization() {
        let dims = parse_dimensions("H: 2.4\nW: 3.0");
        let json = serde_json::to_string(&dims).unwrap();
        let roundtrip: ExtractedDimensions = serde_json::from_str(&json).unwrap();
        assert_eq!(dims, roundtrip);
    }
}
