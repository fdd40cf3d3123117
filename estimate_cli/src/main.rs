//! # Plastimate CLI Application
//!
//! Terminal front-end for the finishing-work estimator. Prompts for zone
//! dimensions (or pre-fills them from a dimension drawing via tesseract),
//! then prints the area/labor/material report.
//!
//! ## Usage
//!
//! ```text
//! estimate_cli                 # manual entry
//! estimate_cli --image X.png   # OCR the drawing, pre-fill zone 1
//! estimate_cli --text dims.txt # parse already-recognized text
//! ```

use std::io::{self, BufRead, Write};
use std::path::Path;
use std::process::Command;

use estimate_core::calculations::run_pass;
use estimate_core::errors::{EstimateError, EstimateResult};
use estimate_core::format;
use estimate_core::ocr::{parse_dimensions, TextRecognizer};
use estimate_core::session::{AutoFillOutcome, SessionState};
use estimate_core::zone::WIDTH_SLOTS;

/// OCR collaborator backed by the `tesseract` command-line tool.
struct TesseractCli;

impl TextRecognizer for TesseractCli {
    fn recognize(&self, path: &Path, lang: Option<&str>) -> EstimateResult<String> {
        let mut cmd = Command::new("tesseract");
        cmd.arg(path).arg("stdout");
        if let Some(lang) = lang {
            cmd.arg("-l").arg(lang);
        }

        let output = cmd
            .output()
            .map_err(|e| EstimateError::ocr_failed(format!("failed to run tesseract: {}", e)))?;
        if !output.status.success() {
            return Err(EstimateError::ocr_failed(format!(
                "tesseract exited with {}: {}",
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default;
    }

    input.trim().parse().unwrap_or(default)
}

/// Obtain recognized drawing text per the command line, if requested.
///
/// OCR failure is a notice, not a crash: the session stays untouched and
/// the user falls through to manual entry.
fn recognized_text(args: &[String]) -> Option<String> {
    match args {
        [flag, path] if flag == "--image" => {
            match TesseractCli.recognize(Path::new(path), Some("eng")) {
                Ok(text) => Some(text),
                Err(e) => {
                    eprintln!("Notice: {}. Falling back to manual entry.", e);
                    None
                }
            }
        }
        [flag, path] if flag == "--text" => match std::fs::read_to_string(path) {
            Ok(text) => Some(text),
            Err(e) => {
                eprintln!(
                    "Notice: could not read '{}': {}. Falling back to manual entry.",
                    path, e
                );
                None
            }
        },
        [] => None,
        _ => {
            eprintln!("Usage: estimate_cli [--image PATH | --text PATH]");
            None
        }
    }
}

fn main() {
    println!("Plastimate CLI - Finishing Work Estimator");
    println!("=========================================");
    println!();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut session = SessionState::new();

    let mut prefilled = false;
    if let Some(text) = recognized_text(&args) {
        println!("Recognized text:");
        println!("{}", text.trim_end());
        println!();

        let dims = parse_dimensions(&text);
        match session.apply_dimensions(&dims) {
            AutoFillOutcome::Applied {
                widths_filled,
                widths_discarded,
            } => {
                println!(
                    "Extracted H: {:.2} m, W: {:?} m -> filled {} width slot(s) of zone 1",
                    dims.height, dims.widths, widths_filled
                );
                if widths_discarded > 0 {
                    println!("({} extracted width(s) beyond slot 10 discarded)", widths_discarded);
                }
                prefilled = true;
            }
            AutoFillOutcome::NoZones => {
                eprintln!("Notice: no zone to fill; add a zone first.");
            }
        }
        println!();
    }

    if !prefilled {
        session.zones[0].height = prompt_f64("Zone height H (m) [2.4]: ", 2.4);
        for slot in 0..WIDTH_SLOTS {
            let width = prompt_f64(&width_prompt(slot), 0.0);
            if width <= 0.0 {
                break;
            }
            session.zones[0].widths[slot] = width;
        }
    }

    session.labor.coverage_rate =
        prompt_f64("Coverage rate (m2 per labor-day) [15.0]: ", 15.0);

    run_pass(&mut session);

    println!();
    println!("═══════════════════════════════════════");
    println!("  ESTIMATION RESULTS");
    println!("═══════════════════════════════════════");
    println!();
    println!("Total area:  {} m2", format::area(session.aggregate.total_area));
    println!(
        "Labor:       {} labor-day(s) at {} m2/day",
        format::labor_days(session.aggregate.labor_days),
        format::labor_days(session.labor.coverage_rate)
    );
    println!();
    if session.requirements.is_empty() {
        println!("Total area is 0 m2; material quantities are not computed.");
    } else {
        println!("Material requirements:");
        for row in &session.requirements {
            println!(
                "  {:<14} {:>10} m2/{:<3} -> {}",
                row.name,
                row.coverage_text(),
                row.unit_name,
                row.quantity_text()
            );
        }
    }
    println!();
    println!("═══════════════════════════════════════");

    println!();
    println!("JSON Output (for API use):");
    match session.to_json() {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!("{}", json);
            }
        }
    }
}

fn width_prompt(slot: usize) -> String {
    format!("Width W{} (m, 0 to finish) [0.0]: ", slot + 1)
}
