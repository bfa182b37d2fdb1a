//! Export payload for the firmware sketch templates.
//!
//! The core computes and formats values; the actual firmware source
//! syntax lives in external templates keyed by the fields below.

use serde::Serialize;

use crate::interp::expand;
use crate::model::{OutputMode, RoutineSet, Violation};

/// Everything the sketch template needs, keyed the way the templates
/// expect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportPayload {
    /// Servo names, in tab order.
    #[serde(rename = "list_of_names")]
    pub names: Vec<String>,
    /// Delay between playback values, in milliseconds.
    pub interval: u32,
    /// Expanded playback sequences, formatted as readable grids.
    #[serde(rename = "tweenerArrays")]
    pub tweener_arrays: Vec<String>,
    /// Pin of the start button, if one is used.
    pub button: Option<u32>,
    /// `NAME_PIN` identifiers for the generated source.
    #[serde(rename = "pinNames")]
    pub pin_names: Vec<String>,
    /// Pin numbers or I2C channel indices, matching `pin_names`.
    #[serde(rename = "pinNums")]
    pub pin_nums: Vec<u32>,
    /// Which template family to render with.
    #[serde(rename = "outputType")]
    pub output_mode: OutputMode,
}

/// Export rejected because the set failed validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExportError {
    #[error("routine set failed export validation: {}", describe(.0))]
    Validation(Vec<Violation>),
}

fn describe(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Format an expanded sequence as a human-readable grid: ten values per
/// line, every entry right-justified to five columns.
///
/// Purely cosmetic, but kept so generated sketches stay readable.
pub fn pretty_grid(values: &[i32]) -> String {
    let mut out = String::new();
    for (index, num) in values.iter().enumerate() {
        let cell = if (index + 1) % 10 != 0 {
            format!("{num}, ")
        } else {
            format!("{num},\n")
        };
        out.push_str(&format!("{cell:>5}"));
    }
    out
}

/// Expand and format every routine for the sketch template.
///
/// Validates the whole set first and reports every violation at once, so
/// the UI can list all problems in a single dialog.
pub fn render_export_payload(set: &RoutineSet) -> Result<ExportPayload, ExportError> {
    let violations = set.validate_for_export();
    if !violations.is_empty() {
        return Err(ExportError::Validation(violations));
    }

    let millis = set.sample_interval_ms();
    Ok(ExportPayload {
        names: set.routines().iter().map(|r| r.name().to_string()).collect(),
        interval: millis,
        tweener_arrays: set
            .routines()
            .iter()
            .map(|r| pretty_grid(&expand(r.keyframes(), millis)))
            .collect(),
        button: set.button_pin(),
        pin_names: set
            .routines()
            .iter()
            .map(|r| format!("{}_PIN", r.name()))
            .collect(),
        pin_nums: set.routines().iter().map(|r| r.pin()).collect(),
        output_mode: set.output_mode(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{SessionLimits, Violation};

    fn exportable_set() -> RoutineSet {
        let mut set = RoutineSet::generate(2, 2, SessionLimits::default()).unwrap();
        set.assign_pin("Servo1", 9).unwrap();
        set.assign_pin("Servo2", 10).unwrap();
        set
    }

    #[test]
    fn test_pretty_grid_ten_per_line() {
        let values: Vec<i32> = (0..25).collect();
        let grid = pretty_grid(&values);

        let lines: Vec<&str> = grid.split('\n').collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].matches(',').count(), 10);
        assert_eq!(lines[1].matches(',').count(), 10);
        assert_eq!(lines[2].matches(',').count(), 5);

        // Entries are right-justified to five columns.
        assert!(grid.starts_with("  0, "));
    }

    #[test]
    fn test_payload_fields() {
        let set = exportable_set();
        let payload = render_export_payload(&set).unwrap();

        assert_eq!(payload.names, vec!["Servo1", "Servo2"]);
        assert_eq!(payload.pin_names, vec!["Servo1_PIN", "Servo2_PIN"]);
        assert_eq!(payload.pin_nums, vec![9, 10]);
        assert_eq!(payload.interval, 15);
        assert_eq!(payload.button, None);
        assert_eq!(payload.output_mode, OutputMode::I2cBased);

        // 2 seconds = 5 keyframes, expanded to 4 * 33 + 1 values.
        let first = &payload.tweener_arrays[0];
        assert_eq!(first.matches(',').count(), 4 * 33 + 1);
    }

    #[test]
    fn test_payload_serializes_with_template_keys() {
        let set = exportable_set();
        let payload = render_export_payload(&set).unwrap();
        let json = serde_json::to_value(&payload).unwrap();

        assert!(json.get("list_of_names").is_some());
        assert!(json.get("tweenerArrays").is_some());
        assert!(json.get("pinNames").is_some());
        assert!(json.get("pinNums").is_some());
        assert_eq!(json["outputType"], "i2c");
    }

    #[test]
    fn test_export_rejects_invalid_set_with_full_report() {
        // Fresh sets leave every pin at 0: one duplicate-pin violation.
        let set = RoutineSet::generate(2, 2, SessionLimits::default()).unwrap();

        let err = render_export_payload(&set).unwrap_err();
        let ExportError::Validation(violations) = err;
        assert_eq!(violations, vec![Violation::DuplicatePin(0)]);
    }
}
