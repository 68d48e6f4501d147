//! GRBL Status Report Parsing
//!
//! Decodes a raw real-time status line such as
//! `<Idle|MPos:1.000,2.000,0.000|FS:0,0|WCO:0.000,0.000,0.000>` into the
//! [`StatusReport`] broadcast to the panel.
//!
//! GRBL 1.1 reports either `MPos` or `WPos` depending on `$10`, and only
//! sends `WCO` periodically. The missing position is derived from the other
//! one plus the offset; when that is impossible the line is rejected so the
//! panel never sees a partial report.

use jogkit_core::{MachineState, Position, StatusReport};
use thiserror::Error;

/// Reasons a status line cannot become a full report
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StatusParseError {
    /// Not wrapped in `<` and `>`
    #[error("Not a status report: {0}")]
    NotAStatusReport(String),

    /// A position field did not hold three numbers
    #[error("Malformed {field} field: {value}")]
    MalformedField {
        /// Field name, e.g. `MPos`.
        field: &'static str,
        /// Raw field value.
        value: String,
    },

    /// Neither both positions nor one position and `WCO` were present
    #[error("Status report lacks {0}")]
    MissingPosition(&'static str),
}

fn parse_position(field: &'static str, value: &str) -> Result<Position, StatusParseError> {
    let coords: Vec<f64> = value
        .split(',')
        .map(|s| s.trim().parse::<f64>())
        .collect::<Result<_, _>>()
        .map_err(|_| StatusParseError::MalformedField {
            field,
            value: value.to_string(),
        })?;

    if coords.len() < 3 {
        return Err(StatusParseError::MalformedField {
            field,
            value: value.to_string(),
        });
    }

    Ok(Position::new(coords[0], coords[1], coords[2]))
}

/// Parse a GRBL status line into a full status report
///
/// Extra axes beyond Z and unrelated fields (`FS`, `Bf`, `Ov`, `Pn`, ...)
/// are ignored.
pub fn parse_status_line(line: &str) -> Result<StatusReport, StatusParseError> {
    let trimmed = line.trim();
    let inner = trimmed
        .strip_prefix('<')
        .and_then(|s| s.strip_suffix('>'))
        .ok_or_else(|| StatusParseError::NotAStatusReport(trimmed.to_string()))?;

    let mut fields = inner.split('|');
    let state = MachineState::from_grbl_state(fields.next().unwrap_or_default());

    let mut machine = None;
    let mut work = None;
    let mut offset = None;

    for field in fields {
        if let Some(value) = field.strip_prefix("MPos:") {
            machine = Some(parse_position("MPos", value)?);
        } else if let Some(value) = field.strip_prefix("WPos:") {
            work = Some(parse_position("WPos", value)?);
        } else if let Some(value) = field.strip_prefix("WCO:") {
            offset = Some(parse_position("WCO", value)?);
        }
    }

    let (machine_position, work_position) = match (machine, work, offset) {
        (Some(m), Some(w), _) => (m, w),
        (Some(m), None, Some(wco)) => (m, m.subtract(&wco)),
        (None, Some(w), Some(wco)) => (w.add(&wco), w),
        (Some(_), None, None) => return Err(StatusParseError::MissingPosition("WPos or WCO")),
        (None, Some(_), None) => return Err(StatusParseError::MissingPosition("MPos or WCO")),
        (None, None, _) => return Err(StatusParseError::MissingPosition("MPos and WPos")),
    };

    tracing::trace!("Parsed status {} from {}", state, trimmed);
    Ok(StatusReport::new(state, machine_position, work_position))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_both_positions() {
        let report =
            parse_status_line("<Run|MPos:10.000,5.000,2.500|WPos:9.000,4.000,2.500|F:500>")
                .expect("valid");
        assert_eq!(report.active_state, MachineState::Run);
        assert_eq!(report.machine_position, Position::new(10.0, 5.0, 2.5));
        assert_eq!(report.work_position, Position::new(9.0, 4.0, 2.5));
    }

    #[test]
    fn test_work_position_from_offset() {
        let report =
            parse_status_line("<Idle|MPos:10.000,20.000,5.000|FS:0,0|WCO:1.000,2.000,3.000>")
                .expect("valid");
        assert_eq!(report.work_position, Position::new(9.0, 18.0, 2.0));
    }

    #[test]
    fn test_machine_position_from_offset() {
        let report = parse_status_line("<Hold:0|WPos:1.000,1.000,1.000|WCO:1.000,2.000,3.000>")
            .expect("valid");
        assert_eq!(report.active_state, MachineState::Hold);
        assert_eq!(report.machine_position, Position::new(2.0, 3.0, 4.0));
    }

    #[test]
    fn test_extra_axes_ignored() {
        let report =
            parse_status_line("<Idle|MPos:1.0,2.0,3.0,90.0|WPos:1.0,2.0,3.0,90.0>").expect("valid");
        assert_eq!(report.machine_position, Position::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_partial_report_rejected() {
        assert_eq!(
            parse_status_line("<Idle|MPos:0.000,0.000,0.000|FS:0,0>"),
            Err(StatusParseError::MissingPosition("WPos or WCO"))
        );
        assert_eq!(
            parse_status_line("<Idle|FS:0,0>"),
            Err(StatusParseError::MissingPosition("MPos and WPos"))
        );
    }

    #[test]
    fn test_malformed_lines_rejected() {
        assert!(matches!(
            parse_status_line("ok"),
            Err(StatusParseError::NotAStatusReport(_))
        ));
        assert!(matches!(
            parse_status_line("<Idle|MPos:1.0,abc,3.0|WPos:0,0,0>"),
            Err(StatusParseError::MalformedField { field: "MPos", .. })
        ));
        assert!(matches!(
            parse_status_line("<Idle|MPos:1.0,2.0|WPos:0,0,0>"),
            Err(StatusParseError::MalformedField { field: "MPos", .. })
        ));
    }
}
