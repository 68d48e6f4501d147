//! Unit conversion utilities
//!
//! Converts raw machine positions (always millimeters) into display strings
//! in the active measurement system. Conversion is display-only: stored
//! values, feed rates and jog distances stay in millimeters.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Millimeters per inch
pub const MM_PER_INCH: f64 = 25.4;

/// Fractional digits shown for metric positions
pub const METRIC_PRECISION: usize = 3;

/// Fractional digits shown for imperial positions
pub const IMPERIAL_PRECISION: usize = 4;

/// Measurement system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeasurementSystem {
    /// Metric system (mm)
    #[default]
    Metric,
    /// Imperial system (inches)
    Imperial,
}

impl MeasurementSystem {
    /// The other system
    pub fn toggled(self) -> Self {
        match self {
            Self::Metric => Self::Imperial,
            Self::Imperial => Self::Metric,
        }
    }

    /// Fractional digits used when displaying a position
    pub fn precision(self) -> usize {
        match self {
            Self::Metric => METRIC_PRECISION,
            Self::Imperial => IMPERIAL_PRECISION,
        }
    }

    /// Divisor applied to a millimeter value before display
    pub fn divisor(self) -> f64 {
        match self {
            Self::Metric => 1.0,
            Self::Imperial => MM_PER_INCH,
        }
    }
}

impl fmt::Display for MeasurementSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Metric => write!(f, "Metric"),
            Self::Imperial => write!(f, "Imperial"),
        }
    }
}

impl FromStr for MeasurementSystem {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "metric" | "mm" => Ok(Self::Metric),
            "imperial" | "inch" | "in" => Ok(Self::Imperial),
            _ => Err(format!("Unknown measurement system: {}", s)),
        }
    }
}

/// Format a raw machine position for display
///
/// * `value_mm` - Position in millimeters as reported by the machine
/// * `system` - Target measurement system
///
/// Metric keeps three fractional digits, imperial divides by 25.4 and keeps
/// four. Non-finite input renders as zero.
pub fn format_position(value_mm: f64, system: MeasurementSystem) -> String {
    let value = if value_mm.is_finite() {
        value_mm / system.divisor()
    } else {
        0.0
    };
    format!("{:.*}", system.precision(), value)
}

/// Split a fixed-point display string into integer and fractional parts
///
/// The integer part keeps any leading sign. A string without a decimal
/// point yields an empty fraction.
pub fn split_display(display: &str) -> (&str, &str) {
    match display.split_once('.') {
        Some((integer, fraction)) => (integer, fraction),
        None => (display, ""),
    }
}

/// Get the unit label for the given system ("mm" or "in")
pub fn unit_label(system: MeasurementSystem) -> &'static str {
    match system {
        MeasurementSystem::Metric => "mm",
        MeasurementSystem::Imperial => "in",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metric_formatting() {
        assert_eq!(format_position(10.5, MeasurementSystem::Metric), "10.500");
        assert_eq!(format_position(0.0, MeasurementSystem::Metric), "0.000");
        assert_eq!(format_position(1.23456, MeasurementSystem::Metric), "1.235");
    }

    #[test]
    fn test_imperial_formatting() {
        // 1 inch = 25.4 mm
        assert_eq!(format_position(25.4, MeasurementSystem::Imperial), "1.0000");
        assert_eq!(format_position(12.7, MeasurementSystem::Imperial), "0.5000");
        assert_eq!(format_position(0.0, MeasurementSystem::Imperial), "0.0000");
    }

    #[test]
    fn test_negative_values() {
        assert_eq!(format_position(-10.5, MeasurementSystem::Metric), "-10.500");
        assert_eq!(format_position(-25.4, MeasurementSystem::Imperial), "-1.0000");

        let (integer, fraction) = split_display("-10.500");
        assert_eq!(integer, "-10");
        assert_eq!(fraction, "500");
    }

    #[test]
    fn test_large_values_stay_fixed_point() {
        let shown = format_position(1.0e12, MeasurementSystem::Metric);
        assert_eq!(shown, "1000000000000.000");
        assert!(!shown.contains('e'));
    }

    #[test]
    fn test_non_finite_renders_zero() {
        assert_eq!(format_position(f64::NAN, MeasurementSystem::Metric), "0.000");
        assert_eq!(
            format_position(f64::INFINITY, MeasurementSystem::Imperial),
            "0.0000"
        );
    }

    #[test]
    fn test_split_without_fraction() {
        assert_eq!(split_display("42"), ("42", ""));
    }

    #[test]
    fn test_toggle_and_parse() {
        assert_eq!(
            MeasurementSystem::Metric.toggled(),
            MeasurementSystem::Imperial
        );
        assert_eq!(
            MeasurementSystem::Imperial.toggled(),
            MeasurementSystem::Metric
        );
        assert_eq!("mm".parse(), Ok(MeasurementSystem::Metric));
        assert_eq!(" Inch ".parse(), Ok(MeasurementSystem::Imperial));
        assert!("furlong".parse::<MeasurementSystem>().is_err());
    }

    #[test]
    fn test_unit_labels() {
        assert_eq!(unit_label(MeasurementSystem::Metric), "mm");
        assert_eq!(unit_label(MeasurementSystem::Imperial), "in");
    }
}
