//! GRBL Command Creator
//!
//! Pure functions that turn panel state into the exact G-code lines sent to
//! the controller. Nothing here performs I/O or validates ranges; feed rates
//! and distances arrive already clamped by their bounded parameters.

use jogkit_core::{Axis, AxisSet, JogDirection};
use std::fmt;

/// Rapid move to the work origin
pub const GO_TO_ZERO: &str = "G0";
/// Set the current position as the work origin
pub const ZERO_OUT: &str = "G92";
/// Clear the G92 offset
pub const UN_ZERO_OUT: &str = "G92.1";
/// Relative positioning mode
pub const RELATIVE_MODE: &str = "G91";
/// Absolute positioning mode
pub const ABSOLUTE_MODE: &str = "G90";
/// Linear feed move
pub const LINEAR_MOVE: &str = "G1";

/// Ordered list of command lines, transmitted verbatim
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandSequence(Vec<String>);

impl CommandSequence {
    /// Create an empty sequence
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Lines in send order
    pub fn lines(&self) -> &[String] {
        &self.0
    }

    /// Take the lines
    pub fn into_lines(self) -> Vec<String> {
        self.0
    }

    /// Check if there is nothing to send
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of lines
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Newline-joined transmission unit
    pub fn to_payload(&self) -> String {
        self.0.join("\n")
    }
}

impl From<Vec<String>> for CommandSequence {
    fn from(lines: Vec<String>) -> Self {
        Self(lines)
    }
}

impl fmt::Display for CommandSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join(" | "))
    }
}

impl PartialEq<[&str]> for CommandSequence {
    fn eq(&self, other: &[&str]) -> bool {
        self.0.len() == other.len() && self.0.iter().zip(other).all(|(a, b)| a == b)
    }
}

impl<const N: usize> PartialEq<[&str; N]> for CommandSequence {
    fn eq(&self, other: &[&str; N]) -> bool {
        self == &other[..]
    }
}

/// Format a number the way the controller expects it in a word
///
/// Shortest round-trip decimal with no exponent: `250.0` becomes `250`,
/// `2.5` stays `2.5`.
pub fn format_number(value: f64) -> String {
    format!("{}", value)
}

fn axis_zero_command(code: &str, axes: AxisSet) -> CommandSequence {
    if axes.is_empty() {
        return CommandSequence::new();
    }
    let terms: Vec<String> = axes.iter().map(|axis| format!("{}0", axis.letter())).collect();
    CommandSequence(vec![format!("{} {}", code, terms.join(" "))])
}

/// Rapid move to zero on the given axes, e.g. `G0 X0 Y0 Z0`
pub fn go_to_zero(axes: AxisSet) -> CommandSequence {
    axis_zero_command(GO_TO_ZERO, axes)
}

/// Redefine the current position as zero on the given axes, e.g. `G92 X0`
///
/// The machine does not move.
pub fn zero_out(axes: AxisSet) -> CommandSequence {
    axis_zero_command(ZERO_OUT, axes)
}

/// Clear the offset set by [`zero_out`], e.g. `G92.1 X0`
pub fn un_zero_out(axes: AxisSet) -> CommandSequence {
    axis_zero_command(UN_ZERO_OUT, axes)
}

/// Relative jog on one axis
///
/// Always the three lines `G91`, `G1 F<feed> <axis><distance>`, `G90`, so
/// the controller is back in absolute mode once the jog is queued.
pub fn jog(
    axis: Axis,
    direction: JogDirection,
    feed_rate: f64,
    distance: f64,
) -> CommandSequence {
    let motion = format!(
        "{} F{} {}{}",
        LINEAR_MOVE,
        format_number(feed_rate),
        axis.letter(),
        format_number(direction.apply(distance))
    );
    CommandSequence(vec![
        RELATIVE_MODE.to_string(),
        motion,
        ABSOLUTE_MODE.to_string(),
    ])
}
