//! Axis identifiers and ordered axis subsets

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Axis identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    /// X-axis (typically left-right).
    X,
    /// Y-axis (typically front-back).
    Y,
    /// Z-axis (typically up-down).
    Z,
}

impl Axis {
    /// All axes in command order
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// G-code word letter for this axis
    pub fn letter(self) -> char {
        match self {
            Axis::X => 'X',
            Axis::Y => 'Y',
            Axis::Z => 'Z',
        }
    }

    fn bit(self) -> u8 {
        match self {
            Axis::X => 0b001,
            Axis::Y => 0b010,
            Axis::Z => 0b100,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

impl TryFrom<char> for Axis {
    type Error = String;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_uppercase() {
            'X' => Ok(Axis::X),
            'Y' => Ok(Axis::Y),
            'Z' => Ok(Axis::Z),
            _ => Err(format!("Unknown axis: {}", c)),
        }
    }
}

/// Subset of axes
///
/// Iteration always yields X, then Y, then Z regardless of the order in
/// which axes were added.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct AxisSet(u8);

impl AxisSet {
    /// No axes
    pub const fn empty() -> Self {
        Self(0)
    }

    /// X, Y and Z
    pub const fn all() -> Self {
        Self(0b111)
    }

    /// A single axis
    pub fn only(axis: Axis) -> Self {
        Self(axis.bit())
    }

    /// Builder method adding an axis
    pub fn with(mut self, axis: Axis) -> Self {
        self.insert(axis);
        self
    }

    /// Add an axis
    pub fn insert(&mut self, axis: Axis) {
        self.0 |= axis.bit();
    }

    /// Check membership
    pub fn contains(&self, axis: Axis) -> bool {
        self.0 & axis.bit() != 0
    }

    /// Check if no axis is selected
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Number of selected axes
    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Selected axes in X, Y, Z order
    pub fn iter(&self) -> impl Iterator<Item = Axis> + '_ {
        Axis::ALL.into_iter().filter(move |axis| self.contains(*axis))
    }
}

impl FromIterator<Axis> for AxisSet {
    fn from_iter<I: IntoIterator<Item = Axis>>(iter: I) -> Self {
        iter.into_iter().fold(Self::empty(), AxisSet::with)
    }
}

impl From<Axis> for AxisSet {
    fn from(axis: Axis) -> Self {
        Self::only(axis)
    }
}

impl FromStr for AxisSet {
    type Err = String;

    /// Parse `"all"` or a run of axis letters such as `"xz"`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("all") {
            return Ok(Self::all());
        }
        if s.is_empty() {
            return Err("No axes given".to_string());
        }
        s.chars().map(Axis::try_from).collect()
    }
}

impl fmt::Display for AxisSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for axis in self.iter() {
            write!(f, "{}", axis)?;
        }
        Ok(())
    }
}

/// Jog direction along an axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JogDirection {
    /// Toward increasing coordinates
    Positive,
    /// Toward decreasing coordinates
    Negative,
}

impl JogDirection {
    /// Apply this direction to an unsigned distance
    pub fn apply(self, distance: f64) -> f64 {
        match self {
            JogDirection::Positive => distance,
            JogDirection::Negative => -distance,
        }
    }
}

impl TryFrom<char> for JogDirection {
    type Error = String;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            '+' => Ok(JogDirection::Positive),
            '-' => Ok(JogDirection::Negative),
            _ => Err(format!("Unknown jog direction: {}", c)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iteration_order_is_fixed() {
        let set: AxisSet = [Axis::Z, Axis::X].into_iter().collect();
        let axes: Vec<Axis> = set.iter().collect();
        assert_eq!(axes, vec![Axis::X, Axis::Z]);
        assert_eq!(set.to_string(), "XZ");
    }

    #[test]
    fn test_parse_axis_sets() {
        assert_eq!("all".parse::<AxisSet>(), Ok(AxisSet::all()));
        assert_eq!("y".parse::<AxisSet>(), Ok(AxisSet::only(Axis::Y)));
        assert_eq!("zyx".parse::<AxisSet>(), Ok(AxisSet::all()));
        assert!("xw".parse::<AxisSet>().is_err());
        assert!("".parse::<AxisSet>().is_err());
    }

    #[test]
    fn test_membership() {
        let set = AxisSet::empty().with(Axis::Y);
        assert!(set.contains(Axis::Y));
        assert!(!set.contains(Axis::X));
        assert_eq!(set.len(), 1);
        assert!(AxisSet::empty().is_empty());
    }

    #[test]
    fn test_direction_sign() {
        assert_eq!(JogDirection::Positive.apply(2.5), 2.5);
        assert_eq!(JogDirection::Negative.apply(2.5), -2.5);
        assert_eq!(JogDirection::try_from('-'), Ok(JogDirection::Negative));
        assert!(JogDirection::try_from('x').is_err());
    }
}
