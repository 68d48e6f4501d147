//! Data models for positions, machine state and status reports
//!
//! This module provides:
//! - Three-axis positions in raw machine millimeters
//! - The machine controller's reported operating state
//! - The status report payload broadcast by the machine-status collaborator
//! - Axis identifiers and ordered axis subsets used when composing commands

mod axis;

pub use axis::{Axis, AxisSet, JogDirection};

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Position in machine millimeters
///
/// Axes missing from an inbound payload, or sent as `null`, decode as zero.
/// Values may arrive as JSON numbers or as numeric strings such as `"12.500"`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    /// X-axis position
    #[serde(default, deserialize_with = "deserialize_axis")]
    pub x: f64,
    /// Y-axis position
    #[serde(default, deserialize_with = "deserialize_axis")]
    pub y: f64,
    /// Z-axis position
    #[serde(default, deserialize_with = "deserialize_axis")]
    pub z: f64,
}

impl Position {
    /// Create a new position with X, Y, Z coordinates
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Value on a single axis
    pub fn axis(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }

    /// Add another position (component-wise)
    pub fn add(&self, other: &Position) -> Self {
        Self::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }

    /// Subtract another position (component-wise)
    pub fn subtract(&self, other: &Position) -> Self {
        Self::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "X:{:.3} Y:{:.3} Z:{:.3}", self.x, self.y, self.z)
    }
}

fn deserialize_axis<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawAxis {
        Number(f64),
        Text(String),
    }

    match Option::<RawAxis>::deserialize(deserializer)? {
        None => Ok(0.0),
        Some(RawAxis::Number(value)) => Ok(value),
        Some(RawAxis::Text(text)) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                return Ok(0.0);
            }
            trimmed
                .parse::<f64>()
                .map_err(|_| serde::de::Error::custom(format!("invalid axis value: {:?}", text)))
        }
    }
}

/// Operating state reported by the machine controller
///
/// A passive mirror of the controller; the panel owns no transition logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MachineState {
    /// Connected and idle, ready for commands
    #[default]
    Idle,
    /// Executing motion
    Run,
    /// Feed hold
    Hold,
    /// Safety door open
    Door,
    /// Homing cycle in progress
    Home,
    /// Alarm condition
    Alarm,
    /// Check (dry-run) mode
    Check,
    /// Any state string outside the known set
    Unknown,
}

impl MachineState {
    /// Parse a GRBL state token, ignoring a sub-state suffix such as `Hold:0`
    pub fn from_grbl_state(state: &str) -> Self {
        let name = state.split(':').next().unwrap_or_default().trim();
        match name {
            "Idle" => Self::Idle,
            "Run" => Self::Run,
            "Hold" => Self::Hold,
            "Door" => Self::Door,
            "Home" => Self::Home,
            "Alarm" => Self::Alarm,
            "Check" => Self::Check,
            _ => Self::Unknown,
        }
    }

    /// Check if this state indicates an alarm
    pub fn is_alarm(&self) -> bool {
        matches!(self, Self::Alarm)
    }
}

impl FromStr for MachineState {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_grbl_state(s))
    }
}

impl fmt::Display for MachineState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "Idle"),
            Self::Run => write!(f, "Run"),
            Self::Hold => write!(f, "Hold"),
            Self::Door => write!(f, "Door"),
            Self::Home => write!(f, "Home"),
            Self::Alarm => write!(f, "Alarm"),
            Self::Check => write!(f, "Check"),
            Self::Unknown => write!(f, "Unknown"),
        }
    }
}

fn deserialize_state<'de, D>(deserializer: D) -> Result<MachineState, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(MachineState::from_grbl_state(&raw))
}

/// Status broadcast from the machine-status collaborator
///
/// All three fields are required on the wire. A payload that omits one
/// fails to decode instead of being merged into the previous status.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusReport {
    /// Reported operating state
    #[serde(deserialize_with = "deserialize_state")]
    pub active_state: MachineState,
    /// Position in the machine's own frame
    #[serde(rename = "machinePos")]
    pub machine_position: Position,
    /// Position relative to the work origin
    #[serde(rename = "workingPos")]
    pub work_position: Position,
}

impl StatusReport {
    /// Create a status report
    pub fn new(
        active_state: MachineState,
        machine_position: Position,
        work_position: Position,
    ) -> Self {
        Self {
            active_state,
            machine_position,
            work_position,
        }
    }

    /// Decode a JSON status payload
    pub fn from_json(payload: &str) -> serde_json::Result<Self> {
        serde_json::from_str(payload)
    }
}
