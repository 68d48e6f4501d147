//! Machine status mirror
//!
//! Holds the last status broadcast and derives display strings from it.
//! The display unit is passed in on every call and never stored here.

use jogkit_core::{format_position, split_display, Axis, MachineState, MeasurementSystem};
use jogkit_core::{Position, StatusReport};
use serde::Serialize;

/// Display strings for one position
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PositionDisplay {
    pub x: String,
    pub y: String,
    pub z: String,
}

impl PositionDisplay {
    fn new(position: &Position, system: MeasurementSystem) -> Self {
        Self {
            x: format_position(position.x, system),
            y: format_position(position.y, system),
            z: format_position(position.z, system),
        }
    }

    /// Display string for one axis
    pub fn axis(&self, axis: Axis) -> &str {
        match axis {
            Axis::X => &self.x,
            Axis::Y => &self.y,
            Axis::Z => &self.z,
        }
    }

    /// Integer and fractional parts for one axis, rendered separately
    pub fn split(&self, axis: Axis) -> (&str, &str) {
        split_display(self.axis(axis))
    }
}

/// Everything the position readout shows
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusDisplay {
    pub state: MachineState,
    pub unit: MeasurementSystem,
    pub machine: PositionDisplay,
    pub work: PositionDisplay,
}

/// Last known controller state and positions
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MachineStatus {
    active_state: MachineState,
    machine_position: Position,
    work_position: Position,
}

impl MachineStatus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace state and both positions with the broadcast values
    pub fn apply_status_update(&mut self, report: StatusReport) {
        if report.active_state != self.active_state {
            tracing::debug!("Machine state {} -> {}", self.active_state, report.active_state);
        }
        self.active_state = report.active_state;
        self.machine_position = report.machine_position;
        self.work_position = report.work_position;
    }

    pub fn active_state(&self) -> MachineState {
        self.active_state
    }

    pub fn machine_position(&self) -> Position {
        self.machine_position
    }

    pub fn work_position(&self) -> Position {
        self.work_position
    }

    /// Display strings for the given unit
    pub fn current_display(&self, system: MeasurementSystem) -> StatusDisplay {
        StatusDisplay {
            state: self.active_state,
            unit: system,
            machine: PositionDisplay::new(&self.machine_position, system),
            work: PositionDisplay::new(&self.work_position, system),
        }
    }
}
