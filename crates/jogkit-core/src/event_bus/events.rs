//! Event type definitions for the event bus.
//!
//! Events are cloneable and serializable so they can be logged or replayed.

use serde::{Deserialize, Serialize};

use crate::data::StatusReport;

/// Root event enum for all panel events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AppEvent {
    /// Active port changes
    Connection(ConnectionEvent),
    /// Machine status broadcasts
    Machine(MachineEvent),
}

impl AppEvent {
    /// Get the category of this event
    pub fn category(&self) -> EventCategory {
        match self {
            AppEvent::Connection(_) => EventCategory::Connection,
            AppEvent::Machine(_) => EventCategory::Machine,
        }
    }

    /// Get a short description of this event for logging
    pub fn description(&self) -> String {
        match self {
            AppEvent::Connection(e) => e.description(),
            AppEvent::Machine(e) => e.description(),
        }
    }

    /// Port change event; `None` or an empty name means no device
    pub fn port_changed(port: Option<impl Into<String>>) -> Self {
        AppEvent::Connection(ConnectionEvent::PortChanged {
            port: port.map(Into::into),
        })
    }

    /// Status broadcast event
    pub fn status(report: StatusReport) -> Self {
        AppEvent::Machine(MachineEvent::Status(report))
    }
}

/// Event category for filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventCategory {
    /// Connection events.
    Connection,
    /// Machine state and status events.
    Machine,
}

impl std::fmt::Display for EventCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventCategory::Connection => write!(f, "Connection"),
            EventCategory::Machine => write!(f, "Machine"),
        }
    }
}

/// Connection-related events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ConnectionEvent {
    /// The active port was replaced.
    PortChanged {
        /// New port, or `None` when the device went away.
        port: Option<String>,
    },
}

impl ConnectionEvent {
    fn description(&self) -> String {
        match self {
            ConnectionEvent::PortChanged { port: Some(port) } if !port.is_empty() => {
                format!("Active port: {}", port)
            }
            ConnectionEvent::PortChanged { .. } => "No active port".to_string(),
        }
    }
}

/// Machine-related events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MachineEvent {
    /// A full status broadcast.
    Status(StatusReport),
}

impl MachineEvent {
    fn description(&self) -> String {
        match self {
            MachineEvent::Status(report) => format!(
                "Status {} MPos {} WPos {}",
                report.active_state, report.machine_position, report.work_position
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{MachineState, Position};

    #[test]
    fn test_categories() {
        assert_eq!(
            AppEvent::port_changed(Some("COM3")).category(),
            EventCategory::Connection
        );
        assert_eq!(
            AppEvent::status(StatusReport::default()).category(),
            EventCategory::Machine
        );
    }

    #[test]
    fn test_descriptions() {
        assert_eq!(
            AppEvent::port_changed(Some("/dev/ttyACM0")).description(),
            "Active port: /dev/ttyACM0"
        );
        assert_eq!(
            AppEvent::port_changed(None::<String>).description(),
            "No active port"
        );
        assert_eq!(
            AppEvent::port_changed(Some("")).description(),
            "No active port"
        );

        let report = StatusReport::new(
            MachineState::Hold,
            Position::new(1.0, 2.0, 3.0),
            Position::default(),
        );
        assert_eq!(
            AppEvent::status(report).description(),
            "Status Hold MPos X:1.000 Y:2.000 Z:3.000 WPos X:0.000 Y:0.000 Z:0.000"
        );
    }
}
