//! Axes panel orchestrator
//!
//! Owns the jog parameters, display unit and collapse flag, mirrors the
//! active port and machine status from the event bus, and turns operator
//! intents into command sequences handed to the transport.
//!
//! ```
//! use std::sync::Arc;
//! use jogkit_communication::RecordingTransport;
//! use jogkit_core::{AppEvent, Axis, EventBus, JogDirection};
//! use jogkit_settings::Config;
//! use jogkit_ui::{AxesPanel, IntentOutcome, PanelIntent};
//!
//! let bus = Arc::new(EventBus::new());
//! let transport = RecordingTransport::new();
//! let mut panel = AxesPanel::attach(&Config::default(), transport.clone(), &bus).unwrap();
//!
//! bus.publish(AppEvent::port_changed(Some("/dev/ttyUSB0"))).unwrap();
//! let outcome = panel
//!     .dispatch(PanelIntent::Jog { axis: Axis::X, direction: JogDirection::Positive })
//!     .unwrap();
//!
//! assert!(matches!(outcome, IntentOutcome::Sent(_)));
//! assert_eq!(transport.sent()[0].payload, "G91\nG1 F250 X1\nG90");
//! ```

use super::status::{MachineStatus, StatusDisplay};
use jogkit_communication::{command_creator, CommandSequence, Transport};
use jogkit_core::{
    thread_safe_rw, AppEvent, Axis, AxisSet, BoundedParameter, ConnectionEvent, EventBus,
    EventCategory, EventFilter, JogDirection, MachineEvent, MeasurementSystem, ParameterError,
    StatusReport, Subscription, ThreadSafeRw,
};
use jogkit_settings::Config;
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;

/// Edit applied to a bounded parameter
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParameterAction {
    /// Typed value, clamped into range
    Set(f64),
    Increase,
    Decrease,
    Reset,
}

/// An operator action on the panel
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PanelIntent {
    /// Rapid to work zero on the given axes
    GoToZero(AxisSet),
    /// Make the current position work zero
    ZeroOut(AxisSet),
    /// Clear the work offset
    UnZeroOut(AxisSet),
    /// Relative move by the current distance at the current feed rate
    Jog {
        axis: Axis,
        direction: JogDirection,
    },
    FeedRate(ParameterAction),
    Distance(ParameterAction),
    /// Switch the display unit; the machine's unit mode is untouched
    ToggleUnit,
    /// Align the machine's G20/G21 mode with the display unit
    SyncMachineUnits,
    ToggleCollapse,
    HomingSequence,
}

/// What handling an intent did
#[derive(Debug, Clone, PartialEq)]
pub enum IntentOutcome {
    /// Handed to the transport
    Sent(CommandSequence),
    /// Composed but dropped, no active port
    Suppressed(CommandSequence),
    /// New value of the edited parameter
    ParameterChanged(f64),
    UnitChanged(MeasurementSystem),
    CollapseChanged(bool),
    /// Nothing to send
    Idle,
}

/// Feed rate and distance the next jog will use
///
/// Kept current by observers on the panel's bounded parameters, so other
/// threads can read it without borrowing the panel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct JogParameters {
    /// mm/min
    pub feed_rate: f64,
    /// mm
    pub distance: f64,
}

/// Axes panel errors
#[derive(Error, Debug)]
pub enum PanelError {
    /// The operation has no implementation yet
    #[error("{operation} is not supported")]
    NotSupported {
        /// Human-readable operation name.
        operation: &'static str,
    },

    /// The transport rejected a payload
    #[error("Transport error: {0}")]
    Transport(#[from] jogkit_core::Error),

    /// A configured parameter spec is invalid
    #[error("Parameter error: {0}")]
    Parameter(#[from] ParameterError),
}

/// Axes panel state
pub struct AxesPanel<T: Transport> {
    transport: T,
    port: ThreadSafeRw<String>,
    status: ThreadSafeRw<MachineStatus>,
    jog: ThreadSafeRw<JogParameters>,
    feed_rate: BoundedParameter,
    distance: BoundedParameter,
    unit: MeasurementSystem,
    collapsed: bool,
    _subscription: Subscription,
}

impl<T: Transport> AxesPanel<T> {
    /// Build the panel and subscribe to port and status events on `bus`
    ///
    /// The subscription lives as long as the panel.
    pub fn attach(config: &Config, transport: T, bus: &Arc<EventBus>) -> Result<Self, PanelError> {
        let mut feed_rate = BoundedParameter::new("feed_rate", config.jog.feed_rate)?;
        let mut distance = BoundedParameter::new("distance", config.jog.distance)?;

        let jog = thread_safe_rw(JogParameters {
            feed_rate: feed_rate.value(),
            distance: distance.value(),
        });
        {
            let jog = Arc::clone(&jog);
            feed_rate.on_change(move |value| {
                let mut next = jog.write();
                next.feed_rate = value;
                tracing::debug!("Next jog: F{} by {}", next.feed_rate, next.distance);
            });
        }
        {
            let jog = Arc::clone(&jog);
            distance.on_change(move |value| {
                let mut next = jog.write();
                next.distance = value;
                tracing::debug!("Next jog: F{} by {}", next.feed_rate, next.distance);
            });
        }

        let port = thread_safe_rw(String::new());
        let status = thread_safe_rw(MachineStatus::new());

        let subscription = {
            let port = Arc::clone(&port);
            let status = Arc::clone(&status);
            bus.subscribe_scoped(
                EventFilter::Categories(vec![EventCategory::Connection, EventCategory::Machine]),
                move |event| match event {
                    AppEvent::Connection(ConnectionEvent::PortChanged { port: next }) => {
                        let next = next.unwrap_or_default();
                        tracing::info!("Axes panel port: {:?}", next);
                        *port.write() = next;
                    }
                    AppEvent::Machine(MachineEvent::Status(report)) => {
                        status.write().apply_status_update(report);
                    }
                },
            )
        };
        tracing::debug!("Axes panel attached as {}", subscription.id());

        Ok(Self {
            transport,
            port,
            status,
            jog,
            feed_rate,
            distance,
            unit: config.ui.measurement_system,
            collapsed: config.ui.start_collapsed,
            _subscription: subscription,
        })
    }

    /// Handle one operator intent
    pub fn dispatch(&mut self, intent: PanelIntent) -> Result<IntentOutcome, PanelError> {
        tracing::debug!("Intent {:?}", intent);
        match intent {
            PanelIntent::GoToZero(axes) => self.send(command_creator::go_to_zero(axes)),
            PanelIntent::ZeroOut(axes) => self.send(command_creator::zero_out(axes)),
            PanelIntent::UnZeroOut(axes) => self.send(command_creator::un_zero_out(axes)),
            PanelIntent::Jog { axis, direction } => {
                let next = self.jog_parameters();
                let seq =
                    command_creator::jog(axis, direction, next.feed_rate, next.distance);
                self.send(seq)
            }
            PanelIntent::FeedRate(action) => Ok(IntentOutcome::ParameterChanged(apply_action(
                &mut self.feed_rate,
                action,
            ))),
            PanelIntent::Distance(action) => Ok(IntentOutcome::ParameterChanged(apply_action(
                &mut self.distance,
                action,
            ))),
            PanelIntent::ToggleUnit => {
                self.unit = self.unit.toggled();
                tracing::warn!(
                    "Display unit is now {}; machine unit mode unchanged",
                    self.unit
                );
                Ok(IntentOutcome::UnitChanged(self.unit))
            }
            PanelIntent::SyncMachineUnits => Err(PanelError::NotSupported {
                operation: "Machine unit sync",
            }),
            PanelIntent::ToggleCollapse => {
                self.collapsed = !self.collapsed;
                Ok(IntentOutcome::CollapseChanged(self.collapsed))
            }
            PanelIntent::HomingSequence => Err(PanelError::NotSupported {
                operation: "Homing sequence",
            }),
        }
    }

    fn send(&mut self, seq: CommandSequence) -> Result<IntentOutcome, PanelError> {
        if seq.is_empty() {
            return Ok(IntentOutcome::Idle);
        }

        let port = self.port.read().clone();
        if port.is_empty() {
            tracing::info!("Not connected; dropping {}", seq);
            return Ok(IntentOutcome::Suppressed(seq));
        }

        if let Err(e) = self.transport.write_line(&port, &seq.to_payload()) {
            tracing::error!("Failed to send {} to {}: {}", seq, port, e);
            return Err(e.into());
        }
        tracing::info!("Sent {} to {}", seq, port);
        Ok(IntentOutcome::Sent(seq))
    }

    /// Apply a status broadcast without going through the bus
    pub fn apply_status(&self, report: StatusReport) {
        self.status.write().apply_status_update(report);
    }

    /// Replace the active port without going through the bus
    pub fn set_port(&self, port: impl Into<String>) {
        *self.port.write() = port.into();
    }

    /// Active port, empty when disconnected
    pub fn port(&self) -> String {
        self.port.read().clone()
    }

    pub fn is_connected(&self) -> bool {
        !self.port.read().is_empty()
    }

    pub fn machine_status(&self) -> MachineStatus {
        *self.status.read()
    }

    /// Readout in the current display unit
    pub fn display(&self) -> StatusDisplay {
        self.status.read().current_display(self.unit)
    }

    /// Parameters the next jog will use
    pub fn jog_parameters(&self) -> JogParameters {
        *self.jog.read()
    }

    pub fn feed_rate(&self) -> f64 {
        self.feed_rate.value()
    }

    pub fn distance(&self) -> f64 {
        self.distance.value()
    }

    pub fn unit(&self) -> MeasurementSystem {
        self.unit
    }

    pub fn is_collapsed(&self) -> bool {
        self.collapsed
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }
}

impl<T: Transport> std::fmt::Debug for AxesPanel<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AxesPanel")
            .field("port", &*self.port.read())
            .field("feed_rate", &self.feed_rate)
            .field("distance", &self.distance)
            .field("unit", &self.unit)
            .field("collapsed", &self.collapsed)
            .finish()
    }
}

fn apply_action(parameter: &mut BoundedParameter, action: ParameterAction) -> f64 {
    match action {
        ParameterAction::Set(value) => parameter.set(value),
        ParameterAction::Increase => parameter.increase(),
        ParameterAction::Decrease => parameter.decrease(),
        ParameterAction::Reset => parameter.reset(),
    }
}
