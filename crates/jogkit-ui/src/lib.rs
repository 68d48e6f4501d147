//! # JogKit UI
//!
//! Toolkit-independent state behind the axes panel: the mirrored machine
//! status and the orchestrator that turns operator intents into command
//! sequences for the active port.

pub mod axes;

pub use axes::{
    AxesPanel, IntentOutcome, JogParameters, MachineStatus, PanelError, PanelIntent,
    ParameterAction, PositionDisplay, StatusDisplay,
};
