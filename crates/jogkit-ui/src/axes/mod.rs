//! Axes panel
//!
//! Position readout, zeroing, jogging and the feed/distance controls.

pub mod panel;
pub mod status;

pub use panel::{
    AxesPanel, IntentOutcome, JogParameters, PanelError, PanelIntent, ParameterAction,
};
pub use status::{MachineStatus, PositionDisplay, StatusDisplay};
