//! # JogKit
//!
//! Jog and positioning control core for GRBL-style CNC controllers:
//! - Machine/work position readout in millimeters or inches
//! - Clamped feed rate and jog distance parameters
//! - Exact G-code for zeroing, go-to-zero and relative jogs
//! - Command suppression while no port is active
//!
//! ## Architecture
//!
//! JogKit is organized as a workspace with multiple crates:
//!
//! 1. **jogkit-core** - Units, bounded parameters, status data model, event bus
//! 2. **jogkit-communication** - Command composer, status line parser, transport seam
//! 3. **jogkit-settings** - TOML/JSON configuration
//! 4. **jogkit-ui** - Machine status mirror and the axes panel orchestrator
//! 5. **jogkit** - Headless console binary that integrates all crates

pub mod cli;
pub mod console;

pub use jogkit_communication::{
    command_creator, parse_status_line, CommandSequence, RecordingTransport, Transport,
    WriterTransport,
};
pub use jogkit_core::{
    format_position, AppEvent, Axis, AxisSet, BoundedParameter, EventBus, JogDirection,
    MachineState, MeasurementSystem, Position, StatusReport,
};
pub use jogkit_settings::Config;
pub use jogkit_ui::{AxesPanel, IntentOutcome, MachineStatus, PanelIntent, ParameterAction};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Output on stderr, keeping stdout for transmitted commands
/// - RUST_LOG environment variable support, `info` when unset
/// - Target, thread and line number on every event
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_thread_ids(true)
        .with_thread_names(true)
        .with_line_number(true)
        .compact();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
