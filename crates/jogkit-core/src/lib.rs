//! # JogKit Core
//!
//! Core types and utilities for JogKit.
//! Provides unit conversion, bounded operator parameters, the machine
//! status data model and the event bus used to learn port and status
//! changes.

pub mod data;
pub mod error;
pub mod event_bus;
pub mod parameter;
pub mod types;
pub mod units;

pub use data::{Axis, AxisSet, JogDirection, MachineState, Position, StatusReport};

pub use error::{ConnectionError, Error, ParameterError, Result};

pub use event_bus::{
    AppEvent, ConnectionEvent, EventBus, EventBusConfig, EventBusError, EventCategory,
    EventFilter, MachineEvent, Subscription, SubscriptionId,
};

pub use parameter::{BoundedParameter, ParameterSpec, FEED_RATE, JOG_DISTANCE, MAX_PRECISION};

pub use types::{
    thread_safe, thread_safe_rw, thread_safe_vec, DataCallback, ThreadSafe, ThreadSafeRw,
    ThreadSafeVec,
};

pub use units::{format_position, split_display, unit_label, MeasurementSystem};
