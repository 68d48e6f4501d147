//! Error handling for JogKit core
//!
//! Provides the error types shared by every layer of the jog panel:
//! - Connection errors (delivering command lines to a device)
//! - Parameter errors (building a bounded parameter from a bad spec)
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Connection error type
///
/// Raised by transport collaborators when a composed command bundle
/// cannot be handed to the device.
#[derive(Error, Debug, Clone)]
pub enum ConnectionError {
    /// Port not found
    #[error("Port not found: {port}")]
    PortNotFound {
        /// The name of the port that was not found.
        port: String,
    },

    /// I/O error
    #[error("I/O error: {reason}")]
    IoError {
        /// The reason for the I/O error.
        reason: String,
    },
}

/// Bounded parameter specification error
///
/// Only raised while building a parameter. Values fed to an existing
/// parameter are clamped, never rejected.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParameterError {
    /// A bound, step or default is NaN or infinite
    #[error("Parameter {field} must be finite, got {value}")]
    NotFinite {
        /// Which field of the spec is not finite.
        field: &'static str,
        /// The offending value.
        value: f64,
    },

    /// `min` is greater than `max`
    #[error("Parameter range is empty: min {min} > max {max}")]
    EmptyRange {
        /// Lower bound.
        min: f64,
        /// Upper bound.
        max: f64,
    },

    /// The default lies outside `[min, max]`
    #[error("Parameter default {default} outside [{min}, {max}]")]
    DefaultOutOfRange {
        /// The declared default.
        default: f64,
        /// Lower bound.
        min: f64,
        /// Upper bound.
        max: f64,
    },

    /// Step is zero or negative
    #[error("Parameter step must be > 0, got {step}")]
    InvalidStep {
        /// The declared step.
        step: f64,
    },

    /// Step rounding asks for more decimal places than an `f64` holds
    #[error("Parameter precision {precision} exceeds {max} decimal places")]
    PrecisionTooLarge {
        /// The declared precision.
        precision: u32,
        /// Largest accepted precision.
        max: u32,
    },
}

/// Main error type for JogKit
#[derive(Error, Debug)]
pub enum Error {
    /// Connection error
    #[error(transparent)]
    Connection(#[from] ConnectionError),

    /// Parameter error
    #[error(transparent)]
    Parameter(#[from] ParameterError),
}

impl Error {
    /// Check if this is a connection error
    pub fn is_connection_error(&self) -> bool {
        matches!(self, Error::Connection(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
