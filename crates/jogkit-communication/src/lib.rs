//! # JogKit Communication
//!
//! Everything that crosses the wire between the jog panel and a GRBL-style
//! controller: the G-code command composer, status line decoding and the
//! transport seam through which composed lines leave the process.

pub mod communication;
pub mod firmware;

pub use communication::{
    NoOpTransport, RecordingTransport, SentPayload, Transport, WriterTransport,
};

pub use firmware::grbl::command_creator::{self, CommandSequence};
pub use firmware::grbl::status_parser::{parse_status_line, StatusParseError};
