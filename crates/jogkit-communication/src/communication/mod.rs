//! Transport seam
//!
//! The panel never talks to a serial port itself. It hands each composed
//! command bundle to a [`Transport`], together with the active port name,
//! as a single newline-joined payload.

use jogkit_core::{thread_safe_vec, ConnectionError, Result, ThreadSafeVec};
use std::io::Write;

/// Delivers command payloads to a device
pub trait Transport: Send {
    /// Write one payload (one or more newline-separated lines) to `port`
    ///
    /// Lines inside the payload must reach the device in order.
    fn write_line(&mut self, port: &str, payload: &str) -> Result<()>;
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn write_line(&mut self, port: &str, payload: &str) -> Result<()> {
        (**self).write_line(port, payload)
    }
}

/// Transport that discards everything
#[derive(Debug, Default, Clone, Copy)]
pub struct NoOpTransport;

impl Transport for NoOpTransport {
    fn write_line(&mut self, port: &str, payload: &str) -> Result<()> {
        tracing::trace!("Discarding {:?} for {}", payload, port);
        Ok(())
    }
}

/// A payload captured by [`RecordingTransport`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentPayload {
    /// Port the payload was addressed to
    pub port: String,
    /// Newline-joined command lines
    pub payload: String,
}

impl SentPayload {
    /// Individual command lines
    pub fn lines(&self) -> Vec<&str> {
        self.payload.split('\n').collect()
    }
}

/// Transport that keeps every payload in memory
///
/// Clones share the same log, so a test can keep one handle while the
/// panel owns another.
#[derive(Debug, Clone, Default)]
pub struct RecordingTransport {
    sent: ThreadSafeVec<SentPayload>,
}

impl RecordingTransport {
    /// Create an empty recorder
    pub fn new() -> Self {
        Self {
            sent: thread_safe_vec(),
        }
    }

    /// Snapshot of everything sent so far
    pub fn sent(&self) -> Vec<SentPayload> {
        self.sent.lock().clone()
    }

    /// Number of `write_line` calls received
    pub fn call_count(&self) -> usize {
        self.sent.lock().len()
    }

    /// Forget everything sent so far
    pub fn clear(&self) {
        self.sent.lock().clear();
    }
}

impl Transport for RecordingTransport {
    fn write_line(&mut self, port: &str, payload: &str) -> Result<()> {
        self.sent.lock().push(SentPayload {
            port: port.to_string(),
            payload: payload.to_string(),
        });
        Ok(())
    }
}

/// Transport that writes each line to an `io::Write`, one per output line
///
/// Used by the headless console to print what would go to the device.
#[derive(Debug)]
pub struct WriterTransport<W> {
    writer: W,
    show_port: bool,
}

impl<W: Write + Send> WriterTransport<W> {
    /// Wrap a writer; lines are printed bare
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            show_port: false,
        }
    }

    /// Builder method prefixing each line with `<port>> `
    pub fn with_port_prefix(mut self) -> Self {
        self.show_port = true;
        self
    }

    /// Unwrap the writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send> Transport for WriterTransport<W> {
    fn write_line(&mut self, port: &str, payload: &str) -> Result<()> {
        let io_err = |e: std::io::Error| ConnectionError::IoError {
            reason: e.to_string(),
        };
        for line in payload.split('\n') {
            if self.show_port {
                writeln!(self.writer, "{}> {}", port, line).map_err(io_err)?;
            } else {
                writeln!(self.writer, "{}", line).map_err(io_err)?;
            }
        }
        self.writer.flush().map_err(io_err)?;
        Ok(())
    }
}
