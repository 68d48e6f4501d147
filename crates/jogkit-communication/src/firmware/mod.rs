//! Firmware protocol support
//!
//! Only the GRBL dialect is spoken; every command the panel emits is plain
//! G-code understood by GRBL 0.9 and later.

pub mod grbl;
