//! Type aliases for shared state and callbacks.

pub mod aliases;

pub use aliases::*;
