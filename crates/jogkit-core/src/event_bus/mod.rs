//! # Event Bus Module
//!
//! Decoupled delivery of port changes and machine status broadcasts.
//!
//! ## Usage
//!
//! ```rust
//! use jogkit_core::event_bus::{AppEvent, EventBus, EventCategory, EventFilter};
//! use std::sync::Arc;
//!
//! let bus = Arc::new(EventBus::new());
//!
//! // Held for as long as the consumer lives; unsubscribes on drop
//! let subscription = bus.subscribe_scoped(
//!     EventFilter::Categories(vec![EventCategory::Connection]),
//!     |event| println!("{}", event.description()),
//! );
//!
//! bus.publish(AppEvent::port_changed(Some("/dev/ttyUSB0"))).ok();
//! drop(subscription);
//! assert_eq!(bus.subscriber_count(), 0);
//! ```

mod bus;
mod events;

pub use bus::*;
pub use events::*;
