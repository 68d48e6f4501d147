//! Type aliases for commonly used complex types.
//!
//! Event bus handlers run on the publishing thread, so any panel state they
//! write is shared through these thread-safe wrappers. Locks are
//! `parking_lot` locks.

use parking_lot::{Mutex, RwLock};
use std::sync::Arc;

/// A thread-safe, mutex-protected wrapper for cross-thread sharing.
pub type ThreadSafe<T> = Arc<Mutex<T>>;

/// A thread-safe vector, used by recording transports and test probes.
pub type ThreadSafeVec<T> = Arc<Mutex<Vec<T>>>;

/// A thread-safe reader-writer lock wrapper for read-heavy state.
///
/// The active port and the latest machine status are read on every intent
/// and written only when a broadcast arrives.
pub type ThreadSafeRw<T> = Arc<RwLock<T>>;

/// A callback that receives a single parameter.
pub type DataCallback<T> = Box<dyn Fn(T) + Send + Sync>;

/// Create a new ThreadSafe<T> from a value.
pub fn thread_safe<T>(value: T) -> ThreadSafe<T> {
    Arc::new(Mutex::new(value))
}

/// Create a new empty ThreadSafeVec<T>.
pub fn thread_safe_vec<T>() -> ThreadSafeVec<T> {
    Arc::new(Mutex::new(Vec::new()))
}

/// Create a new ThreadSafeRw<T> from a value.
pub fn thread_safe_rw<T>(value: T) -> ThreadSafeRw<T> {
    Arc::new(RwLock::new(value))
}
