//! Repository Implementations
//!
//! Concrete implementations of domain repository ports.

mod json_lock;

pub use json_lock::{JsonLockRepository, LOCK_FORMAT_VERSION};
