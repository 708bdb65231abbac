//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `repositories/` - Lock persistence (JSON)
//! - `resolver/` - Descriptor-backed dependency resolver
//! - `atomic` - Temp-file-and-rename writes

pub mod atomic;
pub mod repositories;
pub mod resolver;

// Re-export for convenience
pub use repositories::{JsonLockRepository, LOCK_FORMAT_VERSION};
pub use resolver::DescriptorResolver;
