//! deplock - lock and verify the artifacts a build resolves
//!
//! A lock records every resolved dependency with its version and integrity
//! digest. Dependencies that only appear under an OS profile are recorded
//! per profile, so a lock written on one host verifies on another.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;
pub mod presentation;

// Re-exports for convenience
pub use application::{LockUseCase, ProfilesUseCase, RunOptions, VerifyUseCase};
pub use config::Config;
pub use error::{DeplockError, DeplockResult};
