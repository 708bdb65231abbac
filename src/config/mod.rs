//! Configuration module for deplock
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (DEPLOCK_*)
//! 3. Project config (`deplock.toml` in the project root)
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::ConfigWarning;
pub use types::{
    Config, FilterConfig, LockConfig, ProjectConfig, CONFIG_FILE, DEFAULT_DESCRIPTOR,
    DEFAULT_LOCK_FILE,
};
