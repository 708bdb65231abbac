//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating use cases with infrastructure dependencies
//! - Output formatting (text/JSON)
//!
//! ## Structure
//!
//! - `cli` - Argument definitions
//! - `factory` - Creates use cases with proper dependencies (dependency injection)
//! - `output` - Output rendering
//!
//! ## Usage
//!
//! ```ignore
//! use deplock::presentation::factory;
//!
//! let use_case = factory::create_verify_use_case(&descriptor)?;
//! let result = use_case.execute(&options)?;
//! ```

pub mod cli;
pub mod factory;
pub mod output;

pub use cli::{Cli, Commands};
pub use factory::{create_lock_use_case, create_profiles_use_case, create_verify_use_case};
pub use output::OutputFormat;
