//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod coordinate;
mod coordinate_pattern;
mod environment;
mod integrity;
mod policy;

pub use coordinate::{Coordinate, DEFAULT_TYPE};
pub use coordinate_pattern::CoordinatePattern;
pub use environment::{
    Environment, EnvironmentOrigin, OS_ARCH, OS_NAME, OS_VERSION, PATH_SEPARATOR,
};
pub use integrity::{Integrity, IGNORED};
pub use policy::{IntegrityPolicy, VersionPolicy};
