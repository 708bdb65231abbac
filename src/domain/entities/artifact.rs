//! Artifact entity - coordinate plus resolved version and integrity

use std::fmt;

use crate::domain::value_objects::{Coordinate, Integrity};

/// A resolved artifact
///
/// Never mutated in place: `with_version` / `with_integrity` return new values.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Artifact {
    coordinate: Coordinate,
    version: String,
    integrity: Integrity,
}

impl Artifact {
    pub fn new(coordinate: Coordinate, version: impl Into<String>, integrity: Integrity) -> Self {
        Self {
            coordinate,
            version: version.into(),
            integrity,
        }
    }

    pub fn coordinate(&self) -> &Coordinate {
        &self.coordinate
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn integrity(&self) -> &Integrity {
        &self.integrity
    }

    pub fn with_version(&self, version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            ..self.clone()
        }
    }

    pub fn with_integrity(&self, integrity: Integrity) -> Self {
        Self {
            integrity,
            ..self.clone()
        }
    }

    /// Key used to share artifact records in the lock file: `group:name:type[:classifier]@version`
    pub fn lock_key(&self) -> String {
        format!("{}@{}", self.coordinate.full_key(), self.version)
    }
}

impl fmt::Display for Artifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.coordinate, self.version)
    }
}
