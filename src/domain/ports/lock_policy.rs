//! LockPolicy port - per-entity tolerance lookups
//!
//! The diff engine, the extraction step and lock-time marking only see this
//! contract. `Filters` is the rule-table implementation.

use crate::domain::value_objects::{Coordinate, IntegrityPolicy, VersionPolicy};

/// Pure policy lookups keyed by coordinate
///
/// Implementations must not carry mutable state: one instance is consulted by
/// every pass of a lock or verify invocation.
pub trait LockPolicy {
    /// Whether the version is checked or excluded from locking
    fn version_policy(&self, coordinate: &Coordinate) -> VersionPolicy;

    /// Whether the integrity digest is checked or excluded from locking
    fn integrity_policy(&self, coordinate: &Coordinate) -> IntegrityPolicy;

    /// Whether a locked entity absent from the resolved set is tolerated
    fn allow_missing(&self, coordinate: &Coordinate) -> bool;

    /// Whether a resolved entity absent from the lock is tolerated
    fn allow_extraneous(&self, coordinate: &Coordinate) -> bool;
}

/// Policy with the defaults everywhere: check all, tolerate nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct StrictPolicy;

impl LockPolicy for StrictPolicy {
    fn version_policy(&self, _coordinate: &Coordinate) -> VersionPolicy {
        VersionPolicy::Check
    }

    fn integrity_policy(&self, _coordinate: &Coordinate) -> IntegrityPolicy {
        IntegrityPolicy::Check
    }

    fn allow_missing(&self, _coordinate: &Coordinate) -> bool {
        false
    }

    fn allow_extraneous(&self, _coordinate: &Coordinate) -> bool {
        false
    }
}
