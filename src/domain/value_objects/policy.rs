//! Policy value objects
//!
//! Per-entity tolerance decided by filter rules.

use serde::{Deserialize, Serialize};

/// Whether a version must match exactly at verify time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum VersionPolicy {
    /// Exact match required (default)
    #[default]
    Check,
    /// Excluded from locking, recorded as `ignored`
    Ignore,
}

/// Whether an integrity digest must match exactly at verify time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum IntegrityPolicy {
    /// Exact match required (default)
    #[default]
    Check,
    /// Not resolved, not compared, recorded as `ignored`
    Ignore,
}
