//! Filters Domain Service
//!
//! Ordered rule table implementing [`LockPolicy`]. Rules are evaluated in
//! declared order and the first rule whose patterns match decides every
//! lookup for that coordinate. No rule matching means the defaults:
//! `Check` / `Check` / not tolerated / not tolerated.

use crate::domain::ports::LockPolicy;
use crate::domain::value_objects::{Coordinate, CoordinatePattern, IntegrityPolicy, VersionPolicy};
use crate::error::DeplockResult;

/// One declared rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterRule {
    includes: Vec<CoordinatePattern>,
    excludes: Vec<CoordinatePattern>,
    pub version: VersionPolicy,
    pub integrity: IntegrityPolicy,
    pub allow_missing: bool,
    pub allow_extraneous: bool,
}

impl FilterRule {
    /// Rule over parsed patterns; empty `includes` matches every coordinate
    pub fn new(includes: Vec<CoordinatePattern>, excludes: Vec<CoordinatePattern>) -> Self {
        Self {
            includes,
            excludes,
            version: VersionPolicy::Check,
            integrity: IntegrityPolicy::Check,
            allow_missing: false,
            allow_extraneous: false,
        }
    }

    /// Parse pattern strings into a rule
    pub fn parse<S: AsRef<str>>(includes: &[S], excludes: &[S]) -> DeplockResult<Self> {
        let includes = includes
            .iter()
            .map(|p| CoordinatePattern::parse(p.as_ref()))
            .collect::<DeplockResult<Vec<_>>>()?;
        let excludes = excludes
            .iter()
            .map(|p| CoordinatePattern::parse(p.as_ref()))
            .collect::<DeplockResult<Vec<_>>>()?;
        Ok(Self::new(includes, excludes))
    }

    pub fn with_version(mut self, version: VersionPolicy) -> Self {
        self.version = version;
        self
    }

    pub fn with_integrity(mut self, integrity: IntegrityPolicy) -> Self {
        self.integrity = integrity;
        self
    }

    pub fn with_allow_missing(mut self, allow_missing: bool) -> Self {
        self.allow_missing = allow_missing;
        self
    }

    pub fn with_allow_extraneous(mut self, allow_extraneous: bool) -> Self {
        self.allow_extraneous = allow_extraneous;
        self
    }

    pub fn matches(&self, coordinate: &Coordinate) -> bool {
        let included =
            self.includes.is_empty() || self.includes.iter().any(|p| p.matches(coordinate));
        included && !self.excludes.iter().any(|p| p.matches(coordinate))
    }
}

/// Declared filter rules, immutable after construction
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filters {
    rules: Vec<FilterRule>,
}

impl Filters {
    pub fn new(rules: Vec<FilterRule>) -> Self {
        Self { rules }
    }

    /// First rule matching `coordinate`, in declared order
    pub fn rule_for(&self, coordinate: &Coordinate) -> Option<&FilterRule> {
        self.rules.iter().find(|rule| rule.matches(coordinate))
    }
}

impl LockPolicy for Filters {
    fn version_policy(&self, coordinate: &Coordinate) -> VersionPolicy {
        self.rule_for(coordinate)
            .map(|rule| rule.version)
            .unwrap_or_default()
    }

    fn integrity_policy(&self, coordinate: &Coordinate) -> IntegrityPolicy {
        self.rule_for(coordinate)
            .map(|rule| rule.integrity)
            .unwrap_or_default()
    }

    fn allow_missing(&self, coordinate: &Coordinate) -> bool {
        self.rule_for(coordinate)
            .map(|rule| rule.allow_missing)
            .unwrap_or(false)
    }

    fn allow_extraneous(&self, coordinate: &Coordinate) -> bool {
        self.rule_for(coordinate)
            .map(|rule| rule.allow_extraneous)
            .unwrap_or(false)
    }
}
