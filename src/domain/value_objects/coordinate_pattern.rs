//! Coordinate pattern value object
//!
//! Matches coordinates against `group[:name[:type[:classifier]]]`, where each
//! segment is a glob compiled with `globset`. Omitted trailing segments match
//! anything.

use std::fmt;

use globset::{Glob, GlobMatcher};

use super::Coordinate;
use crate::error::{DeplockError, DeplockResult};

/// Maximum number of segments in a pattern
const MAX_SEGMENTS: usize = 4;

/// Parsed coordinate pattern
#[derive(Debug, Clone)]
pub struct CoordinatePattern {
    raw: String,
    matchers: Vec<GlobMatcher>,
}

impl CoordinatePattern {
    /// Parse a pattern string
    pub fn parse(pattern: &str) -> DeplockResult<Self> {
        let invalid = |message: String| DeplockError::InvalidPattern {
            pattern: pattern.to_string(),
            message,
        };

        let trimmed = pattern.trim();
        if trimmed.is_empty() {
            return Err(invalid("pattern must not be empty".to_string()));
        }

        let segments: Vec<&str> = trimmed.split(':').collect();
        if segments.len() > MAX_SEGMENTS {
            return Err(invalid(format!(
                "expected at most {} segments",
                MAX_SEGMENTS
            )));
        }

        let mut matchers = Vec::with_capacity(segments.len());
        for (index, segment) in segments.iter().enumerate() {
            if segment.is_empty() {
                return Err(invalid(format!("segment {} is empty", index + 1)));
            }
            let glob = Glob::new(segment).map_err(|e| invalid(e.to_string()))?;
            matchers.push(glob.compile_matcher());
        }

        Ok(Self {
            raw: trimmed.to_string(),
            matchers,
        })
    }

    /// Check a coordinate against this pattern
    pub fn matches(&self, coordinate: &Coordinate) -> bool {
        let values = [
            coordinate.group(),
            coordinate.name(),
            coordinate.artifact_type(),
            coordinate.classifier().unwrap_or(""),
        ];
        self.matchers
            .iter()
            .zip(values.iter())
            .all(|(matcher, value)| matcher.is_match(value))
    }
}

// compiled matchers are derived from `raw`
impl PartialEq for CoordinatePattern {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl Eq for CoordinatePattern {}

impl fmt::Display for CoordinatePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
