//! Coordinate value object
//!
//! The identity key of every lockable entity: group, name, optional
//! classifier and type. Ordering is by `(group, name, classifier-or-empty, type)`.

use std::cmp::Ordering;
use std::fmt;

use crate::error::{DeplockError, DeplockResult};

/// Type assumed when none is declared
pub const DEFAULT_TYPE: &str = "jar";

/// Immutable artifact identity
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Coordinate {
    group: String,
    name: String,
    classifier: Option<String>,
    artifact_type: String,
}

impl Coordinate {
    /// Create a coordinate with the default type and no classifier
    pub fn new(group: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            group: group.into(),
            name: name.into(),
            classifier: None,
            artifact_type: DEFAULT_TYPE.to_string(),
        }
    }

    /// Set the classifier (an empty classifier means none)
    pub fn with_classifier(mut self, classifier: Option<impl Into<String>>) -> Self {
        self.classifier = classifier.map(Into::into).filter(|c| !c.is_empty());
        self
    }

    /// Set the artifact type (an empty type means the default)
    pub fn with_type(mut self, artifact_type: impl Into<String>) -> Self {
        let artifact_type = artifact_type.into();
        self.artifact_type = if artifact_type.is_empty() {
            DEFAULT_TYPE.to_string()
        } else {
            artifact_type
        };
        self
    }

    /// Parse `group:name[:type[:classifier]]`
    pub fn parse(value: &str) -> DeplockResult<Self> {
        let parts: Vec<&str> = value.split(':').collect();
        if parts.len() < 2 || parts.len() > 4 {
            return Err(DeplockError::InvalidCoordinate {
                value: value.to_string(),
                message: "expected group:name[:type[:classifier]]".to_string(),
            });
        }
        if parts[0].is_empty() || parts[1].is_empty() {
            return Err(DeplockError::InvalidCoordinate {
                value: value.to_string(),
                message: "group and name must not be empty".to_string(),
            });
        }
        let mut coordinate = Self::new(parts[0], parts[1]);
        if let Some(artifact_type) = parts.get(2) {
            coordinate = coordinate.with_type(*artifact_type);
        }
        if let Some(classifier) = parts.get(3) {
            coordinate = coordinate.with_classifier(Some(*classifier));
        }
        Ok(coordinate)
    }

    pub fn group(&self) -> &str {
        &self.group
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn classifier(&self) -> Option<&str> {
        self.classifier.as_deref()
    }

    pub fn artifact_type(&self) -> &str {
        &self.artifact_type
    }

    /// Fully spelled form, always including the type: `group:name:type[:classifier]`
    pub fn full_key(&self) -> String {
        match &self.classifier {
            Some(classifier) => format!(
                "{}:{}:{}:{}",
                self.group, self.name, self.artifact_type, classifier
            ),
            None => format!("{}:{}:{}", self.group, self.name, self.artifact_type),
        }
    }
}

impl Ord for Coordinate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.group
            .cmp(&other.group)
            .then_with(|| self.name.cmp(&other.name))
            .then_with(|| {
                let mine = self.classifier.as_deref().unwrap_or("");
                let theirs = other.classifier.as_deref().unwrap_or("");
                mine.cmp(theirs)
            })
            .then_with(|| self.artifact_type.cmp(&other.artifact_type))
    }
}

impl PartialOrd for Coordinate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Short form: the type is only spelled out when it is not the default
/// or a classifier follows it.
impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.classifier.is_none() && self.artifact_type == DEFAULT_TYPE {
            write!(f, "{}:{}", self.group, self.name)
        } else {
            write!(f, "{}", self.full_key())
        }
    }
}
