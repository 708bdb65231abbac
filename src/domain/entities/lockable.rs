//! Lockable entity - anything identified by a coordinate that gets locked
//!
//! Shared fields live in [`Artifact`]; each variant only adds its payload.
//! Plugins carry a nested [`EntitySet`] of their private dependency artifacts.

use std::fmt;

use super::{Artifact, EntitySet};
use crate::domain::value_objects::{Coordinate, Integrity};

/// Variant payload of a lockable entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntityKind {
    /// Bare artifact (plugin-private dependencies)
    Artifact,
    /// Project dependency
    Dependency { scope: String, optional: bool },
    /// Build plugin with its own dependency artifacts
    Plugin { dependencies: EntitySet },
    /// Build extension
    Extension,
    /// Parent descriptor
    Parent,
}

impl EntityKind {
    pub fn name(&self) -> &'static str {
        match self {
            EntityKind::Artifact => "artifact",
            EntityKind::Dependency { .. } => "dependency",
            EntityKind::Plugin { .. } => "plugin",
            EntityKind::Extension => "extension",
            EntityKind::Parent => "parent",
        }
    }
}

/// An entity recorded in a lock
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LockableEntity {
    artifact: Artifact,
    kind: EntityKind,
}

impl LockableEntity {
    pub fn artifact(artifact: Artifact) -> Self {
        Self {
            artifact,
            kind: EntityKind::Artifact,
        }
    }

    pub fn dependency(artifact: Artifact, scope: impl Into<String>, optional: bool) -> Self {
        Self {
            artifact,
            kind: EntityKind::Dependency {
                scope: scope.into(),
                optional,
            },
        }
    }

    pub fn plugin(artifact: Artifact, dependencies: EntitySet) -> Self {
        Self {
            artifact,
            kind: EntityKind::Plugin { dependencies },
        }
    }

    pub fn extension(artifact: Artifact) -> Self {
        Self {
            artifact,
            kind: EntityKind::Extension,
        }
    }

    pub fn parent(artifact: Artifact) -> Self {
        Self {
            artifact,
            kind: EntityKind::Parent,
        }
    }

    pub fn identifier(&self) -> &Coordinate {
        self.artifact.coordinate()
    }

    pub fn version(&self) -> &str {
        self.artifact.version()
    }

    pub fn integrity(&self) -> &Integrity {
        self.artifact.integrity()
    }

    pub fn as_artifact(&self) -> &Artifact {
        &self.artifact
    }

    pub fn kind(&self) -> &EntityKind {
        &self.kind
    }

    /// Scope, for dependencies
    pub fn scope(&self) -> Option<&str> {
        match &self.kind {
            EntityKind::Dependency { scope, .. } => Some(scope),
            _ => None,
        }
    }

    /// Optional flag; only dependencies can be optional
    pub fn is_optional(&self) -> bool {
        matches!(&self.kind, EntityKind::Dependency { optional: true, .. })
    }

    /// Nested artifacts, for plugins
    pub fn plugin_dependencies(&self) -> Option<&EntitySet> {
        match &self.kind {
            EntityKind::Plugin { dependencies } => Some(dependencies),
            _ => None,
        }
    }

    pub fn with_version(&self, version: impl Into<String>) -> Self {
        Self {
            artifact: self.artifact.with_version(version),
            kind: self.kind.clone(),
        }
    }

    pub fn with_integrity(&self, integrity: Integrity) -> Self {
        Self {
            artifact: self.artifact.with_integrity(integrity),
            kind: self.kind.clone(),
        }
    }

    /// Replace a plugin's nested artifacts; other variants are returned unchanged
    pub fn with_plugin_dependencies(&self, dependencies: EntitySet) -> Self {
        match &self.kind {
            EntityKind::Plugin { .. } => Self {
                artifact: self.artifact.clone(),
                kind: EntityKind::Plugin { dependencies },
            },
            _ => self.clone(),
        }
    }
}

impl fmt::Display for LockableEntity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            EntityKind::Dependency { scope, optional } => write!(
                f,
                "{} ({}{})",
                self.artifact,
                scope,
                if *optional { ", optional" } else { "" }
            ),
            _ => write!(f, "{}", self.artifact),
        }
    }
}
