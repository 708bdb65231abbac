//! Project entity - everything a lock records for one project
//!
//! Dependencies are always present (possibly profiled). Parents, plugins and
//! extensions are only present in build locks.

use super::{EntitySet, ProfiledSet};
use crate::error::DeplockResult;

/// Lockable content of a project
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Project {
    dependencies: ProfiledSet,
    parents: Option<EntitySet>,
    plugins: Option<EntitySet>,
    extensions: Option<EntitySet>,
}

/// Build-level entities (parents, plugins, extensions)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildEntities {
    pub parents: EntitySet,
    pub plugins: EntitySet,
    pub extensions: EntitySet,
}

impl Project {
    /// Dependencies-only project
    pub fn new(dependencies: ProfiledSet) -> Self {
        Self {
            dependencies,
            parents: None,
            plugins: None,
            extensions: None,
        }
    }

    /// Project that also locks build entities
    pub fn with_build(dependencies: ProfiledSet, build: BuildEntities) -> Self {
        Self {
            dependencies,
            parents: Some(build.parents),
            plugins: Some(build.plugins),
            extensions: Some(build.extensions),
        }
    }

    /// Assemble from optional parts, as read back from a lock
    pub fn from_parts(
        dependencies: ProfiledSet,
        parents: Option<EntitySet>,
        plugins: Option<EntitySet>,
        extensions: Option<EntitySet>,
    ) -> Self {
        Self {
            dependencies,
            parents,
            plugins,
            extensions,
        }
    }

    pub fn dependencies(&self) -> &ProfiledSet {
        &self.dependencies
    }

    pub fn parents(&self) -> Option<&EntitySet> {
        self.parents.as_ref()
    }

    pub fn plugins(&self) -> Option<&EntitySet> {
        self.plugins.as_ref()
    }

    pub fn extensions(&self) -> Option<&EntitySet> {
        self.extensions.as_ref()
    }

    /// Whether any build category is recorded
    pub fn is_build_lock(&self) -> bool {
        self.parents.is_some() || self.plugins.is_some() || self.extensions.is_some()
    }

    /// Apply a transform to every recorded set
    pub fn map_sets(
        &self,
        mut transform: impl FnMut(&EntitySet) -> DeplockResult<EntitySet>,
    ) -> DeplockResult<Self> {
        Ok(Self {
            dependencies: self.dependencies.map_sets(&mut transform)?,
            parents: self.parents.as_ref().map(&mut transform).transpose()?,
            plugins: self.plugins.as_ref().map(&mut transform).transpose()?,
            extensions: self.extensions.as_ref().map(&mut transform).transpose()?,
        })
    }
}
