//! LockRepository port - lock persistence
//!
//! The domain hands over a parsed `Project` and never sees the on-disk layout.

use std::path::Path;

use crate::domain::entities::Project;
use crate::error::DeplockResult;

/// Abstract repository for lock persistence
pub trait LockRepository {
    /// Load and validate a lock
    fn load(&self, path: &Path) -> DeplockResult<Project>;

    /// Persist a lock atomically
    fn save(&self, project: &Project, path: &Path) -> DeplockResult<()>;
}
