//! Lock Result

use std::path::PathBuf;

use crate::domain::entities::Project;

/// Outcome of a lock run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LockResult {
    /// Locking disabled by configuration
    Skipped,
    /// Lock written
    Written { lock_file: PathBuf, project: Project },
}

impl LockResult {
    pub fn project(&self) -> Option<&Project> {
        match self {
            LockResult::Skipped => None,
            LockResult::Written { project, .. } => Some(project),
        }
    }
}
