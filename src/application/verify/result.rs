//! Verify Result

use crate::domain::services::ProjectDiff;

/// Outcome of a verify run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerifyResult {
    /// Verification disabled by configuration
    Skipped,
    /// Comparison ran; `active_profiles` are the ids active on this host
    Compared {
        active_profiles: Vec<String>,
        diff: ProjectDiff,
    },
}

impl VerifyResult {
    /// True unless a comparison found drift
    pub fn is_success(&self) -> bool {
        match self {
            VerifyResult::Skipped => true,
            VerifyResult::Compared { diff, .. } => diff.is_equal(),
        }
    }

    /// Report lines; empty when skipped or clean
    pub fn report(&self) -> Vec<String> {
        match self {
            VerifyResult::Skipped => Vec::new(),
            VerifyResult::Compared { diff, .. } => diff.report(),
        }
    }
}
