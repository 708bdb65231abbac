//! Verify Use Case
//!
//! Orchestrates the verify flow:
//! 1. Load the lock
//! 2. Evaluate which profiles are active on this host
//! 3. Resolve the current dependencies
//! 4. Compare the locked sets relevant to the active profiles against them,
//!    plus the build categories the lock records

use tracing::{debug, info};

use crate::application::options::RunOptions;
use crate::domain::entities::{BuildEntities, ProfiledSet, Project};
use crate::domain::ports::{LockRepository, ProfileActivator, ProjectSource};
use crate::domain::services::{compare_project, resolve_dependencies};
use crate::error::DeplockResult;

use super::result::VerifyResult;

/// Verify use case - checks the resolved project against its lock
pub struct VerifyUseCase<S, L, A>
where
    S: ProjectSource,
    L: LockRepository,
    A: ProfileActivator,
{
    source: S,
    repository: L,
    activator: A,
}

impl<S, L, A> VerifyUseCase<S, L, A>
where
    S: ProjectSource,
    L: LockRepository,
    A: ProfileActivator,
{
    pub fn new(source: S, repository: L, activator: A) -> Self {
        Self {
            source,
            repository,
            activator,
        }
    }

    /// Execute the verify use case
    ///
    /// Drift is reported through the result, never as an error.
    pub fn execute(&self, options: &RunOptions) -> DeplockResult<VerifyResult> {
        if options.skip {
            info!("Skipping verify");
            return Ok(VerifyResult::Skipped);
        }

        let locked = self.repository.load(&options.lock_file)?;

        let profiles = options.effective_profiles(&self.source);
        let active_profiles: Vec<String> = self
            .activator
            .active_profiles(&profiles, &options.environment)?
            .into_iter()
            .map(|profile| profile.id.clone())
            .collect();
        debug!("Enabled profiles: [{}]", active_profiles.join(", "));

        let locked_dependencies = locked.dependencies().merged_for_profiles(&active_profiles)?;
        let actual_dependencies =
            resolve_dependencies(&self.source, &options.environment, &options.filters)?;

        let actual_build = if locked.is_build_lock() {
            self.source.build_entities()?
        } else {
            BuildEntities::default()
        };
        let actual = Project::with_build(ProfiledSet::default(), actual_build);

        let diff = compare_project(
            &locked,
            &locked_dependencies,
            &actual_dependencies,
            &actual,
            &options.filters,
        );

        Ok(VerifyResult::Compared {
            active_profiles,
            diff,
        })
    }
}
