//! Lock Use Case
//!
//! Orchestrates the lock flow:
//! 1. Pick the profiles (configured, else declared by the project)
//! 2. Partition dependencies over them, or resolve once when there are none
//! 3. Add build entities when requested
//! 4. Mark ignored fields when requested
//! 5. Persist the lock

use tracing::info;

use crate::application::options::RunOptions;
use crate::domain::entities::{ProfiledSet, Project};
use crate::domain::ports::{LockRepository, ProfileActivator, ProjectSource};
use crate::domain::services::{mark_ignored, resolve_dependencies, Partitioner};
use crate::error::DeplockResult;

use super::result::LockResult;

/// Lock use case - computes and writes the lock
pub struct LockUseCase<S, L, A>
where
    S: ProjectSource,
    L: LockRepository,
    A: ProfileActivator,
{
    source: S,
    repository: L,
    activator: A,
}

impl<S, L, A> LockUseCase<S, L, A>
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

    /// Compute the project's lock without writing it
    pub fn compute(&self, options: &RunOptions) -> DeplockResult<Project> {
        let profiles = options.effective_profiles(&self.source);

        let dependencies = if profiles.is_empty() {
            ProfiledSet::new(resolve_dependencies(
                &self.source,
                &options.environment,
                &options.filters,
            )?)
        } else {
            Partitioner::new(&self.source, &self.activator, &options.filters)
                .partition(&profiles, &options.environment)?
        };

        let project = if options.lock_build {
            Project::with_build(dependencies, self.source.build_entities()?)
        } else {
            Project::new(dependencies)
        };

        if options.mark_ignored {
            mark_ignored(&project, &options.filters)
        } else {
            Ok(project)
        }
    }

    /// Execute the lock use case
    pub fn execute(&self, options: &RunOptions) -> DeplockResult<LockResult> {
        if options.skip {
            info!("Skipping lock");
            return Ok(LockResult::Skipped);
        }

        let project = self.compute(options)?;
        self.repository.save(&project, &options.lock_file)?;
        info!("Wrote lock file {}", options.lock_file.display());

        Ok(LockResult::Written {
            lock_file: options.lock_file.clone(),
            project,
        })
    }
}
