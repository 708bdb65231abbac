//! Profiles Use Case
//!
//! Lists the profiles that take part in locking and whether each one is
//! active under the real environment.

use crate::application::options::RunOptions;
use crate::domain::ports::{ProfileActivator, ProjectSource};
use crate::error::DeplockResult;

/// One listed profile
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileStatus {
    pub id: String,
    pub active: bool,
}

/// Profiles use case
pub struct ProfilesUseCase<S, A>
where
    S: ProjectSource,
    A: ProfileActivator,
{
    source: S,
    activator: A,
}

impl<S, A> ProfilesUseCase<S, A>
where
    S: ProjectSource,
    A: ProfileActivator,
{
    pub fn new(source: S, activator: A) -> Self {
        Self { source, activator }
    }

    /// Profiles in declared order with their activation state
    pub fn execute(&self, options: &RunOptions) -> DeplockResult<Vec<ProfileStatus>> {
        options
            .effective_profiles(&self.source)
            .into_iter()
            .map(|profile| {
                let active = self.activator.is_active(&profile, &options.environment)?;
                Ok(ProfileStatus {
                    id: profile.id,
                    active,
                })
            })
            .collect()
    }
}
