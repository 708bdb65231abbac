//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use std::path::Path;

use crate::application::{LockUseCase, ProfilesUseCase, VerifyUseCase};
use crate::domain::services::OsProfileActivator;
use crate::error::DeplockResult;
use crate::infrastructure::{DescriptorResolver, JsonLockRepository};

/// Type alias for the concrete LockUseCase with all dependencies
pub type ConcreteLockUseCase =
    LockUseCase<DescriptorResolver, JsonLockRepository, OsProfileActivator>;

/// Type alias for the concrete VerifyUseCase with all dependencies
pub type ConcreteVerifyUseCase =
    VerifyUseCase<DescriptorResolver, JsonLockRepository, OsProfileActivator>;

/// Type alias for the concrete ProfilesUseCase
pub type ConcreteProfilesUseCase = ProfilesUseCase<DescriptorResolver, OsProfileActivator>;

/// Create a lock use case over the descriptor at `descriptor`
pub fn create_lock_use_case(descriptor: &Path) -> DeplockResult<ConcreteLockUseCase> {
    Ok(LockUseCase::new(
        DescriptorResolver::load(descriptor)?,
        JsonLockRepository::new(),
        OsProfileActivator::new(),
    ))
}

/// Create a verify use case over the descriptor at `descriptor`
pub fn create_verify_use_case(descriptor: &Path) -> DeplockResult<ConcreteVerifyUseCase> {
    Ok(VerifyUseCase::new(
        DescriptorResolver::load(descriptor)?,
        JsonLockRepository::new(),
        OsProfileActivator::new(),
    ))
}

/// Create a profiles use case over the descriptor at `descriptor`
pub fn create_profiles_use_case(descriptor: &Path) -> DeplockResult<ConcreteProfilesUseCase> {
    Ok(ProfilesUseCase::new(
        DescriptorResolver::load(descriptor)?,
        OsProfileActivator::new(),
    ))
}
