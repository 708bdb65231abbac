//! ProfileActivator port - profile activation evaluation and emulation

use crate::domain::entities::Profile;
use crate::domain::value_objects::Environment;
use crate::error::DeplockResult;

/// Evaluates profile activation against an environment
pub trait ProfileActivator {
    /// Whether `profile` is active under `environment`
    fn is_active(&self, profile: &Profile, environment: &Environment) -> DeplockResult<bool>;

    /// Profiles active under `environment`, in declared order
    fn active_profiles<'a>(
        &self,
        profiles: &'a [Profile],
        environment: &Environment,
    ) -> DeplockResult<Vec<&'a Profile>> {
        let mut active = Vec::new();
        for profile in profiles {
            if self.is_active(profile, environment)? {
                active.push(profile);
            }
        }
        Ok(active)
    }

    /// A fresh environment derived from `base` under which `profile` is active
    fn emulate_environment(&self, profile: &Profile, base: &Environment)
        -> DeplockResult<Environment>;
}
