//! Partitioning Domain Service
//!
//! Lock-time discovery of which dependencies are always required and which
//! only come in under a profile. Dependencies are resolved once under the
//! real environment and once under an emulated environment per disabled
//! profile; the intersection of every pass becomes the default set and each
//! profile records what it adds on top.

use std::collections::BTreeMap;

use tracing::{debug, warn};

use super::resolution::resolve_dependencies;
use crate::domain::entities::{ensure_unique_ids, EntitySet, Profile, ProfiledSet};
use crate::domain::ports::{LockPolicy, ProfileActivator, Resolver};
use crate::domain::value_objects::Environment;
use crate::error::DeplockResult;

/// Splits resolved dependencies into shared and per-profile sets
pub struct Partitioner<'a, R: ?Sized, A: ?Sized, P: ?Sized> {
    resolver: &'a R,
    activator: &'a A,
    policy: &'a P,
}

impl<'a, R, A, P> Partitioner<'a, R, A, P>
where
    R: Resolver + ?Sized,
    A: ProfileActivator + ?Sized,
    P: LockPolicy + ?Sized,
{
    pub fn new(resolver: &'a R, activator: &'a A, policy: &'a P) -> Self {
        Self {
            resolver,
            activator,
            policy,
        }
    }

    /// Partition the project's dependencies over `profiles`.
    ///
    /// Every disabled profile is emulated before the first resolution pass,
    /// so an unsupported activation fails without resolving anything.
    pub fn partition(
        &self,
        profiles: &[Profile],
        environment: &Environment,
    ) -> DeplockResult<ProfiledSet> {
        ensure_unique_ids(profiles)?;
        let active = self.activator.active_profiles(profiles, environment)?;
        if active.len() > 1 {
            warn!(
                "More than one profile is active ({}); all active profiles will share the same locked dependencies",
                ids(&active).join(", ")
            );
        }
        debug!("Enabled profiles: [{}]", ids(&active).join(", "));

        let mut emulated = Vec::new();
        for profile in profiles {
            if active.iter().any(|p| p.id == profile.id) {
                continue;
            }
            let emulated_environment = self.activator.emulate_environment(profile, environment)?;
            emulated.push((profile.id.clone(), emulated_environment));
        }

        let current = resolve_dependencies(self.resolver, environment, self.policy)?;
        let mut disabled = Vec::with_capacity(emulated.len());
        for (id, emulated_environment) in emulated {
            let resolved = resolve_dependencies(self.resolver, &emulated_environment, self.policy)?;
            disabled.push((id, resolved));
        }

        Ok(split(current, &ids(&active), disabled))
    }
}

fn ids<'p>(profiles: &[&'p Profile]) -> Vec<&'p str> {
    profiles.iter().map(|p| p.id.as_str()).collect()
}

/// Partition already resolved sets.
///
/// `current` is the set resolved under the real environment, `active` the
/// ids active there and `disabled` the set resolved for each other profile.
/// Entities are shared only when equal in every field across all sets.
pub fn split(
    current: EntitySet,
    active: &[&str],
    disabled: Vec<(String, EntitySet)>,
) -> ProfiledSet {
    let shared = current.filter(|entity| disabled.iter().all(|(_, set)| set.contains(entity)));

    let mut by_profile: BTreeMap<String, EntitySet> = disabled
        .into_iter()
        .map(|(id, set)| (id, set.filter(|entity| !shared.contains(entity))))
        .collect();

    let residual = current.filter(|entity| !shared.contains(entity));
    for id in active {
        by_profile.insert((*id).to_string(), residual.clone());
    }

    ProfiledSet::with_profiles(shared, by_profile)
}

#[cfg(test)]
mod tests;
