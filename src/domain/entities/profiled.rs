//! Profiled set - default entities plus per-profile entities
//!
//! The container does not enforce disjointness between the default set and
//! the profile sets; partitioning is what guarantees it.

use std::collections::{BTreeMap, HashMap, HashSet};

use super::{Artifact, EntitySet, LockableEntity};
use crate::domain::value_objects::Coordinate;
use crate::error::{DeplockError, DeplockResult};

/// Default set plus a set per profile id
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfiledSet {
    default: EntitySet,
    by_profile: BTreeMap<String, EntitySet>,
}

impl ProfiledSet {
    /// Non-profiled set
    pub fn new(default: EntitySet) -> Self {
        Self {
            default,
            by_profile: BTreeMap::new(),
        }
    }

    pub fn with_profiles(default: EntitySet, by_profile: BTreeMap<String, EntitySet>) -> Self {
        Self {
            default,
            by_profile,
        }
    }

    pub fn default_entities(&self) -> &EntitySet {
        &self.default
    }

    pub fn profile(&self, id: &str) -> Option<&EntitySet> {
        self.by_profile.get(id)
    }

    /// Profile entries in id order
    pub fn profile_entries(&self) -> impl Iterator<Item = (&str, &EntitySet)> {
        self.by_profile.iter().map(|(id, set)| (id.as_str(), set))
    }

    pub fn has_profiles(&self) -> bool {
        !self.by_profile.is_empty()
    }

    /// Sets relevant for the given active profiles: the default set first,
    /// then each declared profile's set in input order. Unknown ids are skipped.
    pub fn for_profiles<S: AsRef<str>>(&self, profile_ids: &[S]) -> Vec<&EntitySet> {
        std::iter::once(&self.default)
            .chain(
                profile_ids
                    .iter()
                    .filter_map(|id| self.by_profile.get(id.as_ref())),
            )
            .collect()
    }

    /// Concatenation of [`Self::for_profiles`] as one set.
    ///
    /// Identical entries repeated across sets collapse; a coordinate present
    /// with different content is a malformed lock.
    pub fn merged_for_profiles<S: AsRef<str>>(&self, profile_ids: &[S]) -> DeplockResult<EntitySet> {
        let mut seen: HashMap<&Coordinate, &LockableEntity> = HashMap::new();
        let mut merged = Vec::new();
        for set in self.for_profiles(profile_ids) {
            for entity in set {
                match seen.get(entity.identifier()) {
                    Some(existing) if *existing == entity => continue,
                    Some(_) => {
                        return Err(DeplockError::DuplicateCoordinate {
                            coordinate: entity.identifier().to_string(),
                        })
                    }
                    None => {
                        seen.insert(entity.identifier(), entity);
                        merged.push(entity.clone());
                    }
                }
            }
        }
        EntitySet::new(merged)
    }

    /// Distinct artifacts across the default and every profile set
    pub fn artifacts(&self) -> Vec<&Artifact> {
        let mut seen = HashSet::new();
        std::iter::once(&self.default)
            .chain(self.by_profile.values())
            .flat_map(EntitySet::artifacts)
            .filter(|artifact| seen.insert(*artifact))
            .collect()
    }

    /// Apply a transform to every set
    pub fn map_sets(
        &self,
        mut transform: impl FnMut(&EntitySet) -> DeplockResult<EntitySet>,
    ) -> DeplockResult<Self> {
        let default = transform(&self.default)?;
        let mut by_profile = BTreeMap::new();
        for (id, set) in &self.by_profile {
            by_profile.insert(id.clone(), transform(set)?);
        }
        Ok(Self {
            default,
            by_profile,
        })
    }
}
