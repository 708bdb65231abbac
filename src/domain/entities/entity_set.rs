//! Entity set - coordinate-unique, coordinate-sorted collection
//!
//! Built once from a collection and immutable afterwards. Iteration order is
//! always coordinate order; point lookups go through a coordinate index.

use std::collections::HashMap;

use super::{Artifact, LockableEntity};
use crate::domain::value_objects::Coordinate;
use crate::error::{DeplockError, DeplockResult};

/// Immutable set of lockable entities
#[derive(Debug, Clone, Default)]
pub struct EntitySet {
    entries: Vec<LockableEntity>,
    index: HashMap<Coordinate, usize>,
}

impl EntitySet {
    /// Build a set, failing on duplicate coordinates
    pub fn new(entities: impl IntoIterator<Item = LockableEntity>) -> DeplockResult<Self> {
        let mut entries: Vec<LockableEntity> = entities.into_iter().collect();
        entries.sort_by(|a, b| a.identifier().cmp(b.identifier()));

        if let Some(pair) = entries
            .windows(2)
            .find(|pair| pair[0].identifier() == pair[1].identifier())
        {
            return Err(DeplockError::DuplicateCoordinate {
                coordinate: pair[0].identifier().to_string(),
            });
        }

        Ok(Self::from_sorted(entries))
    }

    /// Set with no entries
    pub fn empty() -> Self {
        Self::default()
    }

    fn from_sorted(entries: Vec<LockableEntity>) -> Self {
        let index = entries
            .iter()
            .enumerate()
            .map(|(position, entity)| (entity.identifier().clone(), position))
            .collect();
        Self { entries, index }
    }

    /// Point lookup by coordinate
    pub fn by(&self, coordinate: &Coordinate) -> Option<&LockableEntity> {
        self.index
            .get(coordinate)
            .and_then(|&position| self.entries.get(position))
    }

    /// Whether an entity equal in every field is present
    pub fn contains(&self, entity: &LockableEntity) -> bool {
        self.by(entity.identifier()) == Some(entity)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LockableEntity> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Artifacts of every entry, in coordinate order
    pub fn artifacts(&self) -> impl Iterator<Item = &Artifact> {
        self.entries.iter().map(LockableEntity::as_artifact)
    }

    /// Subset of entries satisfying `keep`; never introduces duplicates
    pub fn filter(&self, mut keep: impl FnMut(&LockableEntity) -> bool) -> Self {
        Self::from_sorted(self.entries.iter().filter(|e| keep(e)).cloned().collect())
    }

    /// Rebuild the set from transformed entries
    pub fn map(&self, transform: impl FnMut(&LockableEntity) -> LockableEntity) -> DeplockResult<Self> {
        Self::new(self.entries.iter().map(transform))
    }
}

impl PartialEq for EntitySet {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl Eq for EntitySet {}

impl<'a> IntoIterator for &'a EntitySet {
    type Item = &'a LockableEntity;
    type IntoIter = std::slice::Iter<'a, LockableEntity>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
