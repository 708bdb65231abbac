//! Lock-time marking of ignored fields
//!
//! Entities whose version or integrity policy is `Ignore` are recorded with
//! the `ignored` sentinel instead of the resolved value.

use tracing::info;

use crate::domain::entities::{EntitySet, LockableEntity, Project};
use crate::domain::ports::LockPolicy;
use crate::domain::value_objects::{Integrity, IntegrityPolicy, VersionPolicy, IGNORED};
use crate::error::DeplockResult;

/// Mark one entity; plugin-private artifacts are marked individually
pub fn mark_entity<P: LockPolicy + ?Sized>(
    entity: &LockableEntity,
    policy: &P,
) -> DeplockResult<LockableEntity> {
    let coordinate = entity.identifier();
    let mut marked = entity.clone();
    if policy.version_policy(coordinate) == VersionPolicy::Ignore {
        marked = marked.with_version(IGNORED);
    }
    if policy.integrity_policy(coordinate) == IntegrityPolicy::Ignore {
        marked = marked.with_integrity(Integrity::Ignored);
    }
    if let Some(nested) = entity.plugin_dependencies() {
        marked = marked.with_plugin_dependencies(mark_set(nested, policy)?);
    }
    Ok(marked)
}

/// Mark every entity of a set
pub fn mark_set<P: LockPolicy + ?Sized>(set: &EntitySet, policy: &P) -> DeplockResult<EntitySet> {
    let mut marked = Vec::with_capacity(set.len());
    for entity in set {
        marked.push(mark_entity(entity, policy)?);
    }
    EntitySet::new(marked)
}

/// Mark the dependency sets and every recorded build category of a project
pub fn mark_ignored<P: LockPolicy + ?Sized>(project: &Project, policy: &P) -> DeplockResult<Project> {
    info!("Marking ignored version and integrity as ignored in lock file");
    project.map_sets(|set| mark_set(set, policy))
}
