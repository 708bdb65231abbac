//! Dependency resolution for one environment
//!
//! Collect the graph, pull out ignored-integrity edges, resolve the artifact
//! behind every remaining edge and assemble one entity set.

use tracing::debug;

use super::extraction::extract_ignored;
use crate::domain::entities::{Artifact, EntitySet, LockableEntity};
use crate::domain::ports::{LockPolicy, Resolver};
use crate::domain::value_objects::Environment;
use crate::error::{DeplockError, DeplockResult};

/// Resolve the dependency set required under `environment`.
///
/// Any resolver failure is reported against the environment's label so the
/// caller can tell which pass failed.
pub fn resolve_dependencies<R, P>(
    resolver: &R,
    environment: &Environment,
    policy: &P,
) -> DeplockResult<EntitySet>
where
    R: Resolver + ?Sized,
    P: LockPolicy + ?Sized,
{
    let graph = resolver
        .collect(environment)
        .map_err(|e| wrap(environment, e))?;
    let extraction = extract_ignored(&graph, policy);

    let mut entities = Vec::with_capacity(extraction.included.len() + extraction.ignored.len());
    for node in &extraction.included {
        let integrity = resolver
            .resolve_artifact(node, environment)
            .map_err(|e| wrap(environment, e))?;
        entities.push(LockableEntity::dependency(
            Artifact::new(node.coordinate.clone(), node.version.clone(), integrity),
            node.scope.clone(),
            node.optional,
        ));
    }
    entities.extend(extraction.ignored);

    let set = EntitySet::new(entities)?;
    debug!(
        environment = %environment,
        count = set.len(),
        "Resolved dependencies"
    );
    Ok(set)
}

fn wrap(environment: &Environment, error: DeplockError) -> DeplockError {
    match error {
        wrapped @ DeplockError::Resolution { .. } => wrapped,
        other => DeplockError::Resolution {
            environment: environment.to_string(),
            message: other.to_string(),
        },
    }
}
