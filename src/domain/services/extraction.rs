//! Ignored-integrity extraction
//!
//! Walks a collected graph once per resolution pass. Every edge whose
//! integrity policy is `Ignore` is pulled out before artifact resolution and
//! replaced by a placeholder dependency carrying the declared version, scope
//! and optional flag with integrity `Ignored`. Each call returns a fresh
//! result, so nothing leaks from one environment's pass into the next.

use std::collections::HashSet;

use crate::domain::entities::{Artifact, LockableEntity};
use crate::domain::ports::{DependencyGraph, GraphNode, LockPolicy};
use crate::domain::value_objects::{Coordinate, Integrity, IntegrityPolicy};

/// Outcome of one extraction pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    /// Edges to resolve, flattened in visit order (children stripped)
    pub included: Vec<GraphNode>,
    /// Placeholders for edges excluded from resolution
    pub ignored: Vec<LockableEntity>,
}

/// Split `graph` into edges to resolve and ignored-integrity placeholders.
///
/// The synthetic root is always accepted. Children of an excluded edge are
/// still visited and judged on their own. A coordinate reached twice keeps
/// its first occurrence.
pub fn extract_ignored<P: LockPolicy + ?Sized>(graph: &DependencyGraph, policy: &P) -> Extraction {
    let mut extraction = Extraction::default();
    let mut visited: HashSet<Coordinate> = HashSet::new();
    for node in &graph.dependencies {
        visit(node, policy, &mut visited, &mut extraction);
    }
    extraction
}

fn visit<P: LockPolicy + ?Sized>(
    node: &GraphNode,
    policy: &P,
    visited: &mut HashSet<Coordinate>,
    extraction: &mut Extraction,
) {
    if visited.insert(node.coordinate.clone()) {
        if policy.integrity_policy(&node.coordinate) == IntegrityPolicy::Ignore {
            extraction.ignored.push(placeholder(node));
        } else {
            extraction.included.push(GraphNode {
                children: Vec::new(),
                ..node.clone()
            });
        }
    }

    for child in &node.children {
        visit(child, policy, visited, extraction);
    }
}

fn placeholder(node: &GraphNode) -> LockableEntity {
    LockableEntity::dependency(
        Artifact::new(node.coordinate.clone(), node.version.clone(), Integrity::Ignored),
        node.scope.clone(),
        node.optional,
    )
}
