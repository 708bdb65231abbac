//! Resolver port - the external dependency-graph resolver
//!
//! Resolution is split in two: collecting the graph of declared edges for an
//! environment, then resolving the artifact behind each edge that survives
//! ignored-integrity extraction. Artifacts whose integrity is ignored are
//! never resolved.

use crate::domain::entities::{BuildEntities, Profile};
use crate::domain::value_objects::{Coordinate, Environment, Integrity};
use crate::error::DeplockResult;

/// One edge of the resolved graph, as declared
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphNode {
    pub coordinate: Coordinate,
    pub version: String,
    pub scope: String,
    pub optional: bool,
    pub children: Vec<GraphNode>,
}

impl GraphNode {
    pub fn new(coordinate: Coordinate, version: impl Into<String>, scope: impl Into<String>) -> Self {
        Self {
            coordinate,
            version: version.into(),
            scope: scope.into(),
            optional: false,
            children: Vec::new(),
        }
    }

    pub fn optional(mut self, optional: bool) -> Self {
        self.optional = optional;
        self
    }

    pub fn with_children(mut self, children: Vec<GraphNode>) -> Self {
        self.children = children;
        self
    }
}

/// Graph below the synthetic project root
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyGraph {
    pub dependencies: Vec<GraphNode>,
}

impl DependencyGraph {
    pub fn new(dependencies: Vec<GraphNode>) -> Self {
        Self { dependencies }
    }
}

/// Dependency resolver for one project
///
/// Every call receives its own environment value; implementations must not
/// reuse descriptors resolved under a different environment.
pub trait Resolver {
    /// Collect the dependency graph required under `environment`
    fn collect(&self, environment: &Environment) -> DeplockResult<DependencyGraph>;

    /// Resolve the artifact behind `node` and report its integrity
    fn resolve_artifact(&self, node: &GraphNode, environment: &Environment)
        -> DeplockResult<Integrity>;
}

/// Resolver that also knows the project's build entities and profiles
pub trait ProjectSource: Resolver {
    /// Parents, plugins and extensions of the build
    fn build_entities(&self) -> DeplockResult<BuildEntities>;

    /// Profiles the project itself declares
    fn profiles(&self) -> Vec<Profile>;
}
