use super::*;
use crate::domain::entities::{Activation, ActivationOs, Artifact, LockableEntity};
use crate::domain::ports::{DependencyGraph, GraphNode, StrictPolicy};
use crate::domain::services::OsProfileActivator;
use crate::domain::value_objects::{Coordinate, Integrity, OS_NAME, PATH_SEPARATOR};
use crate::error::DeplockError;
use std::cell::Cell;
use std::collections::BTreeMap;

/// Resolver whose graph depends on the emulated OS name
struct OsResolver {
    collected: Cell<usize>,
}

impl OsResolver {
    fn new() -> Self {
        Self {
            collected: Cell::new(0),
        }
    }
}

impl Resolver for OsResolver {
    fn collect(&self, environment: &Environment) -> DeplockResult<DependencyGraph> {
        self.collected.set(self.collected.get() + 1);
        let mut nodes = vec![GraphNode::new(Coordinate::new("g", "core"), "1", "compile")];
        match environment.property(OS_NAME) {
            Some("windows") => {
                nodes.push(GraphNode::new(Coordinate::new("g", "win-shim"), "1", "runtime"))
            }
            Some("darwin") => {
                nodes.push(GraphNode::new(Coordinate::new("g", "mac-shim"), "1", "runtime"));
                // same coordinate, different version: never shared
                nodes[0] = GraphNode::new(Coordinate::new("g", "core"), "2", "compile");
            }
            _ => {}
        }
        Ok(DependencyGraph::new(nodes))
    }

    fn resolve_artifact(
        &self,
        node: &GraphNode,
        _environment: &Environment,
    ) -> DeplockResult<Integrity> {
        Ok(Integrity::sha512_of(
            format!("{}@{}", node.coordinate, node.version).as_bytes(),
        ))
    }
}

fn linux() -> Environment {
    let mut properties = BTreeMap::new();
    properties.insert(OS_NAME.to_string(), "linux".to_string());
    properties.insert(PATH_SEPARATOR.to_string(), ":".to_string());
    Environment::current(properties)
}

fn family(id: &str, family: &str) -> Profile {
    Profile::new(id, Activation::os(ActivationOs::family(family)))
}

fn names(set: &EntitySet) -> Vec<String> {
    set.iter().map(|e| e.identifier().to_string()).collect()
}

fn dependency(name: &str, version: &str) -> LockableEntity {
    LockableEntity::dependency(
        Artifact::new(
            Coordinate::new("g", name),
            version,
            Integrity::Digest(version.to_string()),
        ),
        "compile",
        false,
    )
}

// === Partitioning over resolvers ===

#[test]
fn windows_only_profile_gets_its_shim() {
    let resolver = OsResolver::new();
    let activator = OsProfileActivator::new();
    let profiles = vec![family("winOnly", "windows")];

    let profiled = Partitioner::new(&resolver, &activator, &StrictPolicy)
        .partition(&profiles, &linux())
        .unwrap();

    assert_eq!(names(profiled.default_entities()), ["g:core"]);
    assert_eq!(names(profiled.profile("winOnly").unwrap()), ["g:win-shim"]);
    assert_eq!(resolver.collected.get(), 2);
}

#[test]
fn active_profile_receives_current_residual() {
    let resolver = OsResolver::new();
    let activator = OsProfileActivator::new();
    let profiles = vec![family("unix", "unix"), family("mac", "mac")];

    let profiled = Partitioner::new(&resolver, &activator, &StrictPolicy)
        .partition(&profiles, &linux())
        .unwrap();

    // g:core@2 under mac differs from g:core@1, so nothing is shared
    assert!(profiled.default_entities().is_empty());
    assert_eq!(names(profiled.profile("unix").unwrap()), ["g:core"]);
    assert_eq!(
        names(profiled.profile("mac").unwrap()),
        ["g:core", "g:mac-shim"]
    );
}

#[test]
fn unsupported_activation_fails_before_resolution() {
    let resolver = OsResolver::new();
    let activator = OsProfileActivator::new();
    let profiles = vec![family("winOnly", "windows"), family("notWin", "!windows")];

    // `!windows` is active on linux, so use a host where it is disabled
    let mut properties = BTreeMap::new();
    properties.insert(OS_NAME.to_string(), "windows 10".to_string());
    properties.insert(PATH_SEPARATOR.to_string(), ";".to_string());
    let windows = Environment::current(properties);

    let err = Partitioner::new(&resolver, &activator, &StrictPolicy)
        .partition(&profiles, &windows)
        .unwrap_err();

    assert!(matches!(err, DeplockError::UnsupportedActivation { .. }));
    assert_eq!(resolver.collected.get(), 0);
}

#[test]
fn missing_activation_fails_before_resolution() {
    let resolver = OsResolver::new();
    let activator = OsProfileActivator::new();
    let profiles = vec![Profile {
        id: "bare".to_string(),
        activation: Some(Activation::default()),
    }];

    let err = Partitioner::new(&resolver, &activator, &StrictPolicy)
        .partition(&profiles, &linux())
        .unwrap_err();

    assert!(matches!(err, DeplockError::MissingActivation { .. }));
    assert_eq!(resolver.collected.get(), 0);
}

#[test]
fn repeated_profile_id_fails_before_resolution() {
    let resolver = OsResolver::new();
    let activator = OsProfileActivator::new();
    let profiles = vec![family("shim", "windows"), family("shim", "mac")];

    let err = Partitioner::new(&resolver, &activator, &StrictPolicy)
        .partition(&profiles, &linux())
        .unwrap_err();

    assert!(matches!(err, DeplockError::DuplicateProfile { .. }));
    assert_eq!(resolver.collected.get(), 0);
}

#[test]
fn no_profiles_keeps_everything_shared() {
    let resolver = OsResolver::new();
    let activator = OsProfileActivator::new();

    let profiled = Partitioner::new(&resolver, &activator, &StrictPolicy)
        .partition(&[], &linux())
        .unwrap();

    assert_eq!(names(profiled.default_entities()), ["g:core"]);
    assert!(!profiled.has_profiles());
}

// === Pure split ===

#[test]
fn split_assigns_same_residual_to_every_active_profile() {
    let current = EntitySet::new(vec![dependency("core", "1"), dependency("extra", "1")]).unwrap();
    let disabled = vec![(
        "other".to_string(),
        EntitySet::new(vec![dependency("core", "1")]).unwrap(),
    )];

    let profiled = split(current, &["a", "b"], disabled);

    assert_eq!(names(profiled.default_entities()), ["g:core"]);
    assert_eq!(profiled.profile("a"), profiled.profile("b"));
    assert_eq!(names(profiled.profile("a").unwrap()), ["g:extra"]);
    assert!(profiled.profile("other").unwrap().is_empty());
}

#[test]
fn split_reproduces_each_resolved_set() {
    let current = EntitySet::new(vec![dependency("core", "1"), dependency("x", "1")]).unwrap();
    let other = EntitySet::new(vec![dependency("core", "1"), dependency("x", "2")]).unwrap();

    let profiled = split(
        current.clone(),
        &["here"],
        vec![("there".to_string(), other.clone())],
    );

    assert_eq!(profiled.merged_for_profiles(&["here"]).unwrap(), current);
    assert_eq!(profiled.merged_for_profiles(&["there"]).unwrap(), other);
}
