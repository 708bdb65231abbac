//! In-memory collaborators shared by the use case tests

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::path::Path;

use crate::domain::entities::{
    Activation, ActivationOs, Artifact, BuildEntities, EntitySet, LockableEntity, Profile, Project,
};
use crate::domain::ports::{DependencyGraph, GraphNode, LockRepository, ProjectSource, Resolver};
use crate::domain::value_objects::{Coordinate, Environment, Integrity, OS_NAME, PATH_SEPARATOR};
use crate::error::{DeplockError, DeplockResult};

/// Lock repository holding one project in memory
#[derive(Default)]
pub struct MemoryLock {
    pub stored: RefCell<Option<Project>>,
}

impl MemoryLock {
    pub fn holding(project: Project) -> Self {
        Self {
            stored: RefCell::new(Some(project)),
        }
    }
}

impl LockRepository for &MemoryLock {
    fn load(&self, path: &Path) -> DeplockResult<Project> {
        self.stored
            .borrow()
            .clone()
            .ok_or_else(|| DeplockError::LockNotFound {
                path: path.to_path_buf(),
            })
    }

    fn save(&self, project: &Project, _path: &Path) -> DeplockResult<()> {
        *self.stored.borrow_mut() = Some(project.clone());
        Ok(())
    }
}

/// Project whose graph depends on the OS name: `g:core` everywhere, plus
/// `g:win-shim` on windows. Versions and digests can be swapped per test.
#[derive(Clone)]
pub struct FakeProject {
    pub core_version: String,
    pub digests: BTreeMap<String, String>,
    pub profiles: Vec<Profile>,
    pub build: BuildEntities,
}

impl FakeProject {
    pub fn new() -> Self {
        Self {
            core_version: "1".to_string(),
            digests: BTreeMap::new(),
            profiles: Vec::new(),
            build: BuildEntities::default(),
        }
    }

    pub fn with_windows_profile(mut self) -> Self {
        self.profiles = vec![family("winOnly", "windows")];
        self
    }
}

impl Resolver for FakeProject {
    fn collect(&self, environment: &Environment) -> DeplockResult<DependencyGraph> {
        let mut nodes = vec![GraphNode::new(
            Coordinate::new("g", "core"),
            self.core_version.clone(),
            "compile",
        )];
        if environment.property(OS_NAME) == Some("windows") {
            nodes.push(GraphNode::new(Coordinate::new("g", "win-shim"), "1", "runtime"));
        }
        Ok(DependencyGraph::new(nodes))
    }

    fn resolve_artifact(&self, node: &GraphNode, _environment: &Environment) -> DeplockResult<Integrity> {
        let digest = self
            .digests
            .get(node.coordinate.name())
            .cloned()
            .unwrap_or_else(|| format!("sha512:{}", node.coordinate.name()));
        Ok(Integrity::Digest(digest))
    }
}

impl ProjectSource for FakeProject {
    fn build_entities(&self) -> DeplockResult<BuildEntities> {
        Ok(self.build.clone())
    }

    fn profiles(&self) -> Vec<Profile> {
        self.profiles.clone()
    }
}

pub fn linux() -> Environment {
    host("linux", ":")
}

pub fn host(name: &str, separator: &str) -> Environment {
    let mut properties = BTreeMap::new();
    properties.insert(OS_NAME.to_string(), name.to_string());
    properties.insert(PATH_SEPARATOR.to_string(), separator.to_string());
    Environment::current(properties)
}

pub fn family(id: &str, family: &str) -> Profile {
    Profile::new(id, Activation::os(ActivationOs::family(family)))
}

pub fn extension(name: &str, version: &str) -> EntitySet {
    let artifact = Artifact::new(
        Coordinate::new("org.ext", name),
        version,
        Integrity::Digest(format!("sha512:{}", name)),
    );
    EntitySet::new(vec![LockableEntity::extension(artifact)]).unwrap()
}
