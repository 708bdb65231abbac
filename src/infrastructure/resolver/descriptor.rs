//! Descriptor-backed resolver
//!
//! Reads a JSON project descriptor declaring the dependency tree, profile
//! blocks with OS activation and the build entities. A graph is assembled
//! from scratch on every `collect`, so nothing resolved under one
//! environment is reused under another.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::domain::entities::{
    Activation, Artifact, BuildEntities, EntitySet, LockableEntity, Profile,
};
use crate::domain::ports::{DependencyGraph, GraphNode, ProfileActivator, ProjectSource, Resolver};
use crate::domain::services::OsProfileActivator;
use crate::domain::value_objects::{Coordinate, Environment, Integrity, DEFAULT_TYPE};
use crate::error::{DeplockError, DeplockResult};

const DEFAULT_SCOPE: &str = "compile";

#[derive(Debug, Clone, Deserialize)]
struct DeclaredArtifact {
    #[serde(rename = "groupId")]
    group_id: String,
    #[serde(rename = "artifactId")]
    artifact_id: String,
    version: String,
    #[serde(rename = "type", default)]
    artifact_type: Option<String>,
    #[serde(default)]
    classifier: Option<String>,
    /// Declared digest, recorded verbatim
    #[serde(default)]
    integrity: Option<String>,
    /// Artifact file, digested with SHA-512 (relative to the descriptor)
    #[serde(default)]
    file: Option<PathBuf>,
}

impl DeclaredArtifact {
    fn coordinate(&self) -> Coordinate {
        Coordinate::new(&self.group_id, &self.artifact_id)
            .with_type(self.artifact_type.as_deref().unwrap_or(DEFAULT_TYPE))
            .with_classifier(self.classifier.clone())
    }
}

#[derive(Debug, Clone, Deserialize)]
struct DeclaredDependency {
    #[serde(flatten)]
    artifact: DeclaredArtifact,
    #[serde(default)]
    scope: Option<String>,
    #[serde(default)]
    optional: bool,
    #[serde(default)]
    dependencies: Vec<DeclaredDependency>,
}

#[derive(Debug, Clone, Deserialize)]
struct DeclaredPlugin {
    #[serde(flatten)]
    artifact: DeclaredArtifact,
    #[serde(default)]
    dependencies: Vec<DeclaredArtifact>,
}

#[derive(Debug, Clone, Deserialize)]
struct DeclaredProfile {
    id: String,
    #[serde(default)]
    activation: Option<Activation>,
    #[serde(default)]
    dependencies: Vec<DeclaredDependency>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct Descriptor {
    #[serde(default)]
    dependencies: Vec<DeclaredDependency>,
    #[serde(default)]
    profiles: Vec<DeclaredProfile>,
    #[serde(default)]
    parents: Vec<DeclaredArtifact>,
    #[serde(default)]
    plugins: Vec<DeclaredPlugin>,
    #[serde(default)]
    extensions: Vec<DeclaredArtifact>,
}

/// Where an artifact's integrity comes from
#[derive(Debug, Clone)]
enum IntegritySource {
    Declared(String),
    File(PathBuf),
}

/// Resolver reading a JSON project descriptor
#[derive(Debug, Clone)]
pub struct DescriptorResolver {
    base_dir: PathBuf,
    descriptor: Descriptor,
    sources: HashMap<(Coordinate, String), IntegritySource>,
    activator: OsProfileActivator,
}

impl DescriptorResolver {
    /// Read the descriptor at `path`; files resolve relative to its directory
    pub fn load(path: &Path) -> DeplockResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| DeplockError::InvalidDescriptor {
            file: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let base_dir = path.parent().map(Path::to_path_buf).unwrap_or_default();
        Self::parse(&content, path, base_dir)
    }

    /// Parse descriptor content; `file` only labels errors
    pub fn parse(content: &str, file: &Path, base_dir: PathBuf) -> DeplockResult<Self> {
        let descriptor: Descriptor =
            serde_json::from_str(content).map_err(|e| DeplockError::InvalidDescriptor {
                file: file.to_path_buf(),
                message: e.to_string(),
            })?;

        let mut sources = HashMap::new();
        let mut index = |artifact: &DeclaredArtifact| {
            let source = match (&artifact.integrity, &artifact.file) {
                (Some(digest), _) => Some(IntegritySource::Declared(digest.clone())),
                (None, Some(file)) => Some(IntegritySource::File(file.clone())),
                (None, None) => None,
            };
            if let Some(source) = source {
                sources
                    .entry((artifact.coordinate(), artifact.version.clone()))
                    .or_insert(source);
            }
        };
        let mut pending: Vec<&DeclaredDependency> = descriptor
            .dependencies
            .iter()
            .chain(descriptor.profiles.iter().flat_map(|p| &p.dependencies))
            .collect();
        while let Some(dependency) = pending.pop() {
            index(&dependency.artifact);
            pending.extend(&dependency.dependencies);
        }
        for plugin in &descriptor.plugins {
            index(&plugin.artifact);
            plugin.dependencies.iter().for_each(&mut index);
        }
        descriptor
            .parents
            .iter()
            .chain(&descriptor.extensions)
            .for_each(&mut index);

        Ok(Self {
            base_dir,
            descriptor,
            sources,
            activator: OsProfileActivator::new(),
        })
    }

    fn integrity_of(&self, coordinate: &Coordinate, version: &str) -> DeplockResult<Integrity> {
        match self.sources.get(&(coordinate.clone(), version.to_string())) {
            Some(IntegritySource::Declared(digest)) => Ok(Integrity::from_lock_value(digest)),
            Some(IntegritySource::File(file)) => {
                let bytes = std::fs::read(self.base_dir.join(file))?;
                Ok(Integrity::sha512_of(&bytes))
            }
            None => Err(DeplockError::UnknownArtifact {
                key: format!("{}@{} (no integrity or file declared)", coordinate, version),
            }),
        }
    }

    fn resolve_declared(&self, artifact: &DeclaredArtifact) -> DeplockResult<Artifact> {
        let coordinate = artifact.coordinate();
        let integrity = self.integrity_of(&coordinate, &artifact.version)?;
        Ok(Artifact::new(coordinate, artifact.version.clone(), integrity))
    }

    fn declared_set(
        &self,
        artifacts: &[DeclaredArtifact],
        build: impl Fn(Artifact) -> LockableEntity,
    ) -> DeplockResult<EntitySet> {
        let entities = artifacts
            .iter()
            .map(|artifact| self.resolve_declared(artifact).map(&build))
            .collect::<DeplockResult<Vec<_>>>()?;
        EntitySet::new(entities)
    }
}

fn graph_node(dependency: &DeclaredDependency) -> GraphNode {
    GraphNode::new(
        dependency.artifact.coordinate(),
        dependency.artifact.version.clone(),
        dependency.scope.as_deref().unwrap_or(DEFAULT_SCOPE),
    )
    .optional(dependency.optional)
    .with_children(dependency.dependencies.iter().map(graph_node).collect())
}

impl Resolver for DescriptorResolver {
    fn collect(&self, environment: &Environment) -> DeplockResult<DependencyGraph> {
        let mut nodes: Vec<GraphNode> = self.descriptor.dependencies.iter().map(graph_node).collect();
        for declared in &self.descriptor.profiles {
            let profile = Profile {
                id: declared.id.clone(),
                activation: declared.activation.clone(),
            };
            // blocks without an OS clause never activate on their own
            if profile.os().map_or(true, |os| os.is_empty()) {
                continue;
            }
            if self.activator.is_active(&profile, environment)? {
                debug!("Descriptor profile {} is active for {}", profile.id, environment);
                nodes.extend(declared.dependencies.iter().map(graph_node));
            }
        }
        Ok(DependencyGraph::new(nodes))
    }

    fn resolve_artifact(&self, node: &GraphNode, _environment: &Environment) -> DeplockResult<Integrity> {
        self.integrity_of(&node.coordinate, &node.version)
    }
}

impl ProjectSource for DescriptorResolver {
    fn build_entities(&self) -> DeplockResult<BuildEntities> {
        let mut plugins = Vec::with_capacity(self.descriptor.plugins.len());
        for plugin in &self.descriptor.plugins {
            let nested = self.declared_set(&plugin.dependencies, LockableEntity::artifact)?;
            plugins.push(LockableEntity::plugin(
                self.resolve_declared(&plugin.artifact)?,
                nested,
            ));
        }

        Ok(BuildEntities {
            parents: self.declared_set(&self.descriptor.parents, LockableEntity::parent)?,
            plugins: EntitySet::new(plugins)?,
            extensions: self.declared_set(&self.descriptor.extensions, LockableEntity::extension)?,
        })
    }

    fn profiles(&self) -> Vec<Profile> {
        self.descriptor
            .profiles
            .iter()
            .map(|declared| Profile {
                id: declared.id.clone(),
                activation: declared.activation.clone(),
            })
            .collect()
    }
}
