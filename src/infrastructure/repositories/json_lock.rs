//! JSON Lock Repository
//!
//! Implements the LockRepository port.
//!
//! Two layouts are supported:
//! - flat: `{"dependencies": [...]}` with every field inline, written when
//!   nothing is profiled and build entities are not locked
//! - version 3: a shared `artifacts` map keyed by
//!   `group:name:type[:classifier]@version`, referenced from `dependencies`,
//!   `profiles.<id>.dependencies` and the optional build categories

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::domain::entities::{Artifact, EntitySet, LockableEntity, ProfiledSet, Project};
use crate::domain::ports::LockRepository;
use crate::domain::value_objects::{Coordinate, Integrity};
use crate::error::{DeplockError, DeplockResult};
use crate::infrastructure::atomic::write_atomic;

/// Format version of the keyed layout
pub const LOCK_FORMAT_VERSION: &str = "3";

/// JSON-based lock repository
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonLockRepository;

impl JsonLockRepository {
    pub fn new() -> Self {
        Self
    }

    /// Parse lock content; `file` only labels errors
    pub fn parse(&self, content: &str, file: &Path) -> DeplockResult<Project> {
        let malformed = |message: String| DeplockError::MalformedLock {
            file: file.to_path_buf(),
            message,
        };
        let json: serde_json::Value =
            serde_json::from_str(content).map_err(|e| malformed(e.to_string()))?;

        match json.get("version") {
            None => {
                let flat: FlatLock =
                    serde_json::from_value(json).map_err(|e| malformed(e.to_string()))?;
                flat.into_project(file)
            }
            Some(serde_json::Value::String(version)) if version == LOCK_FORMAT_VERSION => {
                let keyed: KeyedLock =
                    serde_json::from_value(json).map_err(|e| malformed(e.to_string()))?;
                keyed.into_project(file)
            }
            Some(other) => Err(DeplockError::LockVersionMismatch {
                found: other
                    .as_str()
                    .map(str::to_string)
                    .unwrap_or_else(|| other.to_string()),
                expected: LOCK_FORMAT_VERSION.to_string(),
            }),
        }
    }

    /// Render lock content, pretty-printed with a trailing newline
    pub fn render(&self, project: &Project) -> DeplockResult<String> {
        let mut content = if project.dependencies().has_profiles() || project.is_build_lock() {
            serde_json::to_string_pretty(&KeyedLock::from_project(project))?
        } else {
            serde_json::to_string_pretty(&FlatLock::from_set(
                project.dependencies().default_entities(),
            ))?
        };
        content.push('\n');
        Ok(content)
    }
}

impl LockRepository for JsonLockRepository {
    fn load(&self, path: &Path) -> DeplockResult<Project> {
        if !path.exists() {
            return Err(DeplockError::LockNotFound {
                path: path.to_path_buf(),
            });
        }
        let content = std::fs::read_to_string(path)?;
        self.parse(&content, path)
    }

    fn save(&self, project: &Project, path: &Path) -> DeplockResult<()> {
        let content = self.render(project)?;
        write_atomic(path, content.as_bytes())
    }
}

// === Flat layout ===

#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct FlatLock {
    dependencies: Vec<FlatDependency>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct FlatDependency {
    #[serde(rename = "groupId")]
    group_id: String,
    #[serde(rename = "artifactId")]
    artifact_id: String,
    version: String,
    scope: String,
    #[serde(rename = "type", default = "default_type")]
    artifact_type: String,
    #[serde(default)]
    optional: bool,
    integrity: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    classifier: Option<String>,
}

fn default_type() -> String {
    crate::domain::value_objects::DEFAULT_TYPE.to_string()
}

impl FlatLock {
    fn from_set(set: &EntitySet) -> Self {
        let dependencies = set
            .iter()
            .map(|entity| {
                let coordinate = entity.identifier();
                FlatDependency {
                    group_id: coordinate.group().to_string(),
                    artifact_id: coordinate.name().to_string(),
                    version: entity.version().to_string(),
                    scope: entity.scope().unwrap_or_default().to_string(),
                    artifact_type: coordinate.artifact_type().to_string(),
                    optional: entity.is_optional(),
                    integrity: entity.integrity().lock_value().to_string(),
                    classifier: coordinate.classifier().map(str::to_string),
                }
            })
            .collect();
        Self { dependencies }
    }

    fn into_project(self, file: &Path) -> DeplockResult<Project> {
        let mut entities = Vec::with_capacity(self.dependencies.len());
        for record in self.dependencies {
            let artifact = build_artifact(
                file,
                ArtifactRecord {
                    group_id: record.group_id,
                    artifact_id: record.artifact_id,
                    version: record.version,
                    classifier: record.classifier,
                    artifact_type: record.artifact_type,
                    integrity: record.integrity,
                },
            )?;
            entities.push(LockableEntity::dependency(
                artifact,
                record.scope,
                record.optional,
            ));
        }
        Ok(Project::new(ProfiledSet::new(EntitySet::new(entities)?)))
    }
}

// === Keyed layout ===

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct ArtifactRecord {
    #[serde(rename = "groupId")]
    group_id: String,
    #[serde(rename = "artifactId")]
    artifact_id: String,
    version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    classifier: Option<String>,
    #[serde(rename = "type", default = "default_type")]
    artifact_type: String,
    integrity: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct DependencyRef {
    artifact: String,
    scope: String,
    #[serde(default)]
    optional: bool,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct ProfileRecord {
    dependencies: Vec<DependencyRef>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct EntityRef {
    artifact: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct PluginRef {
    artifact: String,
    #[serde(default)]
    dependencies: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct KeyedLock {
    version: String,
    artifacts: BTreeMap<String, ArtifactRecord>,
    dependencies: Vec<DependencyRef>,
    #[serde(default)]
    profiles: BTreeMap<String, ProfileRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    parents: Option<Vec<EntityRef>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    plugins: Option<Vec<PluginRef>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    extensions: Option<Vec<EntityRef>>,
}

impl KeyedLock {
    fn from_project(project: &Project) -> Self {
        let mut artifacts = BTreeMap::new();
        let profiled = project.dependencies();

        let dependencies = dependency_refs(profiled.default_entities(), &mut artifacts);
        let profiles = profiled
            .profile_entries()
            .map(|(id, set)| {
                (
                    id.to_string(),
                    ProfileRecord {
                        dependencies: dependency_refs(set, &mut artifacts),
                    },
                )
            })
            .collect();

        let parents = project
            .parents()
            .map(|set| entity_refs(set, &mut artifacts));
        let plugins = project.plugins().map(|set| {
            set.iter()
                .map(|plugin| PluginRef {
                    artifact: register(&mut artifacts, plugin.as_artifact()),
                    dependencies: plugin
                        .plugin_dependencies()
                        .map(|nested| {
                            nested
                                .artifacts()
                                .map(|artifact| register(&mut artifacts, artifact))
                                .collect()
                        })
                        .unwrap_or_default(),
                })
                .collect()
        });
        let extensions = project
            .extensions()
            .map(|set| entity_refs(set, &mut artifacts));

        Self {
            version: LOCK_FORMAT_VERSION.to_string(),
            artifacts,
            dependencies,
            profiles,
            parents,
            plugins,
            extensions,
        }
    }

    fn into_project(self, file: &Path) -> DeplockResult<Project> {
        let mut artifacts = BTreeMap::new();
        for (key, record) in self.artifacts {
            artifacts.insert(key, build_artifact(file, record)?);
        }

        let default = dependency_set(&self.dependencies, &artifacts)?;
        let mut by_profile = BTreeMap::new();
        for (id, profile) in self.profiles {
            by_profile.insert(id, dependency_set(&profile.dependencies, &artifacts)?);
        }

        let parents = self
            .parents
            .map(|refs| entity_set(&refs, &artifacts, LockableEntity::parent))
            .transpose()?;
        let extensions = self
            .extensions
            .map(|refs| entity_set(&refs, &artifacts, LockableEntity::extension))
            .transpose()?;
        let plugins = self
            .plugins
            .map(|refs| {
                let mut entities = Vec::with_capacity(refs.len());
                for plugin in &refs {
                    let nested = plugin
                        .dependencies
                        .iter()
                        .map(|key| lookup(&artifacts, key).map(LockableEntity::artifact))
                        .collect::<DeplockResult<Vec<_>>>()?;
                    entities.push(LockableEntity::plugin(
                        lookup(&artifacts, &plugin.artifact)?,
                        EntitySet::new(nested)?,
                    ));
                }
                EntitySet::new(entities)
            })
            .transpose()?;

        Ok(Project::from_parts(
            ProfiledSet::with_profiles(default, by_profile),
            parents,
            plugins,
            extensions,
        ))
    }
}

/// Add an artifact to the shared map and return its key.
fn register(artifacts: &mut BTreeMap<String, ArtifactRecord>, artifact: &Artifact) -> String {
    let key = artifact.lock_key();
    let record = artifact_record(artifact);
    match artifacts.get(&key) {
        Some(existing) if existing.integrity != record.integrity => {
            // first registration wins
            warn!(
                "Artifact {} is recorded with integrity {}; ignoring {}",
                key, existing.integrity, record.integrity
            );
        }
        Some(_) => {}
        None => {
            artifacts.insert(key.clone(), record);
        }
    }
    key
}

fn artifact_record(artifact: &Artifact) -> ArtifactRecord {
    let coordinate = artifact.coordinate();
    ArtifactRecord {
        group_id: coordinate.group().to_string(),
        artifact_id: coordinate.name().to_string(),
        version: artifact.version().to_string(),
        classifier: coordinate.classifier().map(str::to_string),
        artifact_type: coordinate.artifact_type().to_string(),
        integrity: artifact.integrity().lock_value().to_string(),
    }
}

fn dependency_refs(
    set: &EntitySet,
    artifacts: &mut BTreeMap<String, ArtifactRecord>,
) -> Vec<DependencyRef> {
    set.iter()
        .map(|entity| DependencyRef {
            artifact: register(artifacts, entity.as_artifact()),
            scope: entity.scope().unwrap_or_default().to_string(),
            optional: entity.is_optional(),
        })
        .collect()
}

fn entity_refs(set: &EntitySet, artifacts: &mut BTreeMap<String, ArtifactRecord>) -> Vec<EntityRef> {
    set.iter()
        .map(|entity| EntityRef {
            artifact: register(artifacts, entity.as_artifact()),
        })
        .collect()
}

fn build_artifact(file: &Path, record: ArtifactRecord) -> DeplockResult<Artifact> {
    for (field, value) in [
        ("groupId", &record.group_id),
        ("artifactId", &record.artifact_id),
        ("version", &record.version),
        ("type", &record.artifact_type),
        ("integrity", &record.integrity),
    ] {
        if value.trim().is_empty() {
            return Err(DeplockError::MalformedLock {
                file: PathBuf::from(file),
                message: format!("missing value for '{}'", field),
            });
        }
    }
    let coordinate = Coordinate::new(record.group_id, record.artifact_id)
        .with_type(record.artifact_type)
        .with_classifier(record.classifier);
    Ok(Artifact::new(
        coordinate,
        record.version,
        Integrity::from_lock_value(&record.integrity),
    ))
}

fn lookup(artifacts: &BTreeMap<String, Artifact>, key: &str) -> DeplockResult<Artifact> {
    artifacts
        .get(key)
        .cloned()
        .ok_or_else(|| DeplockError::UnknownArtifact {
            key: key.to_string(),
        })
}

fn dependency_set(
    refs: &[DependencyRef],
    artifacts: &BTreeMap<String, Artifact>,
) -> DeplockResult<EntitySet> {
    let entities = refs
        .iter()
        .map(|r| {
            lookup(artifacts, &r.artifact)
                .map(|artifact| LockableEntity::dependency(artifact, r.scope.clone(), r.optional))
        })
        .collect::<DeplockResult<Vec<_>>>()?;
    EntitySet::new(entities)
}

fn entity_set(
    refs: &[EntityRef],
    artifacts: &BTreeMap<String, Artifact>,
    build: impl Fn(Artifact) -> LockableEntity,
) -> DeplockResult<EntitySet> {
    let entities = refs
        .iter()
        .map(|r| lookup(artifacts, &r.artifact).map(&build))
        .collect::<DeplockResult<Vec<_>>>()?;
    EntitySet::new(entities)
}
