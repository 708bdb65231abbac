//! Configuration type definitions

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::entities::Profile;
use crate::domain::services::{FilterRule, Filters};
use crate::domain::value_objects::{IntegrityPolicy, VersionPolicy};
use crate::error::DeplockResult;

use super::loader::{self, ConfigWarning};

/// Default lock file name, relative to the project root
pub const DEFAULT_LOCK_FILE: &str = "dependencies-lock.json";
/// Default descriptor file name, relative to the project root
pub const DEFAULT_DESCRIPTOR: &str = "deplock-descriptor.json";
/// Configuration file name looked up in the project root
pub const CONFIG_FILE: &str = "deplock.toml";

/// Lock configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LockConfig {
    #[serde(default = "default_lock_file")]
    pub file: PathBuf,

    /// Record ignored versions / integrities as `ignored`
    #[serde(default)]
    pub mark_ignored_as_ignored: bool,

    /// Also lock parents, plugins and extensions
    #[serde(default)]
    pub lock_build: bool,

    #[serde(default)]
    pub skip: bool,
}

impl Default for LockConfig {
    fn default() -> Self {
        Self {
            file: default_lock_file(),
            mark_ignored_as_ignored: false,
            lock_build: false,
            skip: false,
        }
    }
}

fn default_lock_file() -> PathBuf {
    PathBuf::from(DEFAULT_LOCK_FILE)
}

/// Project configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectConfig {
    #[serde(default = "default_descriptor")]
    pub descriptor: PathBuf,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            descriptor: default_descriptor(),
        }
    }
}

fn default_descriptor() -> PathBuf {
    PathBuf::from(DEFAULT_DESCRIPTOR)
}

/// One `[[filters]]` entry; declared order is precedence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct FilterConfig {
    #[serde(default)]
    pub includes: Vec<String>,

    #[serde(default)]
    pub excludes: Vec<String>,

    #[serde(default)]
    pub version: VersionPolicy,

    #[serde(default)]
    pub integrity: IntegrityPolicy,

    #[serde(default)]
    pub allow_missing: bool,

    #[serde(default)]
    pub allow_extraneous: bool,
}

impl FilterConfig {
    pub fn to_rule(&self) -> DeplockResult<FilterRule> {
        Ok(FilterRule::parse(&self.includes, &self.excludes)?
            .with_version(self.version)
            .with_integrity(self.integrity)
            .with_allow_missing(self.allow_missing)
            .with_allow_extraneous(self.allow_extraneous))
    }
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub lock: LockConfig,

    #[serde(default)]
    pub project: ProjectConfig,

    #[serde(default)]
    pub profiles: Vec<Profile>,

    #[serde(default)]
    pub filters: Vec<FilterConfig>,

    /// Property overrides applied to the real environment
    #[serde(default)]
    pub environment: BTreeMap<String, String>,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> DeplockResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> DeplockResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load `deplock.toml` from `project_root`, or defaults when absent
    pub fn load_or_default(project_root: &Path) -> DeplockResult<(Self, Vec<ConfigWarning>)> {
        loader::load_or_default(project_root)
    }

    /// Apply environment variable overrides (DEPLOCK_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    /// Build the policy table from the declared rules
    pub fn filters(&self) -> DeplockResult<Filters> {
        let rules = self
            .filters
            .iter()
            .map(FilterConfig::to_rule)
            .collect::<DeplockResult<Vec<_>>>()?;
        Ok(Filters::new(rules))
    }

    /// Lock file path resolved against `project_root`
    pub fn lock_file(&self, project_root: &Path) -> PathBuf {
        project_root.join(&self.lock.file)
    }

    /// Descriptor path resolved against `project_root`
    pub fn descriptor(&self, project_root: &Path) -> PathBuf {
        project_root.join(&self.project.descriptor)
    }
}
