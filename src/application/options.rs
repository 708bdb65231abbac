//! Run Options
//!
//! Everything a lock / verify / profiles run needs, resolved from the
//! configuration and command-line overrides.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::domain::entities::{ensure_unique_ids, Profile};
use crate::domain::ports::ProjectSource;
use crate::domain::services::Filters;
use crate::domain::value_objects::Environment;
use crate::error::DeplockResult;

/// Options shared by the use cases
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Absolute or project-relative lock file path
    pub lock_file: PathBuf,
    /// Profiles declared in configuration; empty means "ask the project"
    pub profiles: Vec<Profile>,
    /// Policy table
    pub filters: Filters,
    /// The real environment of this run
    pub environment: Environment,
    pub skip: bool,
    /// Record ignored versions / integrities as `ignored`
    pub mark_ignored: bool,
    /// Also lock parents, plugins and extensions
    pub lock_build: bool,
}

impl RunOptions {
    pub fn new(lock_file: impl Into<PathBuf>, environment: Environment) -> Self {
        Self {
            lock_file: lock_file.into(),
            profiles: Vec::new(),
            filters: Filters::default(),
            environment,
            skip: false,
            mark_ignored: false,
            lock_build: false,
        }
    }

    /// Options for the project at `project_root`.
    ///
    /// The environment is the host's properties, then `[environment]` from
    /// the config, then `overrides` (command-line `-D`), later entries winning.
    pub fn from_config(
        config: &Config,
        project_root: &Path,
        overrides: &BTreeMap<String, String>,
    ) -> DeplockResult<Self> {
        ensure_unique_ids(&config.profiles)?;

        let mut properties = Environment::host_properties();
        properties.extend(config.environment.clone());
        properties.extend(overrides.clone());

        Ok(Self {
            lock_file: config.lock_file(project_root),
            profiles: config.profiles.clone(),
            filters: config.filters()?,
            environment: Environment::current(properties),
            skip: config.lock.skip,
            mark_ignored: config.lock.mark_ignored_as_ignored,
            lock_build: config.lock.lock_build,
        })
    }

    pub fn with_profiles(mut self, profiles: Vec<Profile>) -> Self {
        self.profiles = profiles;
        self
    }

    pub fn with_filters(mut self, filters: Filters) -> Self {
        self.filters = filters;
        self
    }

    pub fn with_skip(mut self, skip: bool) -> Self {
        self.skip = skip;
        self
    }

    pub fn with_mark_ignored(mut self, mark_ignored: bool) -> Self {
        self.mark_ignored = mark_ignored;
        self
    }

    pub fn with_lock_build(mut self, lock_build: bool) -> Self {
        self.lock_build = lock_build;
        self
    }

    /// Configured profiles, falling back to the ones the project declares
    pub fn effective_profiles<S: ProjectSource + ?Sized>(&self, source: &S) -> Vec<Profile> {
        if self.profiles.is_empty() {
            source.profiles()
        } else {
            self.profiles.clone()
        }
    }
}
