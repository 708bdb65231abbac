//! Command handlers
//!
//! Load the project context, run one use case, print its output.

mod lock;
mod profiles;
mod verify;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use deplock::application::RunOptions;
use deplock::config::Config;
use deplock::presentation::output::render_config_warning;

pub use lock::cmd_lock;
pub use profiles::cmd_profiles;
pub use verify::cmd_verify;

/// Project directory, its configuration and the `-D` overrides
pub struct ProjectContext {
    pub root: PathBuf,
    pub config: Config,
    pub properties: BTreeMap<String, String>,
}

impl ProjectContext {
    /// Load `deplock.toml` from `root` (defaults when absent) and report unknown keys
    pub fn load(root: &Path, properties: &[(String, String)]) -> Result<Self> {
        let (config, warnings) = Config::load_or_default(root)
            .with_context(|| format!("failed to load configuration from {}", root.display()))?;
        for warning in &warnings {
            eprintln!("{}", render_config_warning(warning));
        }

        Ok(Self {
            root: root.to_path_buf(),
            config,
            properties: properties.iter().cloned().collect(),
        })
    }

    pub fn descriptor(&self) -> PathBuf {
        self.config.descriptor(&self.root)
    }

    /// Run options, with an optional lock file override
    pub fn options(&self, file: Option<PathBuf>) -> Result<RunOptions> {
        let mut config = self.config.clone();
        if let Some(file) = file {
            config.lock.file = file;
        }
        Ok(RunOptions::from_config(&config, &self.root, &self.properties)?)
    }
}
