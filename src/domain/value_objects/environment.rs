//! Environment value object
//!
//! An explicit, disposable resolution context: the properties profile
//! activation is evaluated against, plus a label naming where it came from.
//! Emulated environments are fresh values; nothing is shared between passes.

use std::collections::BTreeMap;
use std::fmt;

/// Property holding the operating system name
pub const OS_NAME: &str = "os.name";
/// Property holding the CPU architecture
pub const OS_ARCH: &str = "os.arch";
/// Property holding the operating system version
pub const OS_VERSION: &str = "os.version";
/// Property holding the path-list separator
pub const PATH_SEPARATOR: &str = "path.separator";

/// Where an environment came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnvironmentOrigin {
    /// The host the tool runs on
    Current,
    /// Synthesized to force a profile active
    Emulated { profile: String },
}

/// Resolution context for one pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Environment {
    origin: EnvironmentOrigin,
    properties: BTreeMap<String, String>,
}

impl Environment {
    /// Build the current environment from explicit properties
    pub fn current(properties: BTreeMap<String, String>) -> Self {
        Self {
            origin: EnvironmentOrigin::Current,
            properties,
        }
    }

    /// Properties describing the host this process runs on
    pub fn host_properties() -> BTreeMap<String, String> {
        let os_name = match std::env::consts::OS {
            "macos" => "mac os x",
            "windows" => "windows",
            other => other,
        };
        let arch = match std::env::consts::ARCH {
            "x86_64" if std::env::consts::OS != "macos" => "amd64",
            "x86" => "x86",
            other => other,
        };
        let separator = if cfg!(windows) { ";" } else { ":" };

        let mut properties = BTreeMap::new();
        properties.insert(OS_NAME.to_string(), os_name.to_string());
        properties.insert(OS_ARCH.to_string(), arch.to_string());
        properties.insert(PATH_SEPARATOR.to_string(), separator.to_string());
        properties
    }

    /// Fresh environment forcing `profile` active: base properties plus overrides
    pub fn emulated(
        profile: impl Into<String>,
        base: &Environment,
        overrides: BTreeMap<String, String>,
    ) -> Self {
        let mut properties = base.properties.clone();
        properties.extend(overrides);
        Self {
            origin: EnvironmentOrigin::Emulated {
                profile: profile.into(),
            },
            properties,
        }
    }

    pub fn property(&self, key: &str) -> Option<&str> {
        self.properties.get(key).map(String::as_str)
    }

    pub fn properties(&self) -> &BTreeMap<String, String> {
        &self.properties
    }

    /// Path separator of the host (`:` when unknown)
    pub fn path_separator(&self) -> &str {
        self.property(PATH_SEPARATOR).unwrap_or(":")
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.origin {
            EnvironmentOrigin::Current => write!(f, "current environment"),
            EnvironmentOrigin::Emulated { profile } => write!(f, "profile '{}'", profile),
        }
    }
}
