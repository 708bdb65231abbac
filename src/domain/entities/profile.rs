//! Profile entity - a conditionally activated slice of the build
//!
//! Only OS-based activation is modelled; profiles are flat and independent.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{DeplockError, DeplockResult};

/// Profile declared for locking
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub id: String,
    #[serde(default)]
    pub activation: Option<Activation>,
}

impl Profile {
    pub fn new(id: impl Into<String>, activation: Activation) -> Self {
        Self {
            id: id.into(),
            activation: Some(activation),
        }
    }

    /// OS clause, if any activation declares one
    pub fn os(&self) -> Option<&ActivationOs> {
        self.activation.as_ref().and_then(|a| a.os.as_ref())
    }
}

/// Reject profile lists where an id appears twice
pub fn ensure_unique_ids(profiles: &[Profile]) -> DeplockResult<()> {
    let mut seen = HashSet::new();
    match profiles.iter().find(|profile| !seen.insert(profile.id.as_str())) {
        Some(duplicate) => Err(DeplockError::DuplicateProfile {
            profile: duplicate.id.clone(),
        }),
        None => Ok(()),
    }
}

/// Activation criteria of a profile
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Activation {
    #[serde(default)]
    pub os: Option<ActivationOs>,
}

impl Activation {
    pub fn os(os: ActivationOs) -> Self {
        Self { os: Some(os) }
    }
}

/// OS activation clause; every present field must match
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ActivationOs {
    #[serde(default)]
    pub family: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub arch: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
}

impl ActivationOs {
    pub fn family(family: impl Into<String>) -> Self {
        Self {
            family: Some(family.into()),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.family.is_none() && self.name.is_none() && self.arch.is_none() && self.version.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_from_toml() {
        let profile: Profile = toml::from_str(
            r#"
id = "winOnly"
[activation.os]
family = "windows"
arch = "amd64"
"#,
        )
        .unwrap();

        assert_eq!(profile.id, "winOnly");
        let os = profile.os().unwrap();
        assert_eq!(os.family.as_deref(), Some("windows"));
        assert_eq!(os.arch.as_deref(), Some("amd64"));
        assert!(os.name.is_none());
    }

    #[test]
    fn profile_without_activation_has_no_os() {
        let profile: Profile = toml::from_str(r#"id = "bare""#).unwrap();
        assert!(profile.os().is_none());
    }

    #[test]
    fn repeated_id_is_rejected() {
        let profiles = vec![
            Profile::new("win", Activation::os(ActivationOs::family("windows"))),
            Profile::new("mac", Activation::os(ActivationOs::family("mac"))),
            Profile::new("win", Activation::os(ActivationOs::family("unix"))),
        ];

        let err = ensure_unique_ids(&profiles).unwrap_err();
        assert!(matches!(err, DeplockError::DuplicateProfile { ref profile } if profile == "win"));
        assert!(ensure_unique_ids(&profiles[..2]).is_ok());
    }

    #[test]
    fn empty_os_clause() {
        assert!(ActivationOs::default().is_empty());
        assert!(!ActivationOs::family("unix").is_empty());
    }
}
