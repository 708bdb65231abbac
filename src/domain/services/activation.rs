//! OS profile activation
//!
//! Evaluates `os` activation clauses against environment properties using
//! the usual OS family rules, and synthesizes emulated environments through
//! [`emulate_os_properties`].

use super::emulation::emulate_os_properties;
use crate::domain::entities::{ActivationOs, Profile};
use crate::domain::ports::ProfileActivator;
use crate::domain::value_objects::{Environment, OS_ARCH, OS_NAME, OS_VERSION};
use crate::error::{DeplockError, DeplockResult};

/// Profile activator for OS-based activation
#[derive(Debug, Clone, Copy, Default)]
pub struct OsProfileActivator;

impl OsProfileActivator {
    pub fn new() -> Self {
        Self
    }

    fn clause<'a>(&self, profile: &'a Profile) -> DeplockResult<&'a ActivationOs> {
        profile
            .os()
            .filter(|os| !os.is_empty())
            .ok_or_else(|| DeplockError::MissingActivation {
                profile: profile.id.clone(),
            })
    }
}

impl ProfileActivator for OsProfileActivator {
    fn is_active(&self, profile: &Profile, environment: &Environment) -> DeplockResult<bool> {
        let os = self.clause(profile)?;
        let name = environment.property(OS_NAME).unwrap_or_default().to_lowercase();
        let separator = environment.path_separator();

        let family_ok = match &os.family {
            Some(family) => match family.strip_prefix('!') {
                Some(family) => !is_family(&name, separator, family),
                None => is_family(&name, separator, family),
            },
            None => true,
        };

        Ok(family_ok
            && matches_value(os.name.as_deref(), &name)
            && matches_value(
                os.arch.as_deref(),
                environment.property(OS_ARCH).unwrap_or_default(),
            )
            && matches_value(
                os.version.as_deref(),
                environment.property(OS_VERSION).unwrap_or_default(),
            ))
    }

    fn emulate_environment(&self, profile: &Profile, base: &Environment) -> DeplockResult<Environment> {
        let os = self.clause(profile)?;
        let overrides = emulate_os_properties(&profile.id, os, base.path_separator())?;
        Ok(Environment::emulated(profile.id.clone(), base, overrides))
    }
}

/// Whether an OS named `name` (lowercase) belongs to `family`
fn is_family(name: &str, separator: &str, family: &str) -> bool {
    let windows = name.contains("windows");
    let win9x = windows
        && ["95", "98", "me", "ce"]
            .iter()
            .any(|marker| name.contains(marker));
    match family.to_lowercase().as_str() {
        "windows" => windows,
        "win9x" => win9x,
        "winnt" => windows && !win9x,
        "os/2" => name.contains("os/2"),
        "netware" => name.contains("netware"),
        "dos" => separator == ";" && !name.contains("netware"),
        "mac" => name.contains("mac") || name.contains("darwin"),
        "tandem" => name.contains("nonstop_kernel"),
        "unix" => {
            separator == ":"
                && !name.contains("openvms")
                && (!(name.contains("mac") || name.contains("darwin")) || name.ends_with('x'))
        }
        "z/os" => name.contains("z/os") || name.contains("os/390"),
        "os/400" => name.contains("os/400"),
        "openvms" => name.contains("openvms"),
        _ => false,
    }
}

fn matches_value(expected: Option<&str>, actual: &str) -> bool {
    match expected {
        None => true,
        Some(expected) => match expected.strip_prefix('!') {
            Some(negated) => !negated.eq_ignore_ascii_case(actual),
            None => expected.eq_ignore_ascii_case(actual),
        },
    }
}
