//! Profile emulation
//!
//! Translates an OS activation clause into environment property overrides
//! that force the profile active. Forms that cannot be emulated faithfully
//! are configuration errors.

use std::collections::BTreeMap;

use crate::domain::entities::ActivationOs;
use crate::domain::value_objects::{OS_ARCH, OS_NAME, OS_VERSION};
use crate::error::{DeplockError, DeplockResult};

/// Property overrides making `os` match.
///
/// `host_separator` is the real host's path separator; the `dos` and `unix`
/// families depend on it and cannot be emulated across conventions.
pub fn emulate_os_properties(
    profile: &str,
    os: &ActivationOs,
    host_separator: &str,
) -> DeplockResult<BTreeMap<String, String>> {
    let unsupported = |message: String| DeplockError::UnsupportedActivation {
        profile: profile.to_string(),
        message,
    };
    let mut properties = BTreeMap::new();

    if let Some(arch) = &os.arch {
        properties.insert(OS_ARCH.to_string(), negated_value(arch));
    }
    if let Some(version) = &os.version {
        properties.insert(OS_VERSION.to_string(), negated_value(version));
    }

    if let Some(family) = &os.family {
        if family.starts_with('!') {
            return Err(unsupported(
                "negated os family activation clauses are not supported".to_string(),
            ));
        }
        let name = match family.to_ascii_lowercase().as_str() {
            "windows" => "windows",
            "win9x" => "windows-95",
            "winnt" => "windows-nt",
            "os/2" => "os/2",
            "netware" => "netware",
            "dos" if host_separator == ";" => "dos",
            "dos" => {
                return Err(unsupported(
                    "dos family emulation is not supported on non windows platforms".to_string(),
                ))
            }
            "mac" => "darwin",
            "tandem" => "tandem-nonstop_kernel",
            "unix" if host_separator == ":" => "unix",
            "unix" => {
                return Err(unsupported(
                    "unix family emulation is not supported on non unix platforms".to_string(),
                ))
            }
            "z/os" => "z/os",
            "os/400" => "os/400",
            "openvms" => "openvms",
            other => return Err(unsupported(format!("unsupported os family: {}", other))),
        };
        properties.insert(OS_NAME.to_string(), name.to_string());
    }

    if let Some(name) = &os.name {
        if name.starts_with('!') {
            return Err(unsupported(
                "negated os name activation clauses are not supported".to_string(),
            ));
        }
        match properties.get(OS_NAME) {
            None => {
                properties.insert(OS_NAME.to_string(), name.to_ascii_lowercase());
            }
            Some(emulated) if emulated.eq_ignore_ascii_case(name) => {}
            Some(emulated) => {
                return Err(unsupported(format!(
                    "os name clause ({}) conflicts with family ({})",
                    name, emulated
                )))
            }
        }
    }

    Ok(properties)
}

// `!x` emulates a value that is anything but `x`
fn negated_value(value: &str) -> String {
    match value.strip_prefix('!') {
        Some(rest) => format!("not-{}", rest),
        None => value.to_string(),
    }
}
