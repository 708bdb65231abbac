//! Output Rendering
//!
//! Turns use case results into stdout text. Nothing here prints.

use serde_json::json;

use crate::application::{LockResult, ProfileStatus, VerifyResult};
use crate::config::ConfigWarning;

/// Output format for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output for scripting
    Json,
}

impl OutputFormat {
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

pub fn render_lock(result: &LockResult, format: OutputFormat) -> String {
    match (result, format) {
        (LockResult::Skipped, OutputFormat::Text) => "Lock skipped".to_string(),
        (LockResult::Skipped, OutputFormat::Json) => json!({ "status": "skipped" }).to_string(),
        (LockResult::Written { lock_file, project }, OutputFormat::Text) => {
            let dependencies = project.dependencies();
            let mut text = format!(
                "Locked {} shared dependencies to {}",
                dependencies.default_entities().len(),
                lock_file.display()
            );
            for (id, set) in dependencies.profile_entries() {
                text.push_str(&format!("\n  profile {}: {} dependencies", id, set.len()));
            }
            text
        }
        (LockResult::Written { lock_file, project }, OutputFormat::Json) => {
            let profiles: serde_json::Map<String, serde_json::Value> = project
                .dependencies()
                .profile_entries()
                .map(|(id, set)| (id.to_string(), json!(set.len())))
                .collect();
            json!({
                "status": "written",
                "lock_file": lock_file.display().to_string(),
                "dependencies": project.dependencies().default_entities().len(),
                "profiles": profiles,
                "build": project.is_build_lock(),
            })
            .to_string()
        }
    }
}

pub fn render_verify(result: &VerifyResult, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => match result {
            VerifyResult::Skipped => "Verify skipped".to_string(),
            VerifyResult::Compared { .. } if result.is_success() => {
                "Dependencies match the lock file".to_string()
            }
            VerifyResult::Compared { .. } => result.report().join("\n"),
        },
        OutputFormat::Json => {
            let (status, active) = match result {
                VerifyResult::Skipped => ("skipped", Vec::new()),
                VerifyResult::Compared {
                    active_profiles, ..
                } => (
                    if result.is_success() { "ok" } else { "drift" },
                    active_profiles.clone(),
                ),
            };
            json!({
                "status": status,
                "active_profiles": active,
                "report": result.report(),
            })
            .to_string()
        }
    }
}

pub fn render_profiles(profiles: &[ProfileStatus], format: OutputFormat) -> String {
    match format {
        OutputFormat::Text if profiles.is_empty() => "No profiles declared".to_string(),
        OutputFormat::Text => profiles
            .iter()
            .map(|profile| {
                let marker = if profile.active { "*" } else { " " };
                format!("{} {}", marker, profile.id)
            })
            .collect::<Vec<_>>()
            .join("\n"),
        OutputFormat::Json => {
            let entries: Vec<_> = profiles
                .iter()
                .map(|profile| json!({ "id": profile.id, "active": profile.active }))
                .collect();
            json!({ "profiles": entries }).to_string()
        }
    }
}

/// One stderr line for an unknown configuration key
pub fn render_config_warning(warning: &ConfigWarning) -> String {
    let location = match warning.line {
        Some(line) => format!("{}:{}", warning.file.display(), line),
        None => warning.file.display().to_string(),
    };
    let hint = warning
        .suggestion
        .as_ref()
        .map(|s| format!(". Did you mean '{}'?", s))
        .unwrap_or_default();
    format!("Warning: Unknown config key '{}' in {}{}", warning.key, location, hint)
}
