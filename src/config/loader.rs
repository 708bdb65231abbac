//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{DeplockError, DeplockResult};

use super::types::{Config, CONFIG_FILE};

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> DeplockResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| DeplockError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    // pattern syntax is checked up front so a typo never reaches a lock run
    config.filters().map_err(|e| DeplockError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load the project config, or defaults when there is none
pub fn load_or_default(project_root: &Path) -> DeplockResult<(Config, Vec<ConfigWarning>)> {
    let path = project_root.join(CONFIG_FILE);
    let (config, warnings) = if path.exists() {
        load_with_warnings(&path)?
    } else {
        (Config::default(), Vec::new())
    };
    Ok((with_env_overrides(config), warnings))
}

/// Apply environment variable overrides (DEPLOCK_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    with_overrides_from(config, |key| std::env::var(key).ok())
}

pub(super) fn with_overrides_from(
    mut config: Config,
    lookup: impl Fn(&str) -> Option<String>,
) -> Config {
    // DEPLOCK_LOCK_FILE
    if let Some(file) = lookup("DEPLOCK_LOCK_FILE").filter(|f| !f.is_empty()) {
        config.lock.file = PathBuf::from(file);
    }

    // DEPLOCK_SKIP
    if let Some(val) = lookup("DEPLOCK_SKIP") {
        config.lock.skip = parse_flag(&val);
    }

    // DEPLOCK_MARK_IGNORED
    if let Some(val) = lookup("DEPLOCK_MARK_IGNORED") {
        config.lock.mark_ignored_as_ignored = parse_flag(&val);
    }

    // DEPLOCK_LOCK_BUILD
    if let Some(val) = lookup("DEPLOCK_LOCK_BUILD") {
        config.lock.lock_build = parse_flag(&val);
    }

    config
}

fn parse_flag(val: &str) -> bool {
    val.to_lowercase() != "false" && val != "0"
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "lock",
        "file",
        "mark_ignored_as_ignored",
        "lock_build",
        "skip",
        "project",
        "descriptor",
        "profiles",
        "id",
        "activation",
        "os",
        "family",
        "name",
        "arch",
        "version",
        "filters",
        "includes",
        "excludes",
        "integrity",
        "allow_missing",
        "allow_extraneous",
        "environment",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
