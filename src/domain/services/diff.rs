//! Diff Domain Service
//!
//! Compares a locked entity set against the set resolved for the current
//! environment. The comparison is total: drift ends up in the report, never
//! in an error.

use tracing::info;

use crate::domain::entities::{EntityKind, EntitySet, LockableEntity, Project};
use crate::domain::ports::LockPolicy;
use crate::domain::value_objects::{IntegrityPolicy, VersionPolicy};

/// Drift found in one category
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiffReport {
    different: Vec<String>,
    missing: Vec<String>,
    extraneous: Vec<String>,
}

impl DiffReport {
    pub fn new(different: Vec<String>, missing: Vec<String>, extraneous: Vec<String>) -> Self {
        Self {
            different,
            missing,
            extraneous,
        }
    }

    /// Lines of the form `<coordinate>: <mismatch>; <mismatch>`
    pub fn different(&self) -> &[String] {
        &self.different
    }

    pub fn missing(&self) -> &[String] {
        &self.missing
    }

    pub fn extraneous(&self) -> &[String] {
        &self.extraneous
    }

    pub fn has_differences(&self) -> bool {
        !self.different.is_empty() || !self.missing.is_empty() || !self.extraneous.is_empty()
    }

    /// Human-readable block for `category` (empty when there is no drift)
    pub fn report(&self, category: &str) -> Vec<String> {
        let mut lines = Vec::new();
        for (label, entries) in [
            ("Missing", &self.missing),
            ("Extraneous", &self.extraneous),
            ("Different", &self.different),
        ] {
            if entries.is_empty() {
                continue;
            }
            lines.push(format!("{} {}:", label, category));
            lines.extend(entries.iter().map(|entry| format!("  {}", entry)));
        }
        lines
    }
}

/// Compare `locked` against `actual` under `policy`.
pub fn compare_with<P: LockPolicy + ?Sized>(
    locked: &EntitySet,
    actual: &EntitySet,
    policy: &P,
) -> DiffReport {
    let mut different = Vec::new();
    let mut missing = Vec::new();

    for locked_entity in locked {
        let coordinate = locked_entity.identifier();
        match actual.by(coordinate) {
            None if policy.allow_missing(coordinate) => {
                info!("Ignoring missing {}", coordinate);
            }
            None => missing.push(coordinate.to_string()),
            Some(actual_entity) => {
                let mismatches = mismatches(locked_entity, actual_entity, policy);
                if !mismatches.is_empty() {
                    different.push(format!("{}: {}", coordinate, mismatches.join("; ")));
                }
            }
        }
    }

    let extraneous = actual
        .iter()
        .map(LockableEntity::identifier)
        .filter(|coordinate| locked.by(coordinate).is_none())
        .filter(|coordinate| !policy.allow_extraneous(coordinate))
        .map(ToString::to_string)
        .collect();

    DiffReport::new(different, missing, extraneous)
}

fn mismatches<P: LockPolicy + ?Sized>(
    locked: &LockableEntity,
    actual: &LockableEntity,
    policy: &P,
) -> Vec<String> {
    let coordinate = locked.identifier();
    let mut found = Vec::new();

    if policy.version_policy(coordinate) == VersionPolicy::Check
        && locked.version() != actual.version()
    {
        found.push(expected("version", locked.version(), actual.version()));
    }

    if policy.integrity_policy(coordinate) == IntegrityPolicy::Check
        && !locked.integrity().is_ignored()
        && locked.integrity() != actual.integrity()
    {
        found.push(expected("integrity", locked.integrity(), actual.integrity()));
    }

    match (locked.kind(), actual.kind()) {
        (
            EntityKind::Dependency { scope, optional },
            EntityKind::Dependency {
                scope: actual_scope,
                optional: actual_optional,
            },
        ) => {
            if scope != actual_scope {
                found.push(expected("scope", scope, actual_scope));
            }
            if optional != actual_optional {
                found.push(expected("optional", optional, actual_optional));
            }
        }
        (
            EntityKind::Plugin { dependencies },
            EntityKind::Plugin {
                dependencies: actual_dependencies,
            },
        ) => {
            let nested = compare_with(dependencies, actual_dependencies, policy);
            found.extend(
                nested
                    .different
                    .iter()
                    .map(|line| format!("dependencies: {}", line)),
            );
            found.extend(
                nested
                    .missing
                    .iter()
                    .map(|c| format!("dependencies: missing {}", c)),
            );
            found.extend(
                nested
                    .extraneous
                    .iter()
                    .map(|c| format!("dependencies: extraneous {}", c)),
            );
        }
        (kind, actual_kind) if kind.name() != actual_kind.name() => {
            found.push(expected("kind", kind.name(), actual_kind.name()));
        }
        _ => {}
    }

    found
}

fn expected(field: &str, locked: impl std::fmt::Display, actual: impl std::fmt::Display) -> String {
    format!("{}: expected {} but found {}", field, locked, actual)
}

/// Drift across every category of a project
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectDiff {
    pub dependencies: DiffReport,
    pub parents: Option<DiffReport>,
    pub plugins: Option<DiffReport>,
    pub extensions: Option<DiffReport>,
}

impl ProjectDiff {
    /// No drift in any present category
    pub fn is_equal(&self) -> bool {
        !self.dependencies.has_differences()
            && [&self.parents, &self.plugins, &self.extensions]
                .into_iter()
                .flatten()
                .all(|report| !report.has_differences())
    }

    /// One block per category, dependencies first
    pub fn report(&self) -> Vec<String> {
        let mut lines = self.dependencies.report("dependencies");
        for (category, report) in [
            ("parents", &self.parents),
            ("plugins", &self.plugins),
            ("extensions", &self.extensions),
        ] {
            if let Some(report) = report {
                lines.extend(report.report(category));
            }
        }
        lines
    }
}

/// Compare a locked project against the current one.
///
/// `locked_dependencies` is the lock's dependency view for the active
/// profiles. Build categories are compared only when the lock records them;
/// a category the current project lacks compares against an empty set.
pub fn compare_project<P: LockPolicy + ?Sized>(
    locked: &Project,
    locked_dependencies: &EntitySet,
    actual_dependencies: &EntitySet,
    actual: &Project,
    policy: &P,
) -> ProjectDiff {
    let empty = EntitySet::empty();
    let category = |locked: Option<&EntitySet>, actual: Option<&EntitySet>| {
        locked.map(|locked| compare_with(locked, actual.unwrap_or(&empty), policy))
    };

    ProjectDiff {
        dependencies: compare_with(locked_dependencies, actual_dependencies, policy),
        parents: category(locked.parents(), actual.parents()),
        plugins: category(locked.plugins(), actual.plugins()),
        extensions: category(locked.extensions(), actual.extensions()),
    }
}
