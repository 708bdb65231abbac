//! Shared generators.

use std::collections::BTreeMap;

use proptest::prelude::*;

use deplock::domain::entities::{Artifact, EntitySet, LockableEntity};
use deplock::domain::services::{FilterRule, Filters};
use deplock::domain::value_objects::{Coordinate, Integrity, IntegrityPolicy, VersionPolicy};

pub fn name() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-e]{1,2}").unwrap()
}

pub fn group() -> impl Strategy<Value = String> {
    prop_oneof![Just("g".to_string()), Just("org.example".to_string())]
}

pub fn dependency(group: &str, name: &str, version: u8, digest: u8) -> LockableEntity {
    LockableEntity::dependency(
        Artifact::new(
            Coordinate::new(group, name),
            version.to_string(),
            Integrity::Digest(format!("sha512:{:02x}", digest)),
        ),
        "compile",
        false,
    )
}

/// Entity set with unique coordinates and small version / digest ranges
pub fn entity_set() -> impl Strategy<Value = EntitySet> {
    proptest::collection::vec((group(), name(), 1u8..4, 0u8..3), 0..12).prop_map(|entries| {
        let unique: BTreeMap<(String, String), (u8, u8)> = entries
            .into_iter()
            .map(|(g, n, v, d)| ((g, n), (v, d)))
            .collect();
        EntitySet::new(
            unique
                .into_iter()
                .map(|((g, n), (v, d))| dependency(&g, &n, v, d)),
        )
        .unwrap()
    })
}

fn rule() -> impl Strategy<Value = FilterRule> {
    (
        prop_oneof![
            Just("*".to_string()),
            Just("g".to_string()),
            name().prop_map(|n| format!("*:{}", n)),
        ],
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
    )
        .prop_map(|(pattern, version, integrity, missing, extraneous)| {
            FilterRule::parse(&[pattern.as_str()], &[])
                .unwrap()
                .with_version(if version {
                    VersionPolicy::Ignore
                } else {
                    VersionPolicy::Check
                })
                .with_integrity(if integrity {
                    IntegrityPolicy::Ignore
                } else {
                    IntegrityPolicy::Check
                })
                .with_allow_missing(missing)
                .with_allow_extraneous(extraneous)
        })
}

pub fn filters() -> impl Strategy<Value = Filters> {
    proptest::collection::vec(rule(), 0..4).prop_map(Filters::new)
}
