//! Property tests for the diff engine.

use proptest::prelude::*;

use deplock::domain::entities::EntitySet;
use deplock::domain::ports::{LockPolicy, StrictPolicy};
use deplock::domain::services::{compare_with, FilterRule, Filters};
use deplock::domain::value_objects::VersionPolicy;

use crate::strategies::{entity_set, filters};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: comparing a set with itself finds nothing, under any filters.
    #[test]
    fn property_identical_sets_have_no_drift(set in entity_set(), filters in filters()) {
        let report = compare_with(&set, &set, &filters);
        prop_assert!(!report.has_differences(), "{:?}", report);
    }

    /// PROPERTY: the comparison is deterministic.
    #[test]
    fn property_compare_is_deterministic(
        locked in entity_set(),
        actual in entity_set(),
        filters in filters(),
    ) {
        let first = compare_with(&locked, &actual, &filters);
        let second = compare_with(&locked, &actual, &filters);
        prop_assert_eq!(first.report("dependencies"), second.report("dependencies"));
    }

    /// PROPERTY: tolerated missing entries never show up as missing.
    #[test]
    fn property_allowed_missing_never_reported(
        locked in entity_set(),
        actual in entity_set(),
        filters in filters(),
    ) {
        let report = compare_with(&locked, &actual, &filters);
        for entity in &locked {
            if filters.allow_missing(entity.identifier()) {
                let coordinate = entity.identifier().to_string();
                prop_assert!(!report.missing().contains(&coordinate));
            }
        }
    }

    /// PROPERTY: an ignored version never produces a version mismatch.
    #[test]
    fn property_ignored_version_is_never_compared(locked in entity_set()) {
        let bumped = EntitySet::new(locked.iter().map(|e| e.with_version("999"))).unwrap();
        let filters = Filters::new(vec![
            FilterRule::parse(&["*"], &[]).unwrap().with_version(VersionPolicy::Ignore),
        ]);

        let report = compare_with(&locked, &bumped, &filters);
        prop_assert!(report.different().iter().all(|line| !line.contains("version:")));

        let strict = compare_with(&locked, &bumped, &StrictPolicy);
        prop_assert_eq!(strict.different().len(), locked.len());
    }
}
