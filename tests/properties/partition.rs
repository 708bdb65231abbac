//! Property tests for partitioning resolved sets over profiles.

use proptest::prelude::*;

use deplock::domain::entities::EntitySet;
use deplock::domain::services::split;

use crate::strategies::entity_set;

fn disabled_sets() -> impl Strategy<Value = Vec<(String, EntitySet)>> {
    proptest::collection::vec(entity_set(), 0..4).prop_map(|sets| {
        sets.into_iter()
            .enumerate()
            .map(|(i, set)| (format!("p{}", i), set))
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: the shared set and every profile set are disjoint.
    #[test]
    fn property_partition_is_disjoint(current in entity_set(), disabled in disabled_sets()) {
        let profiled = split(current, &["active"], disabled);
        let shared = profiled.default_entities();
        for (id, set) in profiled.profile_entries() {
            for entity in set {
                prop_assert!(!shared.contains(entity), "{} overlaps in {}", entity.identifier(), id);
            }
        }
    }

    /// PROPERTY: shared plus a profile's set reproduces what was resolved for it.
    #[test]
    fn property_partition_is_complete(current in entity_set(), disabled in disabled_sets()) {
        let profiled = split(current.clone(), &["active"], disabled.clone());

        prop_assert_eq!(profiled.merged_for_profiles(&["active"]).unwrap(), current);
        for (id, set) in disabled {
            prop_assert_eq!(profiled.merged_for_profiles(&[id.as_str()]).unwrap(), set);
        }
    }
}
