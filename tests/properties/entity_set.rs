//! Property tests for entity set ordering and uniqueness.

use proptest::prelude::*;

use deplock::domain::entities::EntitySet;

use crate::strategies::{dependency, entity_set, group, name};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: iteration yields coordinates in strictly increasing order.
    #[test]
    fn property_entity_set_is_strictly_sorted(set in entity_set()) {
        let coordinates: Vec<_> = set.iter().map(|e| e.identifier().clone()).collect();
        for pair in coordinates.windows(2) {
            prop_assert!(pair[0] < pair[1], "{} !< {}", pair[0], pair[1]);
        }
    }

    /// PROPERTY: input order never changes the resulting set.
    #[test]
    fn property_entity_set_ignores_input_order(set in entity_set()) {
        let reversed = EntitySet::new(set.iter().rev().cloned()).unwrap();
        prop_assert_eq!(reversed, set);
    }

    /// PROPERTY: a repeated coordinate is always rejected.
    #[test]
    fn property_duplicate_coordinate_rejected(g in group(), n in name(), v in 1u8..4) {
        let result = EntitySet::new(vec![dependency(&g, &n, v, 0), dependency(&g, &n, v + 1, 0)]);
        prop_assert!(result.is_err());
    }
}
