//! Property tests for coordinate pattern parsing.

use proptest::prelude::*;

use deplock::domain::value_objects::{Coordinate, CoordinatePattern};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: parsing arbitrary input never panics.
    #[test]
    fn property_pattern_parse_never_panics(input in ".{0,40}") {
        let _ = CoordinatePattern::parse(&input);
    }

    /// PROPERTY: a coordinate's own spelling matches it.
    #[test]
    fn property_full_key_matches_itself(
        group in "[a-z][a-z.]{0,8}",
        name in "[a-z][a-z-]{0,8}",
        classifier in proptest::option::of("[a-z]{1,6}"),
    ) {
        let coordinate = Coordinate::new(group.clone(), name.clone()).with_classifier(classifier);
        let pattern = CoordinatePattern::parse(&coordinate.full_key()).unwrap();
        prop_assert!(pattern.matches(&coordinate));

        let short = CoordinatePattern::parse(&format!("{}:{}", group, name)).unwrap();
        prop_assert!(short.matches(&coordinate));
    }

    /// PROPERTY: a group wildcard matches every name in that group.
    #[test]
    fn property_group_wildcard_matches(name in "[a-z]{1,8}") {
        let pattern = CoordinatePattern::parse("org.example:*").unwrap();
        prop_assert!(pattern.matches(&Coordinate::new("org.example", name.clone())));
        prop_assert!(!pattern.matches(&Coordinate::new("org.other", name)));
    }
}
