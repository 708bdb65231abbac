#![no_main]

use libfuzzer_sys::fuzz_target;

use deplock::domain::value_objects::{Coordinate, CoordinatePattern};

fuzz_target!(|data: &[u8]| {
    if let Ok(pattern) = std::str::from_utf8(data) {
        if let Ok(parsed) = CoordinatePattern::parse(pattern) {
            let _ = parsed.matches(&Coordinate::new("org.example", "core"));
        }
        let _ = Coordinate::parse(pattern);
    }
});
