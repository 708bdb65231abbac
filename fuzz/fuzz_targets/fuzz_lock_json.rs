#![no_main]

use libfuzzer_sys::fuzz_target;
use std::path::Path;

use deplock::infrastructure::JsonLockRepository;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        let repository = JsonLockRepository::new();
        // Anything that parses must render again
        if let Ok(project) = repository.parse(content, Path::new("fuzz.lock.json")) {
            let _ = repository.render(&project);
        }
    }
});
