//! Descriptor and config fixtures.

#![allow(dead_code)]

/// Two plain dependencies, no profiles
pub const SIMPLE_DESCRIPTOR: &str = r#"{
  "dependencies": [
    {"groupId": "org.example", "artifactId": "core", "version": "1.0",
     "integrity": "sha512:aaaa"},
    {"groupId": "org.example", "artifactId": "util", "version": "2.1", "scope": "runtime",
     "integrity": "sha512:bbbb"}
  ]
}"#;

/// A shared dependency plus a windows-only one declared in a profile block
pub const PROFILED_DESCRIPTOR: &str = r#"{
  "dependencies": [
    {"groupId": "org.example", "artifactId": "core", "version": "1.0",
     "integrity": "sha512:aaaa"}
  ],
  "profiles": [
    {"id": "winOnly", "activation": {"os": {"family": "windows"}},
     "dependencies": [
       {"groupId": "org.example", "artifactId": "win-shim", "version": "1.0",
        "integrity": "sha512:cccc"}
     ]}
  ],
  "plugins": [
    {"groupId": "org.plugins", "artifactId": "compiler", "version": "3.1",
     "integrity": "sha512:dddd",
     "dependencies": [
       {"groupId": "org.ow2", "artifactId": "asm", "version": "9.5", "integrity": "sha512:eeee"}
     ]}
  ]
}"#;

/// Config ignoring the version of util
pub const IGNORE_UTIL_VERSION: &str = r#"
[[filters]]
includes = ["org.example:util"]
version = "ignore"
"#;
