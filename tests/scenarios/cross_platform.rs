//! A lock written on a linux workstation is verified on a windows CI agent.

use crate::common::*;

const CONFIG: &str = r#"
[[profiles]]
id = "winOnly"
[profiles.activation.os]
family = "windows"

[[profiles]]
id = "macOnly"
[profiles.activation.os]
family = "mac"
"#;

const DESCRIPTOR: &str = r#"{
  "dependencies": [
    {"groupId": "org.example", "artifactId": "core", "version": "1.0", "integrity": "sha512:aaaa"}
  ],
  "profiles": [
    {"id": "winOnly", "activation": {"os": {"family": "windows"}},
     "dependencies": [
       {"groupId": "org.example", "artifactId": "win-shim", "version": "1.0", "integrity": "sha512:cccc"}
     ]},
    {"id": "macOnly", "activation": {"os": {"family": "mac"}},
     "dependencies": [
       {"groupId": "org.example", "artifactId": "mac-shim", "version": "1.0", "integrity": "sha512:dddd"}
     ]}
  ]
}"#;

#[test]
fn lock_on_linux_verifies_everywhere() {
    let env = TestEnv::with_project(DESCRIPTOR, Some(CONFIG));

    let lock = env.run(&["lock"]);
    assert!(lock.success, "{}", lock.combined_output());

    let written = env.read_lock();
    assert_eq!(written["dependencies"].as_array().unwrap().len(), 1);
    assert_eq!(
        written["profiles"]["macOnly"]["dependencies"][0]["artifact"],
        "org.example:mac-shim:jar@1.0"
    );

    for (os_name, separator) in [("linux", ":"), ("Windows 10", ";"), ("Mac OS X", ":")] {
        let verify = env.run_on(os_name, separator, &["verify"]);
        assert!(
            verify.success,
            "verify on {} failed:\n{}",
            os_name,
            verify.combined_output()
        );
    }
}

#[test]
fn windows_only_drift_is_caught_on_windows() {
    let env = TestEnv::with_project(DESCRIPTOR, Some(CONFIG));
    assert!(env.run(&["lock"]).success);
    env.write_project_file(
        "deplock-descriptor.json",
        &DESCRIPTOR.replace("sha512:cccc", "sha512:0000"),
    );

    // linux never resolves the windows shim
    assert!(env.run(&["verify"]).success);

    let windows = env.run_on("Windows 10", ";", &["verify"]);
    assert_eq!(windows.exit_code, 1);
    assert!(windows
        .stdout
        .contains("org.example:win-shim: integrity: expected sha512:cccc but found sha512:0000"));
}
