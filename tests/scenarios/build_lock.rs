//! Locking the build itself: plugins with their own dependencies.

use crate::common::*;

#[test]
fn plugin_dependency_change_is_reported() {
    let env = TestEnv::with_project(PROFILED_DESCRIPTOR, Some("[lock]\nlock_build = true\n"));
    let lock = env.run(&["lock"]);
    assert!(lock.success, "{}", lock.combined_output());

    env.write_project_file(
        "deplock-descriptor.json",
        &PROFILED_DESCRIPTOR.replace("\"9.5\"", "\"9.6\""),
    );
    let verify = env.run(&["verify"]);

    assert_eq!(verify.exit_code, 1);
    assert!(
        verify.stdout.contains("Different plugins:"),
        "stdout:\n{}",
        verify.stdout
    );
    assert!(verify
        .stdout
        .contains("dependencies: org.ow2:asm: version: expected 9.5 but found 9.6"));
}

#[test]
fn file_digests_are_locked() {
    let env = TestEnv::with_project(
        r#"{"dependencies": [
          {"groupId": "org.example", "artifactId": "local", "version": "1", "file": "repo/local.jar"}
        ]}"#,
        None,
    );
    env.write_project_file("repo/local.jar", "first build");
    assert!(env.run(&["lock"]).success);
    let integrity = env.read_lock()["dependencies"][0]["integrity"]
        .as_str()
        .unwrap()
        .to_string();
    assert!(integrity.starts_with("sha512:"));
    assert_eq!(integrity.len(), "sha512:".len() + 128);

    env.write_project_file("repo/local.jar", "second build");
    let verify = env.run(&["verify"]);

    assert_eq!(verify.exit_code, 1);
    assert!(verify.stdout.contains("org.example:local: integrity"));
}
