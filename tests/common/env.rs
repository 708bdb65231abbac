//! Test environment for isolated deplock runs.

#![allow(dead_code)]

use std::path::PathBuf;
use std::process::{Command, Output};

use tempfile::TempDir;

/// Result of running a deplock CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// Isolated project directory
pub struct TestEnv {
    pub project_root: TempDir,
    deplock_bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            project_root: tempfile::tempdir().expect("Failed to create temp dir"),
            deplock_bin: PathBuf::from(env!("CARGO_BIN_EXE_deplock")),
        }
    }

    /// Project with the given descriptor and optional config
    pub fn with_project(descriptor: &str, config: Option<&str>) -> Self {
        let env = Self::new();
        env.write_project_file("deplock-descriptor.json", descriptor);
        if let Some(config) = config {
            env.write_project_file("deplock.toml", config);
        }
        env
    }

    /// Get path relative to project root
    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    /// Run deplock in the project root, pinned to a linux host
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_on("linux", ":", args)
    }

    /// Run deplock with `os.name` and `path.separator` overridden
    pub fn run_on(&self, os_name: &str, separator: &str, args: &[&str]) -> TestResult {
        let name = format!("os.name={}", os_name);
        let sep = format!("path.separator={}", separator);
        let mut full: Vec<&str> = vec!["-D", name.as_str(), "-D", sep.as_str()];
        full.extend_from_slice(args);
        self.run_with_env(&full, &[])
    }

    /// Run deplock with extra environment variables
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(&self.deplock_bin);
        cmd.current_dir(self.project_root.path())
            .args(args)
            .env_remove("DEPLOCK_LOG")
            .env_remove("DEPLOCK_LOCK_FILE")
            .env_remove("DEPLOCK_SKIP")
            .env_remove("DEPLOCK_MARK_IGNORED")
            .env_remove("DEPLOCK_LOCK_BUILD");

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute deplock");
        output_to_result(output)
    }

    /// Write a file to the project directory
    pub fn write_project_file(&self, relative_path: &str, content: &str) {
        let full_path = self.project_path(relative_path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&full_path, content).expect("Failed to write file");
    }

    /// Read a file from the project directory
    pub fn read_project_file(&self, relative_path: &str) -> String {
        std::fs::read_to_string(self.project_path(relative_path))
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", relative_path, e))
    }

    /// Parsed default lock file
    pub fn read_lock(&self) -> serde_json::Value {
        serde_json::from_str(&self.read_project_file("dependencies-lock.json"))
            .expect("lock file is not valid JSON")
    }
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}
