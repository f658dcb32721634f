//! Isolated environment for running the fluxtree binary.
//!
//! Each `TestEnv` owns a project directory (the working directory) and a home
//! directory, so neither a developer's `fluxtree.toml` nor their
//! `~/.config/fluxtree/config.toml` leaks into a test run.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

/// Variables that would change behaviour if inherited from the caller.
const SCRUBBED_ENV: &[&str] = &[
    "FLUXTREE_KUBECTL",
    "FLUXTREE_CONTEXT",
    "FLUXTREE_NAMESPACE",
    "FLUXTREE_KIND",
    "FLUXTREE_COLOR",
    "FLUXTREE_UNICODE",
    "FLUXTREE_LOG",
    "CLICOLOR_FORCE",
];

/// Result of running a fluxtree CLI command
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

pub struct TestEnv {
    pub project_root: TempDir,
    pub home_dir: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            project_root: TempDir::new().expect("Failed to create project dir"),
            home_dir: TempDir::new().expect("Failed to create home dir"),
        }
    }

    /// Get path relative to project root
    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    /// Write a file to the project directory
    pub fn write_project_file(&self, relative_path: &str, content: &str) -> PathBuf {
        let full_path = self.project_path(relative_path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }

    /// Write a file under `$XDG_CONFIG_HOME` of this environment
    pub fn write_user_config(&self, content: &str) -> PathBuf {
        let path = self.home_dir.path().join(".config/fluxtree/config.toml");
        std::fs::create_dir_all(path.parent().unwrap()).expect("Failed to create config dir");
        std::fs::write(&path, content).expect("Failed to write user config");
        path
    }

    /// Run fluxtree in this environment from project root
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    /// Run fluxtree from project root with extra env vars.
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = self.command(args);
        for (key, value) in env_vars {
            cmd.env(key, value);
        }
        let output = cmd.output().expect("Failed to execute fluxtree");
        output_to_result(output)
    }

    /// Run fluxtree with `stdin` piped in.
    pub fn run_with_stdin(&self, args: &[&str], stdin: &str) -> TestResult {
        let mut child = self
            .command(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .expect("Failed to spawn fluxtree");
        child
            .stdin
            .take()
            .expect("stdin is piped")
            .write_all(stdin.as_bytes())
            .expect("Failed to write stdin");
        let output = child.wait_with_output().expect("Failed to wait for fluxtree");
        output_to_result(output)
    }

    fn command(&self, args: &[&str]) -> Command {
        let mut cmd = Command::new(bin());
        cmd.current_dir(self.project_root.path())
            .args(args)
            .with_test_home(self.home_dir.path())
            .env("NO_COLOR", "1")
            .env("TERM", "xterm-256color");
        for key in SCRUBBED_ENV {
            cmd.env_remove(key);
        }
        cmd
    }
}

pub fn bin() -> &'static str {
    env!("CARGO_BIN_EXE_fluxtree")
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}

/// Extension trait for pointing every home-directory lookup at a temp dir.
pub trait TestHomeExt {
    fn with_test_home(&mut self, home: &Path) -> &mut Self;
}

impl TestHomeExt for Command {
    fn with_test_home(&mut self, home: &Path) -> &mut Self {
        self.env("HOME", home)
            .env("USERPROFILE", home)
            .env("XDG_CONFIG_HOME", home.join(".config"))
    }
}
