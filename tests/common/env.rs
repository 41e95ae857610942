//! Test environment for isolated webpify runs.
//!
//! Provides `TestEnv` - a temp project directory and a separate temp home, so
//! no user configuration leaks into the run.

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

/// Result of running the webpify CLI
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }

    /// Parse stdout as JSON (for `--json` runs)
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.stdout)
            .unwrap_or_else(|e| panic!("stdout is not JSON ({e}):\n{}", self.stdout))
    }
}

/// Isolated project directory with a private HOME.
pub struct TestEnv {
    pub project_root: TempDir,
    pub home_dir: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            project_root: TempDir::new().expect("Failed to create project temp dir"),
            home_dir: TempDir::new().expect("Failed to create home temp dir"),
            bin: PathBuf::from(env!("CARGO_BIN_EXE_webpify")),
        }
    }

    /// Get path relative to project root
    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    /// Write a file under the project, creating parent directories
    pub fn write_file(&self, relative: &str, content: impl AsRef<[u8]>) {
        let path = self.project_path(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&path, content).expect("Failed to write file");
    }

    /// Write a real PNG image under the project
    pub fn write_png(&self, relative: &str) {
        self.write_file(relative, super::fixtures::png_bytes(16, 16));
    }

    pub fn read_file(&self, relative: &str) -> String {
        std::fs::read_to_string(self.project_path(relative))
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", relative, e))
    }

    pub fn read_bytes(&self, relative: &str) -> Vec<u8> {
        std::fs::read(self.project_path(relative))
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", relative, e))
    }

    /// Run webpify from the project root
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with(args, &[], None)
    }

    /// Run webpify with extra environment variables
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        self.run_with(args, env_vars, None)
    }

    /// Run webpify with `input` piped to stdin
    pub fn run_with_stdin(&self, args: &[&str], input: &str) -> TestResult {
        self.run_with(args, &[], Some(input))
    }

    fn run_with(&self, args: &[&str], env_vars: &[(&str, &str)], input: Option<&str>) -> TestResult {
        let mut cmd = self.command();
        cmd.args(args);
        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = match input {
            None => cmd.output().expect("Failed to execute webpify"),
            Some(input) => {
                let mut child = cmd
                    .stdin(Stdio::piped())
                    .stdout(Stdio::piped())
                    .stderr(Stdio::piped())
                    .spawn()
                    .expect("Failed to spawn webpify");
                child
                    .stdin
                    .take()
                    .expect("stdin is piped")
                    .write_all(input.as_bytes())
                    .expect("Failed to write stdin");
                child.wait_with_output().expect("Failed to wait for webpify")
            }
        };
        to_result(output)
    }

    fn command(&self) -> Command {
        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(self.project_root.path())
            .env("HOME", self.home_dir.path())
            .env("XDG_CONFIG_HOME", self.home_dir.path().join(".config"))
            .env("NO_COLOR", "1")
            .env_remove("CI")
            .env_remove("RUST_LOG")
            .env_remove("WEBPIFY_CODE_EXTENSIONS")
            .env_remove("WEBPIFY_EXCLUDE_DIRS")
            .env_remove("WEBPIFY_PUBLIC_PREFIX")
            .env_remove("WEBPIFY_OVERWRITE");
        cmd
    }
}

fn to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}
