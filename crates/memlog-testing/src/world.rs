//! TestWorld pattern for declarative integration test setup.
//!
//! Each world owns a temp directory that acts as the working directory for
//! CLI runs, plus a private workspace (`MEMLOG_PATH`) so the user's real
//! config is never read.

use anyhow::Result;
use assert_cmd::Command;
use memlog_core::WORKSPACE_ENV;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Default manifest file name, relative to the world's working directory
pub const MANIFEST_FILE: &str = "memory_sources.txt";

/// Declarative test environment builder.
///
/// # Example
/// ```no_run
/// use memlog_testing::TestWorld;
/// use memlog_testing::fixtures::web_line;
///
/// let world = TestWorld::new()
///     .with_log("build/run1/logs/output.log", &web_line("@home", 500))
///     .with_manifest("run1 = build/run1/logs/output.log");
///
/// let result = world.run(&["parse", "--csv"]).unwrap();
/// assert!(result.success());
/// ```
pub struct TestWorld {
    _temp_dir: TempDir,
    cwd: PathBuf,
    workspace_dir: PathBuf,
    env_vars: HashMap<String, String>,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    /// Create a new isolated test environment.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let base_path = temp_dir.path().to_path_buf();
        let workspace_dir = base_path.join(".memlog-home");
        std::fs::create_dir_all(&workspace_dir).expect("Failed to create workspace dir");

        let mut env_vars = HashMap::new();
        env_vars.insert(
            WORKSPACE_ENV.to_string(),
            workspace_dir.to_string_lossy().into_owned(),
        );

        Self {
            cwd: base_path,
            _temp_dir: temp_dir,
            workspace_dir,
            env_vars,
        }
    }

    /// Get the current working directory for CLI runs.
    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    /// Path of the default manifest.
    pub fn manifest_path(&self) -> PathBuf {
        self.cwd.join(MANIFEST_FILE)
    }

    /// Resolve a path relative to the working directory.
    pub fn path(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.cwd.join(relative)
    }

    /// Write a file relative to the working directory, creating parents.
    pub fn write_file(&self, relative: impl AsRef<Path>, content: &str) -> Result<PathBuf> {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, content)?;
        Ok(path)
    }

    /// Read a file relative to the working directory.
    pub fn read_file(&self, relative: impl AsRef<Path>) -> Result<String> {
        Ok(std::fs::read_to_string(self.path(relative))?)
    }

    /// Write the default manifest.
    pub fn with_manifest(self, content: &str) -> Self {
        self.write_file(MANIFEST_FILE, content)
            .expect("Failed to write manifest");
        self
    }

    /// Write a log file relative to the working directory.
    pub fn with_log(self, relative: &str, content: &str) -> Self {
        self.write_file(relative, content)
            .expect("Failed to write log file");
        self
    }

    /// Write `config.toml` into the workspace directory.
    pub fn with_config(self, toml: &str) -> Self {
        std::fs::write(self.workspace_dir.join("config.toml"), toml)
            .expect("Failed to write config");
        self
    }

    /// Set an environment variable for CLI execution.
    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env_vars.insert(key.into(), value.into());
        self
    }

    /// Configure a CLI command with this test environment's settings.
    ///
    /// The caller must provide the base command (e.g., from
    /// `cargo_bin_cmd!("memlog")`).
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        cmd.current_dir(&self.cwd);
        for (key, value) in &self.env_vars {
            cmd.env(key, value);
        }
        cmd
    }

    /// Execute the memlog binary in this environment.
    #[allow(deprecated)]
    pub fn run(&self, args: &[&str]) -> Result<CliResult> {
        let mut cmd = Command::cargo_bin("memlog")
            .map_err(|e| anyhow::anyhow!("Failed to find memlog binary: {}", e))?;

        self.configure_command(&mut cmd);
        cmd.args(args);

        let output = cmd.output()?;

        Ok(CliResult {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}

/// Result of a CLI command execution.
#[derive(Debug)]
pub struct CliResult {
    pub status: std::process::ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl CliResult {
    /// Check if the command succeeded.
    pub fn success(&self) -> bool {
        self.status.success()
    }

    /// Get stdout as a string.
    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    /// Get stderr as a string.
    pub fn stderr(&self) -> &str {
        &self.stderr
    }
}
