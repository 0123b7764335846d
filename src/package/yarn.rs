// ABOUTME: Package manager seam and its yarn implementation.
// ABOUTME: Runs install/add/remove inside a function directory and captures the output.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::process::Command;

use super::PackageError;

/// Captured result of a package manager invocation.
#[derive(Debug, Clone, Default)]
pub struct CommandOutput {
    pub success: bool,
    pub exit_code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

/// Dependency operations on a function directory.
///
/// A command that runs but exits non-zero is returned as `Ok` with
/// `success == false`; only failing to start the program is an `Err`.
#[async_trait]
pub trait PackageManager: Send + Sync {
    /// Display name of the tool, used in progress messages.
    fn name(&self) -> &str;

    /// Install all dependencies listed in `package.json`.
    async fn install(&self, dir: &Path) -> Result<CommandOutput, PackageError>;

    /// Add a dependency.
    async fn add(&self, dir: &Path, package: &str) -> Result<CommandOutput, PackageError>;

    /// Remove a dependency.
    async fn remove(&self, dir: &Path, package: &str) -> Result<CommandOutput, PackageError>;
}

/// Runs the `yarn` CLI.
#[derive(Debug, Clone)]
pub struct Yarn {
    program: PathBuf,
}

impl Default for Yarn {
    fn default() -> Self {
        Self::new()
    }
}

impl Yarn {
    pub fn new() -> Self {
        Self {
            program: PathBuf::from("yarn"),
        }
    }

    /// Use a specific executable instead of `yarn` from PATH.
    pub fn with_program(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    async fn run(&self, dir: &Path, args: &[&str]) -> Result<CommandOutput, PackageError> {
        tracing::info!("running {} {} in {}", self.program.display(), args.join(" "), dir.display());

        let output = Command::new(&self.program)
            .args(args)
            .current_dir(dir)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|source| PackageError::Spawn {
                program: self.program.display().to_string(),
                source,
            })?;

        let result = CommandOutput {
            success: output.status.success(),
            exit_code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        };

        if result.success {
            tracing::debug!("{}", result.stdout);
        } else {
            tracing::warn!(
                "{} {} failed with exit code {:?}",
                self.program.display(),
                args.join(" "),
                result.exit_code
            );
        }

        Ok(result)
    }
}

#[async_trait]
impl PackageManager for Yarn {
    fn name(&self) -> &str {
        "yarn"
    }

    async fn install(&self, dir: &Path) -> Result<CommandOutput, PackageError> {
        self.run(dir, &[]).await
    }

    async fn add(&self, dir: &Path, package: &str) -> Result<CommandOutput, PackageError> {
        self.run(dir, &["add", package]).await
    }

    async fn remove(&self, dir: &Path, package: &str) -> Result<CommandOutput, PackageError> {
        self.run(dir, &["remove", package]).await
    }
}
