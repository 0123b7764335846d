// ABOUTME: Checks that the Node.js toolchain the generated functions rely on is installed.
// ABOUTME: Verifies node and yarn are on PATH and new enough before create and deploy.

use semver::{Version, VersionReq};
use tokio::process::Command;

/// A program that must be present in a minimum version.
#[derive(Debug, Clone, Copy)]
pub struct Requirement {
    pub program: &'static str,
    pub version_args: &'static [&'static str],
    pub required: &'static str,
}

pub const NODE: Requirement = Requirement {
    program: "node",
    version_args: &["--version"],
    required: ">=8.10.0",
};

pub const YARN: Requirement = Requirement {
    program: "yarn",
    version_args: &["-v"],
    required: ">=1.3.0",
};

#[derive(Debug, thiserror::Error)]
pub enum ToolchainError {
    #[error("{0} not found on PATH")]
    Missing(&'static str),

    #[error("failed to run {program}: {source}")]
    Exec {
        program: &'static str,
        source: std::io::Error,
    },

    #[error("could not parse {program} version from '{output}'")]
    Unparseable {
        program: &'static str,
        output: String,
    },

    #[error("Required {program} version {required} not satisfied with current version {current}.")]
    Unsatisfied {
        program: &'static str,
        required: &'static str,
        current: Version,
    },
}

/// Check node and yarn, in that order.
pub async fn check_toolchain() -> Result<(), ToolchainError> {
    for requirement in [NODE, YARN] {
        let version = requirement.check().await?;
        tracing::debug!("{} {} satisfies {}", requirement.program, version, requirement.required);
    }
    Ok(())
}

impl Requirement {
    /// Locate the program, ask it for its version and compare.
    pub async fn check(&self) -> Result<Version, ToolchainError> {
        let path = which::which(self.program).map_err(|_| ToolchainError::Missing(self.program))?;

        let output = Command::new(&path)
            .args(self.version_args)
            .output()
            .await
            .map_err(|source| ToolchainError::Exec {
                program: self.program,
                source,
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        let version = parse_version(&stdout).ok_or_else(|| ToolchainError::Unparseable {
            program: self.program,
            output: stdout.trim().to_string(),
        })?;

        self.verify(version)
    }

    /// Compare an already known version against the requirement.
    pub fn verify(&self, version: Version) -> Result<Version, ToolchainError> {
        // Requirement strings are constants; an unparseable one never matches.
        let satisfied = VersionReq::parse(self.required)
            .map(|req| req.matches(&version))
            .unwrap_or(false);

        if satisfied {
            Ok(version)
        } else {
            Err(ToolchainError::Unsatisfied {
                program: self.program,
                required: self.required,
                current: version,
            })
        }
    }
}

/// Parse `v18.17.1`, `1.22.19` or `4.0.2\n` style version output.
pub fn parse_version(output: &str) -> Option<Version> {
    let line = output.lines().next()?.trim();
    let line = line.strip_prefix('v').unwrap_or(line);
    Version::parse(line).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_node_style_version() {
        assert_eq!(parse_version("v18.17.1\n"), Some(Version::new(18, 17, 1)));
    }

    #[test]
    fn parses_yarn_style_version() {
        assert_eq!(parse_version("1.22.19\n"), Some(Version::new(1, 22, 19)));
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(parse_version("command not found"), None);
        assert_eq!(parse_version(""), None);
    }

    #[test]
    fn old_yarn_is_unsatisfied() {
        let err = YARN.verify(Version::new(1, 2, 0)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Required yarn version >=1.3.0 not satisfied with current version 1.2.0."
        );
    }

    #[test]
    fn new_node_is_satisfied() {
        assert!(NODE.verify(Version::new(20, 0, 0)).is_ok());
        assert!(NODE.verify(Version::new(8, 10, 0)).is_ok());
        assert!(NODE.verify(Version::new(6, 10, 3)).is_err());
    }
}
