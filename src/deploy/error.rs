// ABOUTME: Error types for the deploy sequence.
// ABOUTME: Covers plan resolution, packaging and function-management API failures.

use std::path::PathBuf;
use std::time::Duration;

use crate::config::ConfigError;
use crate::lambda::{LambdaError, LambdaErrorKind};
use crate::package::PackageError;
use crate::types::PrefixError;

/// Errors that can occur while resolving or running a deployment.
#[derive(Debug, thiserror::Error)]
pub enum DeployError {
    /// The function directory does not exist.
    #[error("function directory not found: {0}")]
    FunctionDirNotFound(PathBuf),

    /// Creating a function needs an execution role.
    #[error(
        "no IAM role configured for new function {0}; pass --role or set deploy.role in lambda-deploy.json"
    )]
    MissingRole(String),

    /// Timeout outside what Lambda accepts.
    #[error("timeout must be a whole number of seconds between 1 and 900, got {0:?}")]
    InvalidTimeout(Duration),

    /// Memory size outside what Lambda accepts.
    #[error("memory size must be between 128 and 10240 MB, got {0}")]
    InvalidMemorySize(i32),

    /// The prefixed function name is not valid.
    #[error("invalid function name: {0}")]
    InvalidName(#[from] PrefixError),

    /// Reading settings from the local configuration failed.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Zipping the function directory failed.
    #[error("packaging failed: {0}")]
    Package(#[from] PackageError),

    /// A function-management API call failed.
    #[error(transparent)]
    Lambda(#[from] LambdaError),
}

impl DeployError {
    /// The API error kind, when the failure came from the function-management API.
    pub fn lambda_kind(&self) -> Option<LambdaErrorKind> {
        match self {
            DeployError::Lambda(e) => Some(e.kind()),
            _ => None,
        }
    }
}
