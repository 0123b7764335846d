// ABOUTME: Application-wide error types for lambda-deploy.
// ABOUTME: Uses thiserror for ergonomic error handling.

use thiserror::Error;

use crate::config::ConfigError;
use crate::deploy::DeployError;
use crate::scaffold::ScaffoldError;
use crate::toolchain::ToolchainError;
use crate::types::{FunctionNameError, PrefixError};

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Deploy(#[from] DeployError),

    #[error(transparent)]
    Scaffold(#[from] ScaffoldError),

    #[error(transparent)]
    Toolchain(#[from] ToolchainError),

    #[error("invalid function name: {0}")]
    FunctionName(#[from] FunctionNameError),

    #[error("invalid prefix: {0}")]
    Prefix(#[from] PrefixError),

    #[error("prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("missing {0}: pass it on the command line or run in a terminal")]
    MissingInput(&'static str),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
