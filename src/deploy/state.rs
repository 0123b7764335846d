// ABOUTME: Deployment state marker types for the type state pattern.
// ABOUTME: States after the existence check carry what the API reported.

use crate::lambda::FunctionInfo;

/// Initial state: plan resolved, directory untouched.
/// Available actions: `strip_sdk()`
#[derive(Debug, Clone, Copy, Default)]
pub struct Initialized;

/// The bundled SDK dependency has been removed from the function directory.
/// Available actions: `locate()`
#[derive(Debug, Clone, Copy, Default)]
pub struct SdkStripped;

/// The function already exists in AWS.
/// Available actions: `update_code()`
#[derive(Debug, Clone)]
pub struct Existing {
    pub(crate) info: FunctionInfo,
}

/// The function does not exist yet.
/// Available actions: `create()`
#[derive(Debug, Clone, Copy, Default)]
pub struct Missing;

/// New code uploaded to an existing function.
/// Available actions: `update_configuration()`
#[derive(Debug, Clone)]
pub struct CodeUpdated {
    pub(crate) info: FunctionInfo,
}

/// Completed: the function is created or fully updated.
/// Available actions: `finish()`
#[derive(Debug, Clone)]
pub struct Completed {
    pub(crate) action: DeployAction,
    pub(crate) info: FunctionInfo,
}

/// Which branch the deployment took.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeployAction {
    Created,
    Updated,
}

impl std::fmt::Display for DeployAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeployAction::Created => write!(f, "created"),
            DeployAction::Updated => write!(f, "updated"),
        }
    }
}
