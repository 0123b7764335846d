// ABOUTME: Generic deployment struct parameterized by state marker.
// ABOUTME: Holds the resolved plan; state types carry what the API reported.

use std::path::Path;

use crate::lambda::FunctionInfo;
use crate::types::{FunctionName, QualifiedName};

use super::plan::DeployPlan;
use super::state::{CodeUpdated, Completed, DeployAction, Existing, Initialized, Missing};

/// A deployment in progress, parameterized by its current state.
#[derive(Debug)]
pub struct Deployment<S> {
    pub(crate) plan: DeployPlan,
    pub(crate) state: S,
}

/// Result of the existence check: which branch to take.
#[derive(Debug)]
pub enum Target {
    Update(Deployment<Existing>),
    Create(Deployment<Missing>),
}

/// Final result of a deployment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployOutcome {
    pub action: DeployAction,
    pub name: QualifiedName,
    pub function: FunctionInfo,
}

impl Deployment<Initialized> {
    pub fn new(plan: DeployPlan) -> Self {
        Deployment {
            plan,
            state: Initialized,
        }
    }
}

impl<S> Deployment<S> {
    pub fn plan(&self) -> &DeployPlan {
        &self.plan
    }

    pub fn function(&self) -> &FunctionName {
        &self.plan.function
    }

    /// Name of the function within AWS.
    pub fn qualified_name(&self) -> &QualifiedName {
        &self.plan.qualified_name
    }

    pub fn dir(&self) -> &Path {
        &self.plan.dir
    }
}

impl Deployment<Existing> {
    /// The function as it was before this deployment.
    pub fn current(&self) -> &FunctionInfo {
        &self.state.info
    }
}

impl Deployment<CodeUpdated> {
    /// The function after its code was replaced.
    pub fn uploaded(&self) -> &FunctionInfo {
        &self.state.info
    }
}

impl Deployment<Completed> {
    pub fn action(&self) -> DeployAction {
        self.state.action
    }

    pub fn deployed(&self) -> &FunctionInfo {
        &self.state.info
    }
}
