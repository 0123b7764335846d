// ABOUTME: State transition methods for deployment orchestration.
// ABOUTME: Each method consumes self and returns the next state on success.

use std::path::Path;

use crate::diagnostics::{Diagnostics, Warning};
use crate::lambda::{CreateFunction, FunctionApi, UpdateFunctionCode, UpdateFunctionConfiguration};
use crate::package::{AWS_SDK_PACKAGE, Archive, CommandOutput, PackageError, PackageManager};

use super::DeployError;
use super::deployment::{DeployOutcome, Deployment, Target};
use super::state::{
    CodeUpdated, Completed, DeployAction, Existing, Initialized, Missing, SdkStripped,
};

impl<S> Deployment<S> {
    fn transition<T>(self, state: T) -> Deployment<T> {
        Deployment {
            plan: self.plan,
            state,
        }
    }
}

// =============================================================================
// Initialized -> SdkStripped
// =============================================================================

impl Deployment<Initialized> {
    /// Remove the SDK dependency so it is not shipped in the archive.
    ///
    /// Failure is recorded as a warning: the archive is still valid, just larger.
    pub async fn strip_sdk<P: PackageManager + ?Sized>(
        self,
        package_manager: &P,
        diag: &mut Diagnostics,
    ) -> Deployment<SdkStripped> {
        let result = package_manager.remove(self.dir(), AWS_SDK_PACKAGE).await;
        record_toggle(result, "remove", diag);
        self.transition(SdkStripped)
    }
}

// =============================================================================
// SdkStripped -> Existing | Missing
// =============================================================================

impl Deployment<SdkStripped> {
    /// Ask the API whether the function exists and pick the branch.
    ///
    /// # Errors
    ///
    /// Any lookup failure other than "not found" aborts the deployment.
    pub async fn locate<A: FunctionApi + ?Sized>(self, api: &A) -> Result<Target, DeployError> {
        match api.get_function(self.qualified_name()).await? {
            Some(info) => Ok(Target::Update(self.transition(Existing { info }))),
            None => Ok(Target::Create(self.transition(Missing))),
        }
    }
}

// =============================================================================
// Existing -> CodeUpdated -> Completed
// =============================================================================

impl Deployment<Existing> {
    /// Upload the archive as the function's new code and publish a version.
    #[must_use = "deployment state must be used"]
    pub async fn update_code<A: FunctionApi + ?Sized>(
        self,
        api: &A,
        archive: Archive,
    ) -> Result<Deployment<CodeUpdated>, DeployError> {
        let request = UpdateFunctionCode {
            name: self.qualified_name().clone(),
            archive,
            publish: true,
        };
        tracing::debug!(?request, "UpdateFunctionCode request");

        let info = api.update_function_code(request).await?;
        Ok(self.transition(CodeUpdated { info }))
    }
}

impl Deployment<CodeUpdated> {
    /// The configuration change this deployment will request.
    pub fn configuration_request(&self) -> UpdateFunctionConfiguration {
        UpdateFunctionConfiguration {
            name: self.qualified_name().clone(),
            description: self.plan.description.clone(),
            environment: self.plan.environment_update(),
        }
    }

    /// Apply description and environment to the updated function.
    #[must_use = "deployment state must be used"]
    pub async fn update_configuration<A: FunctionApi + ?Sized>(
        self,
        api: &A,
    ) -> Result<Deployment<Completed>, DeployError> {
        let request = self.configuration_request();
        tracing::debug!(?request, "UpdateFunctionConfiguration request");

        let info = api.update_function_configuration(request).await?;
        Ok(self.transition(Completed {
            action: DeployAction::Updated,
            info,
        }))
    }
}

// =============================================================================
// Missing -> Completed
// =============================================================================

impl Deployment<Missing> {
    /// The execution role the new function will assume.
    ///
    /// # Errors
    ///
    /// Returns `DeployError::MissingRole` when neither the command line nor the
    /// configuration names one.
    pub fn role(&self) -> Result<&str, DeployError> {
        self.plan
            .create
            .role
            .as_deref()
            .ok_or_else(|| DeployError::MissingRole(self.qualified_name().to_string()))
    }

    /// Build the create request for `archive`.
    pub fn create_request(&self, archive: Archive) -> Result<CreateFunction, DeployError> {
        let create = &self.plan.create;
        let timeout_secs = i32::try_from(create.timeout.as_secs())
            .map_err(|_| DeployError::InvalidTimeout(create.timeout))?;

        Ok(CreateFunction {
            name: self.qualified_name().clone(),
            archive,
            handler: create.handler.clone(),
            runtime: create.runtime.clone(),
            role: self.role()?.to_string(),
            memory_size: create.memory_size,
            timeout_secs,
            publish: true,
            description: self.plan.description.clone(),
            environment: self.plan.environment_update(),
        })
    }

    /// Create and publish the function.
    #[must_use = "deployment state must be used"]
    pub async fn create<A: FunctionApi + ?Sized>(
        self,
        api: &A,
        archive: Archive,
    ) -> Result<Deployment<Completed>, DeployError> {
        let request = self.create_request(archive)?;
        tracing::debug!(?request, "CreateFunction request");

        let info = api.create_function(request).await?;
        Ok(self.transition(Completed {
            action: DeployAction::Created,
            info,
        }))
    }
}

// =============================================================================
// Completed - Terminal State
// =============================================================================

impl Deployment<Completed> {
    /// Consume the deployment and report what happened.
    pub fn finish(self) -> DeployOutcome {
        DeployOutcome {
            action: self.state.action,
            name: self.plan.qualified_name,
            function: self.state.info,
        }
    }
}

// =============================================================================
// Dependency toggle
// =============================================================================

/// Put the SDK dependency back after packaging. Failure is recorded as a warning.
pub async fn restore_sdk<P: PackageManager + ?Sized>(
    dir: &Path,
    package_manager: &P,
    diag: &mut Diagnostics,
) {
    let result = package_manager.add(dir, AWS_SDK_PACKAGE).await;
    record_toggle(result, "add", diag);
}

fn record_toggle(result: Result<CommandOutput, PackageError>, action: &str, diag: &mut Diagnostics) {
    match result {
        Ok(output) if output.success => {}
        Ok(output) => diag.warn(Warning::dependency_toggle(format!(
            "`{action} {AWS_SDK_PACKAGE}` exited with {:?}: {}",
            output.exit_code,
            output.stderr.trim()
        ))),
        Err(e) => diag.warn(Warning::dependency_toggle(format!(
            "`{action} {AWS_SDK_PACKAGE}` failed: {e}"
        ))),
    }
}
