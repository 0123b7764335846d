// ABOUTME: Drives the deploy sequence from existence check to dependency restore.
// ABOUTME: Emits progress for each step; one API call completes before the next starts.

use crate::diagnostics::Diagnostics;
use crate::lambda::FunctionApi;
use crate::output::Output;
use crate::package::{Archive, PackageManager};

use super::DeployError;
use super::deployment::{DeployOutcome, Deployment, Target};
use super::plan::DeployPlan;
use super::state::Completed;
use super::transitions::restore_sdk;

/// Run a full deployment.
///
/// The SDK dependency is stripped before anything else and restored at the
/// end, whether the API calls in between succeeded or not.
pub async fn run_deployment<A, P>(
    plan: DeployPlan,
    api: &A,
    package_manager: &P,
    output: &Output,
    diag: &mut Diagnostics,
) -> Result<DeployOutcome, DeployError>
where
    A: FunctionApi + ?Sized,
    P: PackageManager + ?Sized,
{
    let dir = plan.dir.clone();
    output.progress(&format!(
        "Running deploy for function {}...",
        plan.function
    ));

    output.progress(&format!(
        "  → Removing `aws-sdk` via {}...",
        package_manager.name()
    ));
    let deployment = Deployment::new(plan).strip_sdk(package_manager, diag).await;

    let result = match deployment.locate(api).await {
        Ok(target) => deploy_target(target, api, output).await,
        Err(e) => Err(e),
    };

    output.progress(&format!(
        "  → Installing `aws-sdk` via {}...",
        package_manager.name()
    ));
    restore_sdk(&dir, package_manager, diag).await;

    if let Err(DeployError::Lambda(e)) = &result {
        tracing::debug!(operation = e.operation(), kind = ?e.kind(), "function API call failed");
    }
    result.map(Deployment::finish)
}

async fn deploy_target<A: FunctionApi + ?Sized>(
    target: Target,
    api: &A,
    output: &Output,
) -> Result<Deployment<Completed>, DeployError> {
    match target {
        Target::Update(deployment) => {
            let name = deployment.qualified_name().clone();
            output.progress(&format!("  → Lambda function {name} exists, updating..."));
            tracing::debug!(current = ?deployment.current(), "existing function");

            let archive = package(&deployment, output).await?;

            output.progress(&format!("  → Updating {name} function code..."));
            let deployment = deployment.update_code(api, archive).await?;
            output.progress("  ✓ Lambda Code Updated");

            report_configuration(deployment.plan(), output);
            output.progress(&format!("  → Updating {name} function configuration..."));
            let deployment = deployment.update_configuration(api).await?;
            output.progress("  ✓ Lambda Config Updated");

            Ok(deployment)
        }
        Target::Create(deployment) => {
            let name = deployment.qualified_name().clone();
            output.progress(&format!(
                "  → Lambda function {name} does not exist, creating..."
            ));
            // Fail before zipping when the create call could never succeed.
            deployment.role()?;

            let archive = package(&deployment, output).await?;

            report_configuration(deployment.plan(), output);
            output.progress(&format!("  → Creating {name} function..."));
            let deployment = deployment.create(api, archive).await?;
            output.progress("  ✓ Lambda Function Created");

            Ok(deployment)
        }
    }
}

async fn package<S>(deployment: &Deployment<S>, output: &Output) -> Result<Archive, DeployError> {
    output.progress(&format!(
        "  → Zipping up {} function...",
        deployment.qualified_name()
    ));
    let archive = Archive::build(deployment.dir().to_path_buf()).await?;
    output.progress(&format!(
        "  → {} zipped ({} files, {} KB).",
        deployment.qualified_name(),
        archive.entries().len(),
        archive.len() / 1024
    ));
    Ok(archive)
}

fn report_configuration(plan: &DeployPlan, output: &Output) {
    match &plan.description {
        Some(_) => output.progress("  → Adding description..."),
        None => output.progress("  → No description set... Ignoring..."),
    }

    if plan.environment.is_empty() {
        output.progress("  → No environment variables set... Ignoring...");
        return;
    }

    output.progress("  → Adding environment variables");
    for key in plan.environment.keys() {
        output.progress(&format!("    → Adding env variable: {key}"));
    }
    tracing::debug!(environment = ?plan.environment, "function environment");
}
