// ABOUTME: Deploy command implementation.
// ABOUTME: Resolves the plan, connects to AWS and runs the deployment state machine.

use std::path::Path;
use std::time::Duration;

use crate::cli::DeployArgs;
use lambda_deploy::config::LocalConfig;
use lambda_deploy::deploy::{DeployOutcome, DeployOverrides, DeployPlan, run_deployment};
use lambda_deploy::diagnostics::Diagnostics;
use lambda_deploy::error::Result;
use lambda_deploy::lambda::AwsLambda;
use lambda_deploy::output::Output;
use lambda_deploy::package::Yarn;

/// Deploy the function directory `dir/<name>`.
pub async fn deploy(dir: &Path, args: DeployArgs, output: &mut Output) -> Result<()> {
    output.start_timer();

    let config = LocalConfig::open(dir)?;
    let overrides = DeployOverrides {
        prefix: args.prefix,
        region: args.region,
        description: args.desc,
        env: args.env,
        role: args.role,
        runtime: args.runtime,
        handler: args.handler,
        memory_size: args.memory,
        timeout: args.timeout.map(Duration::from_secs),
    };
    let plan = DeployPlan::resolve(dir, args.name, overrides, &config)?;
    tracing::debug!(?plan, "resolved deployment plan");

    let api = AwsLambda::connect(plan.region.as_ref()).await;
    output.progress(&format!(
        "  → Using region {}",
        api.region().unwrap_or("from the AWS provider chain")
    ));

    let yarn = Yarn::new();
    let mut diag = Diagnostics::default();
    let result = run_deployment(plan, &api, &yarn, output, &mut diag).await;

    // Emit collected warnings
    for warning in diag.warnings() {
        output.warning(&warning.message);
    }

    let outcome = result?;
    output.success(&summary(&outcome, diag.has_warnings()));
    Ok(())
}

fn summary(outcome: &DeployOutcome, with_warnings: bool) -> String {
    let mut line = format!(
        "Function {} {} (version {})",
        outcome.name,
        outcome.action,
        outcome.function.version.as_deref().unwrap_or("$LATEST")
    );
    if with_warnings {
        line.push_str(" with warnings");
    }
    line
}
