// ABOUTME: Deployment orchestration using the type state pattern.
// ABOUTME: Exports state markers, the plan resolver and the sequence driver.

mod deployment;
mod error;
mod plan;
mod run;
mod state;
mod transitions;

pub use deployment::{DeployOutcome, Deployment, Target};
pub use error::DeployError;
pub use plan::{CreateSettings, DeployOverrides, DeployPlan};
pub use run::run_deployment;
pub use state::{CodeUpdated, Completed, DeployAction, Existing, Initialized, Missing, SdkStripped};
pub use transitions::restore_sdk;
