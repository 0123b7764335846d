// ABOUTME: Init command implementation.
// ABOUTME: Creates or resets lambda-deploy.json in the working directory.

use std::path::Path;

use lambda_deploy::config::{InitOutcome, init_config};
use lambda_deploy::error::Result;
use lambda_deploy::output::Output;

pub fn init(dir: &Path, force: bool, output: &Output) -> Result<()> {
    match init_config(dir, force)? {
        InitOutcome::Created(path) => {
            output.success(&format!("Created {}", path.display()));
        }
        InitOutcome::Existing(path) => {
            output.progress("  → Configuration already present, leaving it unchanged (--force resets it)");
            output.success(&format!("Using {}", path.display()));
        }
        InitOutcome::Reset(path) => {
            output.success(&format!("Reset {}", path.display()));
        }
    }
    Ok(())
}
