// ABOUTME: Config scaffolding for new projects.
// ABOUTME: Creates an empty lambda-deploy.json, optionally resetting an existing one.

use std::path::{Path, PathBuf};

use super::{CONFIG_FILENAME, ConfigError, LocalConfig};

/// What `init_config` did with the configuration file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InitOutcome {
    Created(PathBuf),
    Existing(PathBuf),
    Reset(PathBuf),
}

pub fn init_config(dir: &Path, force: bool) -> Result<InitOutcome, ConfigError> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        LocalConfig::open(dir)?;
        return Ok(InitOutcome::Created(config_path));
    }

    if !force {
        // Parse it anyway so a broken file is reported now rather than at deploy time.
        LocalConfig::open(dir)?;
        return Ok(InitOutcome::Existing(config_path));
    }

    LocalConfig::write_fresh(&config_path)?;
    Ok(InitOutcome::Reset(config_path))
}
