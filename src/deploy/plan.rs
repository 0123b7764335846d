// ABOUTME: Resolves everything a deployment needs before any side effect happens.
// ABOUTME: Merges command-line overrides, the PREFIX variable and lambda-deploy.json.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::config::{Defaults, LocalConfig, resolve_env_map};
use crate::scaffold::function_dir;
use crate::types::{EnvVar, FunctionName, FunctionPrefix, QualifiedName, Region};

use super::DeployError;

const MAX_TIMEOUT_SECS: u64 = 900;
const MIN_MEMORY_MB: i32 = 128;
const MAX_MEMORY_MB: i32 = 10_240;

/// Values given on the command line; `None` defers to the configuration.
#[derive(Debug, Clone, Default)]
pub struct DeployOverrides {
    /// Raw prefix (`null` or empty means "no prefix").
    pub prefix: Option<String>,
    pub region: Option<Region>,
    pub description: Option<String>,
    pub env: Vec<EnvVar>,
    pub role: Option<String>,
    pub runtime: Option<String>,
    pub handler: Option<String>,
    pub memory_size: Option<i32>,
    pub timeout: Option<Duration>,
}

/// Settings only used when the function has to be created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateSettings {
    pub role: Option<String>,
    pub runtime: String,
    pub handler: String,
    pub memory_size: i32,
    pub timeout: Duration,
}

/// Fully resolved deployment parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployPlan {
    pub function: FunctionName,
    pub qualified_name: QualifiedName,
    pub dir: PathBuf,
    /// `None` lets the AWS provider chain decide.
    pub region: Option<Region>,
    /// Only set when non-empty.
    pub description: Option<String>,
    /// Empty means the function's variables are left alone.
    pub environment: BTreeMap<String, String>,
    pub create: CreateSettings,
}

impl DeployPlan {
    /// Resolve a plan for `function`, whose code lives in `parent/<function>`.
    ///
    /// Precedence, highest first:
    /// - prefix: override, the function's recorded settings, `defaults.function_prefix`
    /// - region: override, the function's recorded settings, `defaults.aws_region`
    /// - environment: `--env` pairs on top of `deploy.environment`
    /// - create settings: override, `deploy` section, built-in defaults
    pub fn resolve(
        parent: &Path,
        function: FunctionName,
        overrides: DeployOverrides,
        config: &LocalConfig,
    ) -> Result<Self, DeployError> {
        let dir = function_dir(parent, &function);
        if !dir.is_dir() {
            return Err(DeployError::FunctionDirNotFound(dir));
        }

        let recorded = config.function(&function)?;
        let settings = config.deploy_settings()?;

        // Only read defaults when a value falls through to them.
        let needs_default_prefix = overrides.prefix.is_none() && recorded.is_none();
        let needs_default_region = overrides.region.is_none()
            && recorded.as_ref().and_then(|r| r.region.as_ref()).is_none();
        let defaults = if needs_default_prefix || needs_default_region {
            config.defaults()?
        } else {
            Defaults::default()
        };

        let prefix = match overrides.prefix.as_deref() {
            Some(raw) => FunctionPrefix::parse_optional(raw)?,
            None => match &recorded {
                Some(recorded) => recorded.prefix.clone(),
                None => defaults.function_prefix.clone(),
            },
        };
        let qualified_name = QualifiedName::new(&function, prefix.as_ref())?;

        let region = overrides
            .region
            .or_else(|| recorded.as_ref().and_then(|r| r.region.clone()))
            .or(defaults.aws_region);

        let description = overrides
            .description
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty());

        let mut environment = resolve_env_map(&settings.environment)?;
        environment.extend(overrides.env.into_iter().map(EnvVar::into_pair));

        let timeout = overrides.timeout.unwrap_or(settings.timeout);
        if timeout.subsec_nanos() != 0
            || timeout.as_secs() == 0
            || timeout.as_secs() > MAX_TIMEOUT_SECS
        {
            return Err(DeployError::InvalidTimeout(timeout));
        }

        let memory_size = overrides.memory_size.unwrap_or(settings.memory_size);
        if !(MIN_MEMORY_MB..=MAX_MEMORY_MB).contains(&memory_size) {
            return Err(DeployError::InvalidMemorySize(memory_size));
        }

        let create = CreateSettings {
            role: overrides
                .role
                .or(settings.role)
                .filter(|r| !r.trim().is_empty()),
            runtime: overrides.runtime.unwrap_or(settings.runtime),
            handler: overrides.handler.unwrap_or(settings.handler),
            memory_size,
            timeout,
        };

        Ok(Self {
            function,
            qualified_name,
            dir,
            region,
            description,
            environment,
            create,
        })
    }

    /// Environment for API requests: `None` when no variables were given.
    pub fn environment_update(&self) -> Option<BTreeMap<String, String>> {
        if self.environment.is_empty() {
            None
        } else {
            Some(self.environment.clone())
        }
    }
}
