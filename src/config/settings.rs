// ABOUTME: Typed views over the sections of the local configuration file.
// ABOUTME: Defaults for create, per-function settings, and deploy parameters.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::Duration;

use super::EnvValue;
use super::deserialize::{deserialize_prefix, deserialize_region, serialize_prefix, serialize_region};
use crate::types::{FunctionPrefix, Region};

pub const DEFAULT_RUNTIME: &str = "nodejs18.x";
pub const DEFAULT_HANDLER: &str = "index.handler";
pub const DEFAULT_MEMORY_MB: i32 = 128;
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// The `defaults` section, written by `create` when the user saves answers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Defaults {
    #[serde(default, deserialize_with = "deserialize_prefix")]
    pub function_prefix: Option<FunctionPrefix>,

    #[serde(default, deserialize_with = "deserialize_region")]
    pub aws_region: Option<Region>,
}

/// Settings recorded under `functions.<name>` when a function is scaffolded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct FunctionSettings {
    #[serde(
        default,
        deserialize_with = "deserialize_prefix",
        serialize_with = "serialize_prefix"
    )]
    pub prefix: Option<FunctionPrefix>,

    #[serde(
        default,
        deserialize_with = "deserialize_region",
        serialize_with = "serialize_region"
    )]
    pub region: Option<Region>,
}

/// The `deploy` section: parameters used when a function is created in AWS.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DeploySettings {
    #[serde(default)]
    pub role: Option<String>,

    #[serde(default = "default_runtime")]
    pub runtime: String,

    #[serde(default = "default_handler")]
    pub handler: String,

    #[serde(default = "default_memory_size")]
    pub memory_size: i32,

    #[serde(default = "default_timeout", with = "humantime_serde")]
    pub timeout: Duration,

    #[serde(default)]
    pub environment: BTreeMap<String, EnvValue>,
}

impl Default for DeploySettings {
    fn default() -> Self {
        Self {
            role: None,
            runtime: default_runtime(),
            handler: default_handler(),
            memory_size: default_memory_size(),
            timeout: default_timeout(),
            environment: BTreeMap::new(),
        }
    }
}

fn default_runtime() -> String {
    DEFAULT_RUNTIME.to_string()
}

fn default_handler() -> String {
    DEFAULT_HANDLER.to_string()
}

fn default_memory_size() -> i32 {
    DEFAULT_MEMORY_MB
}

fn default_timeout() -> Duration {
    DEFAULT_TIMEOUT
}
