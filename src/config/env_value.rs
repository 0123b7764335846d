// ABOUTME: Function environment values with interpolation support.
// ABOUTME: Handles literal values and references to variables of the deploying shell.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::ConfigError;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum EnvValue {
    Literal(String),
    FromEnv {
        #[serde(rename = "env")]
        var: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        default: Option<String>,
    },
}

impl EnvValue {
    pub fn resolve(&self) -> Result<String, ConfigError> {
        match self {
            EnvValue::Literal(s) => Ok(s.clone()),
            EnvValue::FromEnv { var, default } => match std::env::var(var) {
                Ok(val) => Ok(val),
                Err(_) => default
                    .clone()
                    .ok_or_else(|| ConfigError::MissingEnvVar(var.clone())),
            },
        }
    }
}

pub fn resolve_env_map(
    map: &BTreeMap<String, EnvValue>,
) -> Result<BTreeMap<String, String>, ConfigError> {
    map.iter()
        .map(|(k, v)| v.resolve().map(|resolved| (k.clone(), resolved)))
        .collect()
}
