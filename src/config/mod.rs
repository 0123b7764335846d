// ABOUTME: Local JSON configuration file (lambda-deploy.json) in the working directory.
// ABOUTME: Namespaced key/value store with typed views for defaults and deploy settings.

mod deserialize;
mod env_value;
mod error;
mod init;
mod settings;

pub use env_value::{EnvValue, resolve_env_map};
pub use error::ConfigError;
pub use init::{InitOutcome, init_config};
pub use settings::{
    DEFAULT_HANDLER, DEFAULT_MEMORY_MB, DEFAULT_RUNTIME, DEFAULT_TIMEOUT, DeploySettings, Defaults,
    FunctionSettings,
};

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

use crate::types::{FunctionName, FunctionPrefix, Region};

pub const CONFIG_FILENAME: &str = "lambda-deploy.json";

pub const DEFAULTS_SECTION: &str = "defaults";
pub const FUNCTIONS_SECTION: &str = "functions";
pub const DEPLOY_SECTION: &str = "deploy";

/// The configuration document plus the file it was loaded from.
///
/// Unknown keys are preserved: `set` and `save` only ever touch the keys they
/// are asked to, so the file can carry settings for other tools.
#[derive(Debug, Clone)]
pub struct LocalConfig {
    path: PathBuf,
    doc: Map<String, Value>,
}

impl LocalConfig {
    /// Open the configuration in `dir`, creating an empty one first if missing.
    pub fn open(dir: &Path) -> Result<Self, ConfigError> {
        let path = dir.join(CONFIG_FILENAME);

        if !path.exists() {
            tracing::info!("creating configuration file {}", path.display());
            Self::write_fresh(&path)?;
        }

        Self::load(&path)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let doc = Self::parse(path, &content)?;

        Ok(Self {
            path: path.to_path_buf(),
            doc,
        })
    }

    fn parse(path: &Path, content: &str) -> Result<Map<String, Value>, ConfigError> {
        let value: Value = serde_json::from_str(content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        match value {
            Value::Object(map) => Ok(map),
            _ => Err(ConfigError::NotAnObject(path.to_path_buf())),
        }
    }

    pub(crate) fn write_fresh(path: &Path) -> Result<(), ConfigError> {
        std::fs::write(path, "{}").map_err(|source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The whole configuration document.
    pub fn get(&self) -> &Map<String, Value> {
        &self.doc
    }

    /// Set `key` at the top level, or inside `namespace` when given.
    ///
    /// A namespace that is missing, or holds something other than an object,
    /// is replaced by an empty object first.
    pub fn set(&mut self, key: &str, value: Value, namespace: Option<&str>) {
        match namespace {
            Some(ns) => {
                let section = self
                    .doc
                    .entry(ns.to_string())
                    .or_insert_with(|| Value::Object(Map::new()));
                if !section.is_object() {
                    *section = Value::Object(Map::new());
                }
                if let Value::Object(map) = section {
                    map.insert(key.to_string(), value);
                }
            }
            None => {
                self.doc.insert(key.to_string(), value);
            }
        }
    }

    pub fn save(&self) -> Result<(), ConfigError> {
        std::fs::write(&self.path, self.to_string()).map_err(|source| ConfigError::Write {
            path: self.path.clone(),
            source,
        })
    }

    pub fn defaults(&self) -> Result<Defaults, ConfigError> {
        self.section(DEFAULTS_SECTION, self.doc.get(DEFAULTS_SECTION))
    }

    pub fn deploy_settings(&self) -> Result<DeploySettings, ConfigError> {
        self.section(DEPLOY_SECTION, self.doc.get(DEPLOY_SECTION))
    }

    /// Settings recorded for a scaffolded function, `None` if it was never recorded.
    pub fn function(&self, name: &FunctionName) -> Result<Option<FunctionSettings>, ConfigError> {
        let value = self
            .doc
            .get(FUNCTIONS_SECTION)
            .and_then(|functions| functions.get(name.as_str()));
        match value {
            None => Ok(None),
            Some(_) => self
                .section(&format!("{FUNCTIONS_SECTION}.{name}"), value)
                .map(Some),
        }
    }

    /// Store the prefix and region answered for a function.
    pub fn record_function(&mut self, name: &FunctionName, settings: &FunctionSettings) {
        let value = serde_json::to_value(settings).unwrap_or(Value::Null);
        self.set(name.as_str(), value, Some(FUNCTIONS_SECTION));
    }

    /// Remember a prefix and region as the defaults for future prompts.
    pub fn save_defaults(&mut self, prefix: Option<&FunctionPrefix>, region: Option<&Region>) {
        let prefix = prefix.map_or(Value::Null, |p| Value::String(p.to_string()));
        let region = region.map_or(Value::Null, |r| Value::String(r.to_string()));
        self.set("function_prefix", prefix, Some(DEFAULTS_SECTION));
        self.set("aws_region", region, Some(DEFAULTS_SECTION));
    }

    fn section<T>(&self, name: &str, value: Option<&Value>) -> Result<T, ConfigError>
    where
        T: DeserializeOwned + Default,
    {
        match value {
            None | Some(Value::Null) => Ok(T::default()),
            Some(v) => serde_json::from_value(v.clone()).map_err(|source| {
                ConfigError::InvalidSection {
                    section: name.to_string(),
                    source,
                }
            }),
        }
    }
}

impl std::fmt::Display for LocalConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match serde_json::to_string(&self.doc) {
            Ok(json) => f.write_str(&json),
            Err(_) => Err(std::fmt::Error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn config_with(doc: Value) -> LocalConfig {
        LocalConfig {
            path: PathBuf::from(CONFIG_FILENAME),
            doc: doc.as_object().cloned().unwrap(),
        }
    }

    #[test]
    fn set_without_namespace_writes_top_level() {
        let mut config = config_with(json!({}));
        config.set("owner", json!("platform"), None);
        assert_eq!(config.get().get("owner"), Some(&json!("platform")));
    }

    #[test]
    fn set_creates_missing_namespace() {
        let mut config = config_with(json!({}));
        config.set("aws_region", json!("eu-west-1"), Some("defaults"));
        assert_eq!(config.to_string(), r#"{"defaults":{"aws_region":"eu-west-1"}}"#);
    }

    #[test]
    fn set_replaces_non_object_namespace() {
        let mut config = config_with(json!({ "defaults": 3 }));
        config.set("aws_region", json!("eu-west-1"), Some("defaults"));
        assert_eq!(
            config.get().get("defaults"),
            Some(&json!({ "aws_region": "eu-west-1" }))
        );
    }

    #[test]
    fn set_keeps_sibling_keys() {
        let mut config = config_with(json!({ "defaults": { "function_prefix": "dev" } }));
        config.set("aws_region", json!("us-east-1"), Some("defaults"));
        let defaults = config.defaults().unwrap();
        assert_eq!(defaults.function_prefix.unwrap().as_str(), "dev");
        assert_eq!(defaults.aws_region.unwrap().as_str(), "us-east-1");
    }

    #[test]
    fn missing_sections_use_defaults() {
        let config = config_with(json!({}));
        assert_eq!(config.defaults().unwrap(), Defaults::default());
        assert_eq!(config.deploy_settings().unwrap(), DeploySettings::default());
    }

    #[test]
    fn invalid_section_names_the_section() {
        let config = config_with(json!({ "defaults": { "aws_region": "nowhere-1" } }));
        let err = config.defaults().unwrap_err();
        assert!(err.to_string().contains("defaults"), "got: {err}");
    }

    #[test]
    fn record_function_round_trips() {
        let mut config = config_with(json!({}));
        let name = FunctionName::new("resize").unwrap();
        let settings = FunctionSettings {
            prefix: FunctionPrefix::parse_optional("prod").unwrap(),
            region: Some(Region::new("eu-central-1").unwrap()),
        };

        assert_eq!(config.function(&name).unwrap(), None);
        config.record_function(&name, &settings);

        assert_eq!(config.function(&name).unwrap(), Some(settings));
        assert_eq!(
            config.get().get("functions"),
            Some(&json!({ "resize": { "prefix": "prod", "region": "eu-central-1" } }))
        );
    }
}
