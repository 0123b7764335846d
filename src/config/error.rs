// ABOUTME: Error type for reading and writing the local configuration file.
// ABOUTME: Carries the file path so messages point at the offending file.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid JSON in {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("configuration in {0} must be a JSON object")]
    NotAnObject(PathBuf),

    #[error("invalid '{section}' section: {source}")]
    InvalidSection {
        section: String,
        source: serde_json::Error,
    },

    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),
}
