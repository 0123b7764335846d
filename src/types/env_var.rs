// ABOUTME: KEY=VALUE environment variable pairs passed on the command line.
// ABOUTME: Splits on the first '=' so values may themselves contain '='.

use std::fmt;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EnvVarError {
    #[error("expected KEY=VALUE, got '{0}'")]
    MissingSeparator(String),

    #[error("environment variable name cannot be empty")]
    EmptyKey,

    #[error("environment variable name must start with a letter: '{0}'")]
    InvalidStart(String),

    #[error("invalid character in environment variable name: '{0}'")]
    InvalidChar(char),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvVar {
    key: String,
    value: String,
}

impl EnvVar {
    pub fn parse(input: &str) -> Result<Self, EnvVarError> {
        let (key, value) = input
            .split_once('=')
            .ok_or_else(|| EnvVarError::MissingSeparator(input.to_string()))?;

        let key = key.trim();
        let first = key.chars().next().ok_or(EnvVarError::EmptyKey)?;
        if !first.is_ascii_alphabetic() {
            return Err(EnvVarError::InvalidStart(key.to_string()));
        }

        if let Some(c) = key
            .chars()
            .find(|c| !c.is_ascii_alphanumeric() && *c != '_')
        {
            return Err(EnvVarError::InvalidChar(c));
        }

        Ok(Self {
            key: key.to_string(),
            value: value.to_string(),
        })
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn into_pair(self) -> (String, String) {
        (self.key, self.value)
    }
}

impl fmt::Display for EnvVar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.key, self.value)
    }
}

impl std::str::FromStr for EnvVar {
    type Err = EnvVarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
