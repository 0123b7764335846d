// ABOUTME: Function prefix and the prefixed name a function carries inside AWS.
// ABOUTME: The prefix namespaces functions per project or stage.

use std::fmt;
use thiserror::Error;

use super::function_name::{FunctionName, MAX_FUNCTION_NAME_LEN, validate_chars};

/// Input that prompts and config files use to mean "no prefix".
pub const NO_PREFIX: &str = "null";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PrefixError {
    #[error("invalid character in function prefix: '{0}'")]
    InvalidChar(char),

    #[error("prefixed function name '{0}' exceeds {MAX_FUNCTION_NAME_LEN} characters")]
    TooLong(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FunctionPrefix(String);

impl FunctionPrefix {
    /// Parse a prefix, treating an empty value or `null` as absent.
    pub fn parse_optional(value: &str) -> Result<Option<Self>, PrefixError> {
        let value = value.trim();
        if value.is_empty() || value == NO_PREFIX {
            return Ok(None);
        }

        validate_chars(value).map_err(PrefixError::InvalidChar)?;
        Ok(Some(Self(value.to_string())))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FunctionPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The function name used within AWS: `{prefix}-{function}` or just `{function}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QualifiedName(String);

impl QualifiedName {
    pub fn new(
        function: &FunctionName,
        prefix: Option<&FunctionPrefix>,
    ) -> Result<Self, PrefixError> {
        let name = match prefix {
            Some(prefix) => format!("{}-{}", prefix, function),
            None => function.to_string(),
        };

        if name.len() > MAX_FUNCTION_NAME_LEN {
            return Err(PrefixError::TooLong(name));
        }

        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
