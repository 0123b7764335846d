// ABOUTME: Validated Lambda function name as used for local directories.
// ABOUTME: Enforces the AWS character set and the 64 character limit.

use std::fmt;
use thiserror::Error;

/// Longest name AWS accepts for a function.
pub const MAX_FUNCTION_NAME_LEN: usize = 64;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FunctionNameError {
    #[error("function name cannot be empty")]
    Empty,

    #[error("function name exceeds maximum length of {MAX_FUNCTION_NAME_LEN} characters")]
    TooLong,

    #[error("invalid character in function name: '{0}'")]
    InvalidChar(char),
}

/// Name of a function directory and the unprefixed Lambda function name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FunctionName(String);

impl FunctionName {
    pub fn new(value: &str) -> Result<Self, FunctionNameError> {
        let value = value.trim();
        if value.is_empty() {
            return Err(FunctionNameError::Empty);
        }

        if value.len() > MAX_FUNCTION_NAME_LEN {
            return Err(FunctionNameError::TooLong);
        }

        validate_chars(value).map_err(FunctionNameError::InvalidChar)?;

        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Name used for the generated `package.json` (npm requires lowercase).
    pub fn package_name(&self) -> String {
        self.0.to_lowercase()
    }
}

impl fmt::Display for FunctionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for FunctionName {
    type Err = FunctionNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// Letters, digits, hyphens and underscores only.
pub(crate) fn validate_chars(value: &str) -> Result<(), char> {
    match value
        .chars()
        .find(|c| !c.is_ascii_alphanumeric() && *c != '-' && *c != '_')
    {
        Some(c) => Err(c),
        None => Ok(()),
    }
}
