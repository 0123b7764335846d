// ABOUTME: Function-management API seam and its request/response types.
// ABOUTME: The deploy sequence talks to this trait, never to the SDK directly.

use async_trait::async_trait;
use std::collections::BTreeMap;

use super::LambdaError;
use crate::package::Archive;
use crate::types::QualifiedName;

/// Summary of a function as reported by the API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionInfo {
    pub name: String,
    pub arn: Option<String>,
    pub version: Option<String>,
    pub runtime: Option<String>,
    pub last_modified: Option<String>,
    pub code_size: i64,
}

/// Parameters for creating a new function.
#[derive(Debug, Clone)]
pub struct CreateFunction {
    pub name: QualifiedName,
    pub archive: Archive,
    pub handler: String,
    pub runtime: String,
    pub role: String,
    pub memory_size: i32,
    pub timeout_secs: i32,
    pub publish: bool,
    pub description: Option<String>,
    pub environment: Option<BTreeMap<String, String>>,
}

/// Parameters for replacing the code of an existing function.
#[derive(Debug, Clone)]
pub struct UpdateFunctionCode {
    pub name: QualifiedName,
    pub archive: Archive,
    pub publish: bool,
}

/// Parameters for updating an existing function's configuration.
///
/// `None` fields are left untouched by the API. An environment, when given,
/// replaces the function's variables as a whole.
#[derive(Debug, Clone)]
pub struct UpdateFunctionConfiguration {
    pub name: QualifiedName,
    pub description: Option<String>,
    pub environment: Option<BTreeMap<String, String>>,
}

/// Function-management operations used by `deploy`.
#[async_trait]
pub trait FunctionApi: Send + Sync {
    /// Look up a function. `Ok(None)` means the API reported it does not exist.
    async fn get_function(&self, name: &QualifiedName) -> Result<Option<FunctionInfo>, LambdaError>;

    /// Create a function from a zip archive.
    async fn create_function(&self, request: CreateFunction) -> Result<FunctionInfo, LambdaError>;

    /// Upload new code for an existing function.
    async fn update_function_code(
        &self,
        request: UpdateFunctionCode,
    ) -> Result<FunctionInfo, LambdaError>;

    /// Change description and environment of an existing function.
    async fn update_function_configuration(
        &self,
        request: UpdateFunctionConfiguration,
    ) -> Result<FunctionInfo, LambdaError>;
}
