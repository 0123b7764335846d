// ABOUTME: FunctionApi implementation backed by aws-sdk-lambda.
// ABOUTME: Credentials and default region come from the standard AWS provider chain.

use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_lambda::Client;
use aws_sdk_lambda::client::Waiters;
use aws_sdk_lambda::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_lambda::primitives::Blob;
use aws_sdk_lambda::types::{Environment, FunctionCode, FunctionConfiguration, Runtime};
use std::collections::BTreeMap;
use std::time::Duration;

use super::api::{
    CreateFunction, FunctionApi, FunctionInfo, UpdateFunctionCode, UpdateFunctionConfiguration,
};
use super::LambdaError;
use crate::package::Archive;
use crate::types::{QualifiedName, Region};

/// Longest wait for a pending code update before changing configuration.
const UPDATE_WAIT: Duration = Duration::from_secs(300);

/// Lambda client for one region.
#[derive(Debug, Clone)]
pub struct AwsLambda {
    client: Client,
    region: Option<String>,
}

impl AwsLambda {
    /// Load shared AWS config, overriding the region when one is given.
    pub async fn connect(region: Option<&Region>) -> Self {
        let mut loader = aws_config::defaults(BehaviorVersion::latest());
        if let Some(region) = region {
            loader = loader.region(aws_config::Region::new(region.as_str()));
        }
        let config = loader.load().await;

        Self {
            client: Client::new(&config),
            region: config.region().map(|r| r.to_string()),
        }
    }

    /// The region requests go to, if the provider chain resolved one.
    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }
}

/// Copy the common function fields out of any SDK output type.
macro_rules! function_info {
    ($out:expr, $fallback:expr) => {
        FunctionInfo {
            name: $out
                .function_name()
                .map(str::to_string)
                .unwrap_or_else(|| $fallback.to_string()),
            arn: $out.function_arn().map(str::to_string),
            version: $out.version().map(str::to_string),
            runtime: $out.runtime().map(|r| r.as_str().to_string()),
            last_modified: $out.last_modified().map(str::to_string),
            code_size: $out.code_size(),
        }
    };
}

/// A successful lookup means the function exists, even without a configuration block.
fn found_function(config: Option<&FunctionConfiguration>, name: &QualifiedName) -> FunctionInfo {
    match config {
        Some(config) => function_info!(config, name),
        None => FunctionInfo {
            name: name.to_string(),
            arn: None,
            version: None,
            runtime: None,
            last_modified: None,
            code_size: 0,
        },
    }
}

fn classify<E, R>(operation: &'static str, function: &QualifiedName, err: SdkError<E, R>) -> LambdaError
where
    E: ProvideErrorMetadata + std::error::Error + Send + Sync + 'static,
    R: std::fmt::Debug + Send + Sync + 'static,
{
    let code = err.as_service_error().and_then(|e| e.code()).map(str::to_string);
    let message = DisplayErrorContext(&err).to_string();
    LambdaError::from_code(operation, function.as_str(), code.as_deref(), message)
}

fn blob(archive: &Archive) -> Blob {
    Blob::new(archive.bytes().to_vec())
}

fn environment(variables: Option<BTreeMap<String, String>>) -> Option<Environment> {
    variables.map(|vars| {
        Environment::builder()
            .set_variables(Some(vars.into_iter().collect()))
            .build()
    })
}

#[async_trait]
impl FunctionApi for AwsLambda {
    async fn get_function(&self, name: &QualifiedName) -> Result<Option<FunctionInfo>, LambdaError> {
        let result = self
            .client
            .get_function()
            .function_name(name.as_str())
            .send()
            .await;

        match result {
            Ok(out) => {
                tracing::debug!(?out, "GetFunction response");
                Ok(Some(found_function(out.configuration(), name)))
            }
            Err(err) => match classify("GetFunction", name, err) {
                LambdaError::NotFound { .. } => Ok(None),
                other => Err(other),
            },
        }
    }

    async fn create_function(&self, request: CreateFunction) -> Result<FunctionInfo, LambdaError> {
        let out = self
            .client
            .create_function()
            .function_name(request.name.as_str())
            .code(FunctionCode::builder().zip_file(blob(&request.archive)).build())
            .handler(&request.handler)
            .runtime(Runtime::from(request.runtime.as_str()))
            .role(&request.role)
            .memory_size(request.memory_size)
            .timeout(request.timeout_secs)
            .publish(request.publish)
            .set_description(request.description)
            .set_environment(environment(request.environment))
            .send()
            .await
            .map_err(|err| classify("CreateFunction", &request.name, err))?;

        tracing::debug!(?out, "CreateFunction response");
        Ok(function_info!(out, request.name))
    }

    async fn update_function_code(
        &self,
        request: UpdateFunctionCode,
    ) -> Result<FunctionInfo, LambdaError> {
        let out = self
            .client
            .update_function_code()
            .function_name(request.name.as_str())
            .zip_file(blob(&request.archive))
            .publish(request.publish)
            .send()
            .await
            .map_err(|err| classify("UpdateFunctionCode", &request.name, err))?;

        tracing::debug!(?out, "UpdateFunctionCode response");
        Ok(function_info!(out, request.name))
    }

    async fn update_function_configuration(
        &self,
        request: UpdateFunctionConfiguration,
    ) -> Result<FunctionInfo, LambdaError> {
        // A configuration change is rejected while a code update is in progress.
        self.client
            .wait_until_function_updated_v2()
            .function_name(request.name.as_str())
            .wait(UPDATE_WAIT)
            .await
            .map_err(|err| LambdaError::Service {
                operation: "WaitUntilFunctionUpdated",
                message: DisplayErrorContext(&err).to_string(),
            })?;

        let out = self
            .client
            .update_function_configuration()
            .function_name(request.name.as_str())
            .set_description(request.description)
            .set_environment(environment(request.environment))
            .send()
            .await
            .map_err(|err| classify("UpdateFunctionConfiguration", &request.name, err))?;

        tracing::debug!(?out, "UpdateFunctionConfiguration response");
        Ok(function_info!(out, request.name))
    }
}
