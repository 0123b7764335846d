// ABOUTME: Test support utilities.
// ABOUTME: In-memory function API and package manager fakes that record every call.

use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Once;

use lambda_deploy::lambda::{
    CreateFunction, FunctionApi, FunctionInfo, LambdaError, UpdateFunctionCode,
    UpdateFunctionConfiguration,
};
use lambda_deploy::package::{CommandOutput, PackageError, PackageManager};
use lambda_deploy::types::QualifiedName;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for tests. Safe to call multiple times.
#[allow(dead_code)]
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::EnvFilter;
        let filter = EnvFilter::from_default_env()
            .add_directive("lambda_deploy=debug".parse().unwrap());
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init()
            .ok();
    });
}

/// Build a function info as the API would report it.
#[allow(dead_code)]
pub fn function_info(name: &str, version: &str) -> FunctionInfo {
    FunctionInfo {
        name: name.to_string(),
        arn: Some(format!("arn:aws:lambda:us-east-1:123456789012:function:{name}")),
        version: Some(version.to_string()),
        runtime: Some("nodejs18.x".to_string()),
        last_modified: Some("2026-10-17T12:00:00.000+0000".to_string()),
        code_size: 1024,
    }
}

/// A recorded function API call, without archive bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(dead_code)]
pub enum ApiCall {
    Get(String),
    Create {
        name: String,
        entries: Vec<String>,
        handler: String,
        runtime: String,
        role: String,
        memory_size: i32,
        timeout_secs: i32,
        publish: bool,
        description: Option<String>,
        environment: Option<BTreeMap<String, String>>,
    },
    UpdateCode {
        name: String,
        entries: Vec<String>,
        publish: bool,
    },
    UpdateConfiguration {
        name: String,
        description: Option<String>,
        environment: Option<BTreeMap<String, String>>,
    },
}

#[derive(Default)]
#[allow(dead_code)]
struct LambdaState {
    functions: BTreeMap<String, FunctionInfo>,
    calls: Vec<ApiCall>,
    lookup_error: Option<fn(&str) -> LambdaError>,
    configuration_error: Option<fn(&str) -> LambdaError>,
}

/// In-memory function API.
#[derive(Default)]
#[allow(dead_code)]
pub struct FakeLambda {
    state: Mutex<LambdaState>,
}

#[allow(dead_code)]
impl FakeLambda {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with an existing function.
    pub fn with_function(self, name: &str) -> Self {
        self.state
            .lock()
            .functions
            .insert(name.to_string(), function_info(name, "1"));
        self
    }

    /// Make every lookup fail with the given error.
    pub fn failing_lookup(self, error: fn(&str) -> LambdaError) -> Self {
        self.state.lock().lookup_error = Some(error);
        self
    }

    /// Make configuration updates fail with the given error.
    pub fn failing_configuration(self, error: fn(&str) -> LambdaError) -> Self {
        self.state.lock().configuration_error = Some(error);
        self
    }

    pub fn calls(&self) -> Vec<ApiCall> {
        self.state.lock().calls.clone()
    }

    pub fn function(&self, name: &str) -> Option<FunctionInfo> {
        self.state.lock().functions.get(name).cloned()
    }

    fn next_version(&self, name: &str) -> FunctionInfo {
        let mut state = self.state.lock();
        let version = state
            .functions
            .get(name)
            .and_then(|f| f.version.as_deref())
            .and_then(|v| v.parse::<u32>().ok())
            .map_or(1, |v| v + 1);
        let info = function_info(name, &version.to_string());
        state.functions.insert(name.to_string(), info.clone());
        info
    }
}

#[async_trait]
impl FunctionApi for FakeLambda {
    async fn get_function(&self, name: &QualifiedName) -> Result<Option<FunctionInfo>, LambdaError> {
        let mut state = self.state.lock();
        state.calls.push(ApiCall::Get(name.to_string()));
        if let Some(error) = state.lookup_error {
            return Err(error(name.as_str()));
        }
        Ok(state.functions.get(name.as_str()).cloned())
    }

    async fn create_function(&self, request: CreateFunction) -> Result<FunctionInfo, LambdaError> {
        self.state.lock().calls.push(ApiCall::Create {
            name: request.name.to_string(),
            entries: request.archive.entries().to_vec(),
            handler: request.handler,
            runtime: request.runtime,
            role: request.role,
            memory_size: request.memory_size,
            timeout_secs: request.timeout_secs,
            publish: request.publish,
            description: request.description,
            environment: request.environment,
        });
        Ok(self.next_version(request.name.as_str()))
    }

    async fn update_function_code(
        &self,
        request: UpdateFunctionCode,
    ) -> Result<FunctionInfo, LambdaError> {
        self.state.lock().calls.push(ApiCall::UpdateCode {
            name: request.name.to_string(),
            entries: request.archive.entries().to_vec(),
            publish: request.publish,
        });
        Ok(self.next_version(request.name.as_str()))
    }

    async fn update_function_configuration(
        &self,
        request: UpdateFunctionConfiguration,
    ) -> Result<FunctionInfo, LambdaError> {
        let error = {
            let mut state = self.state.lock();
            state.calls.push(ApiCall::UpdateConfiguration {
                name: request.name.to_string(),
                description: request.description,
                environment: request.environment,
            });
            state.configuration_error
        };
        if let Some(error) = error {
            return Err(error(request.name.as_str()));
        }
        self.function(request.name.as_str())
            .ok_or_else(|| LambdaError::NotFound {
                operation: "UpdateFunctionConfiguration",
                function: request.name.to_string(),
            })
    }
}

/// In-memory package manager that records `<action> <package>` per call.
#[derive(Default)]
pub struct FakePackageManager {
    calls: Mutex<Vec<(PathBuf, String)>>,
    failing: Mutex<Vec<String>>,
}

#[allow(dead_code)]
impl FakePackageManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the given action (`install`, `add`, `remove`) exit non-zero.
    pub fn failing(self, action: &str) -> Self {
        self.failing.lock().push(action.to_string());
        self
    }

    /// Recorded calls without their directories.
    pub fn commands(&self) -> Vec<String> {
        self.calls.lock().iter().map(|(_, c)| c.clone()).collect()
    }

    pub fn dirs(&self) -> Vec<PathBuf> {
        self.calls.lock().iter().map(|(d, _)| d.clone()).collect()
    }

    fn record(&self, dir: &Path, action: &str, command: String) -> CommandOutput {
        self.calls.lock().push((dir.to_path_buf(), command));
        if self.failing.lock().iter().any(|a| a == action) {
            CommandOutput {
                success: false,
                exit_code: Some(1),
                stdout: String::new(),
                stderr: format!("error {action} failed\n"),
            }
        } else {
            CommandOutput {
                success: true,
                exit_code: Some(0),
                stdout: "Done in 0.01s.\n".to_string(),
                stderr: String::new(),
            }
        }
    }
}

#[async_trait]
impl PackageManager for FakePackageManager {
    fn name(&self) -> &str {
        "fake-yarn"
    }

    async fn install(&self, dir: &Path) -> Result<CommandOutput, PackageError> {
        Ok(self.record(dir, "install", "install".to_string()))
    }

    async fn add(&self, dir: &Path, package: &str) -> Result<CommandOutput, PackageError> {
        Ok(self.record(dir, "add", format!("add {package}")))
    }

    async fn remove(&self, dir: &Path, package: &str) -> Result<CommandOutput, PackageError> {
        Ok(self.record(dir, "remove", format!("remove {package}")))
    }
}
