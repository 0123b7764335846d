// ABOUTME: Lambda API error types with SNAFU pattern.
// ABOUTME: Classifies provider failures into kinds the deploy sequence can branch on.

use snafu::Snafu;

/// Failure of a single function-management API call.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum LambdaError {
    #[snafu(display("{operation}: function {function} not found"))]
    NotFound {
        operation: &'static str,
        function: String,
    },

    #[snafu(display("{operation}: access denied: {message}"))]
    AccessDenied {
        operation: &'static str,
        message: String,
    },

    #[snafu(display("{operation}: request rejected: {message}"))]
    InvalidRequest {
        operation: &'static str,
        message: String,
    },

    #[snafu(display("{operation} failed: {message}"))]
    Service {
        operation: &'static str,
        message: String,
    },
}

/// Error kind for programmatic handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LambdaErrorKind {
    /// The function does not exist.
    NotFound,
    /// Credentials are missing or lack the required permission.
    AccessDenied,
    /// The API rejected the parameters (bad role, oversized archive, ...).
    InvalidRequest,
    /// Anything else: throttling, network, service faults.
    Service,
}

impl LambdaError {
    /// Returns the error kind for programmatic handling.
    pub fn kind(&self) -> LambdaErrorKind {
        match self {
            LambdaError::NotFound { .. } => LambdaErrorKind::NotFound,
            LambdaError::AccessDenied { .. } => LambdaErrorKind::AccessDenied,
            LambdaError::InvalidRequest { .. } => LambdaErrorKind::InvalidRequest,
            LambdaError::Service { .. } => LambdaErrorKind::Service,
        }
    }

    /// Name of the API operation that failed.
    pub fn operation(&self) -> &'static str {
        match self {
            LambdaError::NotFound { operation, .. }
            | LambdaError::AccessDenied { operation, .. }
            | LambdaError::InvalidRequest { operation, .. }
            | LambdaError::Service { operation, .. } => operation,
        }
    }

    /// Classify a provider error code.
    pub fn from_code(
        operation: &'static str,
        function: &str,
        code: Option<&str>,
        message: String,
    ) -> Self {
        match code.unwrap_or_default() {
            "ResourceNotFoundException" => LambdaError::NotFound {
                operation,
                function: function.to_string(),
            },
            "AccessDeniedException" | "UnrecognizedClientException" | "ExpiredTokenException" => {
                LambdaError::AccessDenied { operation, message }
            }
            "InvalidParameterValueException"
            | "ResourceConflictException"
            | "CodeStorageExceededException"
            | "RequestTooLargeException" => LambdaError::InvalidRequest { operation, message },
            _ => LambdaError::Service { operation, message },
        }
    }
}
