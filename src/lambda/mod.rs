// ABOUTME: Function-management API: the FunctionApi seam and its AWS implementation.
// ABOUTME: Exports request types, FunctionInfo, AwsLambda and LambdaError.

mod api;
mod aws;
mod error;

pub use api::{
    CreateFunction, FunctionApi, FunctionInfo, UpdateFunctionCode, UpdateFunctionConfiguration,
};
pub use aws::AwsLambda;
pub use error::{LambdaError, LambdaErrorKind};
