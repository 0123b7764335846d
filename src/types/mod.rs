// ABOUTME: Validated domain types for function names, prefixes, regions and env pairs.
// ABOUTME: Parsing happens once at the edge so the rest of the crate trusts these values.

mod env_var;
mod function_name;
mod qualified_name;
mod region;

pub use env_var::{EnvVar, EnvVarError};
pub use function_name::{FunctionName, FunctionNameError, MAX_FUNCTION_NAME_LEN};
pub use qualified_name::{FunctionPrefix, NO_PREFIX, PrefixError, QualifiedName};
pub use region::{REGIONS, Region, RegionError};
