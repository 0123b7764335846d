// ABOUTME: Library root for lambda-deploy - exposes public types for testing.
// ABOUTME: The main binary is in main.rs.

pub mod config;
pub mod deploy;
pub mod diagnostics;
pub mod error;
pub mod lambda;
pub mod output;
pub mod package;
pub mod scaffold;
pub mod toolchain;
pub mod types;
