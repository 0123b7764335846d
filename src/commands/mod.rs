// ABOUTME: Command module aggregator for the lambda-deploy CLI.
// ABOUTME: Re-exports init, create, and deploy command handlers.

mod create;
mod deploy;
mod init;

pub use create::create;
pub use deploy::deploy;
pub use init::init;
