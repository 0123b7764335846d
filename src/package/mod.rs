// ABOUTME: Packaging of function directories: dependency management and zip archives.
// ABOUTME: Exports the PackageManager seam, the yarn implementation and Archive.

mod archive;
mod error;
mod yarn;

pub use archive::Archive;
pub use error::PackageError;
pub use yarn::{CommandOutput, PackageManager, Yarn};

/// The dependency the Lambda Node.js runtime already provides.
///
/// It is listed in generated `package.json` files for local development and
/// stripped from the directory while the archive is built.
pub const AWS_SDK_PACKAGE: &str = "aws-sdk";

/// Version range written into generated `package.json` files.
pub const AWS_SDK_VERSION: &str = "^2.205.0";
