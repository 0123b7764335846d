// ABOUTME: Error types for packaging function directories.
// ABOUTME: Covers archive creation and package manager invocation failures.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum PackageError {
    #[error("function directory not found: {0}")]
    NotFound(PathBuf),

    #[error("nothing to package: {0} contains no files")]
    EmptyArchive(PathBuf),

    #[error("failed to walk function directory: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("failed to write zip archive: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("I/O error while packaging: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to run {program}: {source}")]
    Spawn {
        program: String,
        source: std::io::Error,
    },

    #[error("archive task failed: {0}")]
    Join(String),
}
