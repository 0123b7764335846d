// ABOUTME: In-memory zip archive of a function directory for upload.
// ABOUTME: Entries are relative to the directory root and written in sorted order.

use bytes::Bytes;
use std::fs::File;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;
use zip::CompressionMethod;
use zip::write::SimpleFileOptions;

use super::PackageError;

/// A zipped function directory.
#[derive(Clone)]
pub struct Archive {
    bytes: Bytes,
    entries: Vec<String>,
}

impl std::fmt::Debug for Archive {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Archive")
            .field("size", &self.bytes.len())
            .field("entries", &self.entries.len())
            .finish()
    }
}

impl Archive {
    /// Zip every regular file below `dir` (symlinks followed).
    pub fn from_dir(dir: &Path) -> Result<Self, PackageError> {
        if !dir.is_dir() {
            return Err(PackageError::NotFound(dir.to_path_buf()));
        }

        let mut zip = zip::ZipWriter::new(Cursor::new(Vec::new()));
        let mut entries = Vec::new();

        for entry in WalkDir::new(dir).follow_links(true).sort_by_file_name() {
            let entry = entry?;
            if !entry.file_type().is_file() {
                continue;
            }

            let relative = entry
                .path()
                .strip_prefix(dir)
                .map_err(|e| PackageError::Io(std::io::Error::other(e)))?;
            let name = entry_name(relative);

            let options = SimpleFileOptions::default()
                .compression_method(CompressionMethod::Deflated)
                .unix_permissions(file_mode(&entry.metadata()?));

            zip.start_file(name.as_str(), options)?;
            let mut file = File::open(entry.path())?;
            std::io::copy(&mut file, &mut zip)?;
            entries.push(name);
        }

        if entries.is_empty() {
            return Err(PackageError::EmptyArchive(dir.to_path_buf()));
        }

        let cursor = zip.finish()?;

        Ok(Self {
            bytes: Bytes::from(cursor.into_inner()),
            entries,
        })
    }

    /// Build the archive on the blocking pool.
    pub async fn build(dir: PathBuf) -> Result<Self, PackageError> {
        tokio::task::spawn_blocking(move || Self::from_dir(&dir))
            .await
            .map_err(|e| PackageError::Join(e.to_string()))?
    }

    pub fn bytes(&self) -> &Bytes {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Paths stored in the archive, in the order they were written.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }
}

/// Zip entry names always use forward slashes.
fn entry_name(relative: &Path) -> String {
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(unix)]
fn file_mode(metadata: &std::fs::Metadata) -> u32 {
    use std::os::unix::fs::PermissionsExt;
    metadata.permissions().mode() & 0o777
}

#[cfg(not(unix))]
fn file_mode(_metadata: &std::fs::Metadata) -> u32 {
    0o644
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_names_use_forward_slashes() {
        let path: PathBuf = ["node_modules", "left-pad", "index.js"].iter().collect();
        assert_eq!(entry_name(&path), "node_modules/left-pad/index.js");
    }

    #[test]
    fn missing_directory_is_not_found() {
        let err = Archive::from_dir(Path::new("/nonexistent/function")).unwrap_err();
        assert!(matches!(err, PackageError::NotFound(_)));
    }
}
