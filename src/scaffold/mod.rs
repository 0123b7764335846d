// ABOUTME: Generates boilerplate function directories from the embedded template.
// ABOUTME: Writes index.js and package.json, then installs dependencies.

use serde::Serialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::package::{AWS_SDK_PACKAGE, AWS_SDK_VERSION, PackageManager};
use crate::types::FunctionName;

/// Handler source written into every new function.
pub const INDEX_TEMPLATE: &str = include_str!("../../templates/index.js");

pub const INDEX_FILENAME: &str = "index.js";
pub const PACKAGE_FILENAME: &str = "package.json";

#[derive(Debug, thiserror::Error)]
pub enum ScaffoldError {
    #[error("Directory under the name {0} already exists.")]
    DirectoryExists(String),

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to render package.json: {0}")]
    Json(#[from] serde_json::Error),
}

/// Outcome of the dependency install that follows file generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallStatus {
    Installed,
    Failed(String),
}

/// A freshly generated function directory.
#[derive(Debug, Clone)]
pub struct Scaffolded {
    pub dir: PathBuf,
    pub files: Vec<PathBuf>,
    pub install: InstallStatus,
}

#[derive(Debug, Serialize)]
struct PackageJson<'a> {
    name: String,
    version: &'a str,
    description: &'a str,
    main: &'a str,
    license: &'a str,
    dependencies: BTreeMap<&'a str, &'a str>,
}

impl<'a> PackageJson<'a> {
    fn for_function(name: &FunctionName) -> Self {
        Self {
            name: name.package_name(),
            version: "",
            description: "",
            main: INDEX_FILENAME,
            license: "MIT",
            dependencies: BTreeMap::from([(AWS_SDK_PACKAGE, AWS_SDK_VERSION)]),
        }
    }
}

/// Directory a function named `name` lives in below `parent`.
pub fn function_dir(parent: &Path, name: &FunctionName) -> PathBuf {
    parent.join(name.as_str())
}

/// Render the `package.json` for a new function.
pub fn render_package_json(name: &FunctionName) -> Result<String, ScaffoldError> {
    Ok(serde_json::to_string_pretty(&PackageJson::for_function(name))?)
}

/// Create `parent/<name>` with the handler template and a package.json, then install.
///
/// An existing directory is never touched. A failed install leaves the
/// generated files in place and is reported through [`InstallStatus`].
pub async fn create_boilerplate<P>(
    parent: &Path,
    name: &FunctionName,
    package_manager: &P,
) -> Result<Scaffolded, ScaffoldError>
where
    P: PackageManager + ?Sized,
{
    let dir = function_dir(parent, name);

    tracing::info!("checking if {} exists", dir.display());
    if dir.exists() {
        return Err(ScaffoldError::DirectoryExists(name.to_string()));
    }

    std::fs::create_dir(&dir).map_err(|source| ScaffoldError::Write {
        path: dir.clone(),
        source,
    })?;

    let index_path = dir.join(INDEX_FILENAME);
    write_file(&index_path, INDEX_TEMPLATE)?;

    let package_path = dir.join(PACKAGE_FILENAME);
    write_file(&package_path, &render_package_json(name)?)?;

    let install = match package_manager.install(&dir).await {
        Ok(result) => {
            tracing::debug!(stdout = %result.stdout, "{} install output", package_manager.name());
            if result.success {
                InstallStatus::Installed
            } else {
                InstallStatus::Failed(result.stderr.trim().to_string())
            }
        }
        Err(e) => InstallStatus::Failed(e.to_string()),
    };

    Ok(Scaffolded {
        dir,
        files: vec![index_path, package_path],
        install,
    })
}

fn write_file(path: &Path, content: &str) -> Result<(), ScaffoldError> {
    std::fs::write(path, content).map_err(|source| ScaffoldError::Write {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn package_json_matches_expected_layout() {
        let name = FunctionName::new("ResizeImages").unwrap();
        let json = render_package_json(&name).unwrap();
        assert_eq!(
            json,
            r#"{
  "name": "resizeimages",
  "version": "",
  "description": "",
  "main": "index.js",
  "license": "MIT",
  "dependencies": {
    "aws-sdk": "^2.205.0"
  }
}"#
        );
    }

    #[test]
    fn template_exports_handler() {
        assert!(INDEX_TEMPLATE.contains("exports.handler"));
    }
}
