// ABOUTME: Integration tests for function scaffolding.
// ABOUTME: Verifies generated files, package.json layout and install handling.

mod support;

use std::fs;

use lambda_deploy::scaffold::{
    INDEX_TEMPLATE, InstallStatus, ScaffoldError, create_boilerplate, render_package_json,
};
use lambda_deploy::types::FunctionName;
use serde_json::Value;
use support::FakePackageManager;

#[tokio::test]
async fn creates_directory_with_template_and_package_json() {
    let tmp = tempfile::tempdir().unwrap();
    let pm = FakePackageManager::new();
    let name = FunctionName::new("myFunFunction").unwrap();

    let scaffolded = create_boilerplate(tmp.path(), &name, &pm).await.unwrap();

    assert_eq!(scaffolded.dir, tmp.path().join("myFunFunction"));
    assert_eq!(scaffolded.install, InstallStatus::Installed);
    assert_eq!(scaffolded.files.len(), 2);

    let index = fs::read_to_string(scaffolded.dir.join("index.js")).unwrap();
    assert_eq!(index, INDEX_TEMPLATE);
    assert!(index.contains("Hello from Lambda"));

    let package: Value =
        serde_json::from_str(&fs::read_to_string(scaffolded.dir.join("package.json")).unwrap())
            .unwrap();
    assert_eq!(package["name"], "myfunfunction");
    assert_eq!(package["main"], "index.js");
    assert_eq!(package["license"], "MIT");
    assert_eq!(package["dependencies"]["aws-sdk"], "^2.205.0");

    assert_eq!(pm.commands(), vec!["install"]);
    assert_eq!(pm.dirs(), vec![scaffolded.dir.clone()]);
}

#[test]
fn package_json_is_pretty_printed_in_field_order() {
    let rendered = render_package_json(&FunctionName::new("Orders").unwrap()).unwrap();
    let expected = r#"{
  "name": "orders",
  "version": "",
  "description": "",
  "main": "index.js",
  "license": "MIT",
  "dependencies": {
    "aws-sdk": "^2.205.0"
  }
}"#;
    assert_eq!(rendered, expected);
}

#[tokio::test]
async fn existing_directory_is_left_untouched() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = tmp.path().join("orders");
    fs::create_dir(&dir).unwrap();
    fs::write(dir.join("index.js"), "// mine").unwrap();
    let pm = FakePackageManager::new();

    let err = create_boilerplate(tmp.path(), &FunctionName::new("orders").unwrap(), &pm)
        .await
        .unwrap_err();

    assert!(matches!(err, ScaffoldError::DirectoryExists(ref n) if n == "orders"));
    assert_eq!(
        err.to_string(),
        "Directory under the name orders already exists."
    );
    assert_eq!(fs::read_to_string(dir.join("index.js")).unwrap(), "// mine");
    assert!(pm.commands().is_empty());
}

#[tokio::test]
async fn failed_install_keeps_generated_files() {
    let tmp = tempfile::tempdir().unwrap();
    let pm = FakePackageManager::new().failing("install");

    let scaffolded = create_boilerplate(tmp.path(), &FunctionName::new("orders").unwrap(), &pm)
        .await
        .unwrap();

    assert!(matches!(scaffolded.install, InstallStatus::Failed(ref reason) if reason.contains("install failed")));
    assert!(scaffolded.dir.join("index.js").is_file());
    assert!(scaffolded.dir.join("package.json").is_file());
}
