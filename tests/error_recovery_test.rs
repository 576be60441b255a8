mod common;

use anyhow::Result;
use common::TestRoot;
use predicates::prelude::*;
use std::fs;

#[test]
fn test_malformed_manifest_fails_without_writing() -> Result<()> {
    let root = TestRoot::new()?;
    root.write("resources.json", "{\"images\": [")?;
    root.image("a.ff")?;

    root.resman()?
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error:"))
        .stderr(predicate::str::contains("Failed to parse manifest"));

    assert_eq!(root.manifest_text()?, "{\"images\": [");
    Ok(())
}

#[test]
fn test_manifest_without_images_key_fails() -> Result<()> {
    let root = TestRoot::new()?;
    root.write("resources.json", r#"{"sprites":[]}"#)?;
    root.image("a.ff")?;

    root.resman()?
        .assert()
        .failure()
        .stderr(predicate::str::contains("images"));

    assert_eq!(root.manifest_text()?, r#"{"sprites":[]}"#);
    Ok(())
}

#[test]
fn test_missing_images_directory_fails() -> Result<()> {
    let root = TestRoot::new()?;
    fs::remove_dir(root.path().join("images"))?;

    root.resman()?
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read image directory"));

    assert!(!root.path().join("resources.json").exists());
    Ok(())
}

#[test]
fn test_invalid_config_fails() -> Result<()> {
    let root = TestRoot::new()?;
    root.write("resman.toml", "pattern = \"\"\n")?;

    root.resman()?
        .assert()
        .failure()
        .stderr(predicate::str::contains("resman.toml"));
    Ok(())
}

#[test]
fn test_empty_directory_writes_empty_manifest() -> Result<()> {
    let root = TestRoot::new()?;

    root.resman()?
        .assert()
        .success()
        .stderr(predicate::str::contains("No images matching"));

    assert_eq!(root.manifest_text()?, r#"{"images":[]}"#);
    Ok(())
}

#[test]
fn test_empty_directory_is_silent_when_quiet() -> Result<()> {
    let root = TestRoot::new()?;

    root.resman()?
        .arg("-q")
        .assert()
        .success()
        .stderr(predicate::str::is_empty());

    assert_eq!(root.manifest_text()?, r#"{"images":[]}"#);
    Ok(())
}

#[test]
fn test_extra_top_level_keys_are_dropped() -> Result<()> {
    let root = TestRoot::new()?;
    root.write(
        "resources.json",
        r#"{"version":2,"images":[{"id":5,"name":"a.ff","path":"/images/a.ff"}],"sounds":[]}"#,
    )?;
    root.image("a.ff")?;

    root.resman()?.assert().success();

    assert_eq!(
        root.manifest_text()?,
        r#"{"images":[{"id":5,"name":"a.ff","path":"/images/a.ff"}]}"#
    );
    Ok(())
}
