use anyhow::{Context, Result};
use insta_cmd::assert_cmd_snapshot;
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::CliTest;

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.command().arg("init"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Created .tscatrc.json

    ----- stderr -----
    ");

    let content = test.read_file(".tscatrc.json")?;
    let parsed: Value = serde_json::from_str(&content).context("Config should be valid JSON")?;
    assert_eq!(parsed["catalogsRoot"], "./translations");
    assert_eq!(parsed["sourceLanguage"], "en");
    assert_eq!(parsed["checkPlaceholders"], true);
    assert!(parsed["ignores"].as_array().is_some_and(Vec::is_empty));

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::with_file(".tscatrc.json", "{}")?;

    assert_cmd_snapshot!(test.command().arg("init"), @r"
    success: false
    exit_code: 1
    ----- stdout -----
    ✘ .tscatrc.json already exists

    ----- stderr -----
    ");
    assert_eq!(test.read_file(".tscatrc.json")?, "{}");

    Ok(())
}
