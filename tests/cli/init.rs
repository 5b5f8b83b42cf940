use anyhow::{Context, Result};
use serde_json::Value;

use crate::{CliTest, index_page, object_page, row, stderr};

/// Validates config file structure and default values.
fn assert_config_content(content: &str) -> Result<()> {
    let parsed: Value = serde_json::from_str(content).context("Config should be valid JSON")?;

    for field in ["baseUrl", "indexPath", "pageLinkSelector", "output", "info", "servers", "externalDoc"] {
        assert!(
            parsed.get(field).is_some(),
            "Config should have '{}' field",
            field
        );
    }

    assert!(
        content.contains("  "),
        "Config should use 2-space indentation"
    );

    Ok(())
}

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("init").output()?;
    assert!(output.status.success());
    assert!(stderr(&output).contains("Created .scrapirc.json"));

    assert!(test.root().join(".scrapirc.json").exists());
    let content = test.read_file(".scrapirc.json")?;
    assert_config_content(&content)?;

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::with_file(".scrapirc.json", "{}")?;

    let output = test.command().arg("init").output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains(".scrapirc.json already exists"));
    assert_eq!(test.read_file(".scrapirc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;

    test.command().arg("init").output()?;

    test.write_page("/api/v3", &index_page(&["/api/v3/users"]))?;
    test.write_page(
        "/api/v3/users",
        &object_page("Users", &row("Required attribute", "name", "String", "Name")),
    )?;

    let output = test.generate_command().output()?;
    assert!(
        output.status.success(),
        "Generate command should work with initialized config. stderr: {}",
        stderr(&output)
    );
    assert!(test.root().join("openapi.json").exists());

    Ok(())
}
