use anyhow::{Context, Result};
use serde_json::Value;

use crate::{CliTest, stderr, stdout};

/// Validates config file structure and default values.
fn assert_config_content(content: &str) -> Result<()> {
    let parsed: Value = serde_json::from_str(content).context("Config should be valid JSON")?;

    assert_eq!(parsed["languages"], serde_json::json!(["en"]));
    assert!(
        parsed["patterns"].as_array().is_some_and(|p| !p.is_empty()),
        "Config should have at least one pattern"
    );
    assert!(
        parsed.get("sourceRoot").is_some(),
        "Config should have 'sourceRoot' field"
    );
    assert!(content.ends_with("}\n"), "Config should end with a newline");

    Ok(())
}

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.init_command().output()?;
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("Created .transpreprc.json"));

    let content = test.read_file(".transpreprc.json")?;
    assert_config_content(&content)?;

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::with_file(".transpreprc.json", "{}")?;

    let output = test.init_command().output()?;
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains(".transpreprc.json already exists"));
    assert_eq!(test.read_file(".transpreprc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;
    test.init_command().output()?;

    test.write_file("index.html", r#"<h1 data-translate="page.title"></h1>"#)?;
    test.write_file("app.js", "_t('page.subtitle');\n")?;

    let output = test.extract_command().output()?;
    assert!(
        output.status.success(),
        "Extract should work with initialized config. stderr: {}",
        stderr(&output)
    );
    assert_eq!(
        test.read_file("en.json")?,
        "{\n  \"page\": {\n    \"subtitle\": null,\n    \"title\": null\n  }\n}\n"
    );

    Ok(())
}
