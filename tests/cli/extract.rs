use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, stderr, stdout};

const CONFIG: &str = r#"{
  "languages": [
    { "code": "en", "src": "locales/en.json" },
    { "code": "fr", "dest": "i18n/fr.json" }
  ],
  "patterns": [
    "_t\\('([^']+)'\\)",
    { "regex": "data-translate=\"([^\"]+)\"", "group": 1 }
  ],
  "sourceRoot": "src"
}"#;

fn project() -> Result<CliTest> {
    let test = CliTest::with_file(".transpreprc.json", CONFIG)?;
    test.write_file(
        "locales/en.json",
        r#"{ "nav": { "home": "Home" }, "legacy": "Old" }"#,
    )?;
    test.write_file(
        "src/index.html",
        "<a data-translate=\"nav.home\"></a>\n<a data-translate=\"nav.about\"></a>\n",
    )?;
    test.write_file("src/js/app.js", "alert(_t('errors.network'));\n")?;
    Ok(test)
}

#[test]
fn test_extract_writes_merged_files() -> Result<()> {
    let test = project()?;

    let output = test.extract_command().output()?;
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));

    assert_eq!(
        test.read_file("src/en.json")?,
        r#"{
  "errors": {
    "network": null
  },
  "legacy": "Old",
  "nav": {
    "about": null,
    "home": "Home"
  }
}
"#
    );
    assert_eq!(
        test.read_file("src/i18n/fr.json")?,
        r#"{
  "errors": {
    "network": null
  },
  "nav": {
    "about": null,
    "home": null
  }
}
"#
    );

    let out = stdout(&output);
    assert!(out.contains("Wrote src/en.json (en: 2 added, 1 kept)"));
    assert!(out.contains("Wrote src/i18n/fr.json (fr: 3 added, 0 kept)"));
    assert!(out.contains("Scanned 2 files, found 3 keys (3 unique)"));

    Ok(())
}

#[test]
fn test_extract_is_idempotent() -> Result<()> {
    let test = project()?;

    let output = test.extract_command().output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let first = test.read_file("src/en.json")?;
    test.write_file("locales/en.json", &first)?;

    let output = test.extract_command().output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(test.read_file("src/en.json")?, first);

    Ok(())
}

#[test]
fn test_extract_default_translation_from_key() -> Result<()> {
    let test = CliTest::with_file(
        ".transpreprc.json",
        r#"{
  "languages": ["de"],
  "patterns": "_t\\('([^']+)'\\)",
  "defaultTranslation": { "fromKey": "lastSegment" }
}"#,
    )?;
    test.write_file("app.js", "_t('menu.file.open');\n")?;

    let output = test.extract_command().output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(
        test.read_file("de.json")?,
        "{\n  \"menu\": {\n    \"file\": {\n      \"open\": \"open\"\n    }\n  }\n}\n"
    );

    Ok(())
}

#[test]
fn test_extract_skips_previous_outputs() -> Result<()> {
    let test = CliTest::with_file(
        ".transpreprc.json",
        r#"{
  "languages": ["en"],
  "patterns": "_t\\('([^']+)'\\)",
  "sourceRoot": "src",
  "extensions": []
}"#,
    )?;
    test.write_file("src/notes.txt", "_t('intro.title')\n")?;

    for _ in 0..2 {
        let output = test.extract_command().output()?;
        assert!(output.status.success(), "stderr: {}", stderr(&output));
        assert!(stdout(&output).contains("Scanned 1 file, found 1 key (1 unique)"));
    }
    assert_eq!(
        test.read_file("src/en.json")?,
        "{\n  \"intro\": {\n    \"title\": null\n  }\n}\n"
    );

    Ok(())
}

#[test]
fn test_extract_dry_run() -> Result<()> {
    let test = project()?;

    let output = test.extract_command().arg("--dry-run").output()?;
    assert!(output.status.success());
    assert!(stdout(&output).contains("Would write src/en.json"));
    assert!(!test.root().join("src/en.json").exists());
    assert!(!test.root().join("src/i18n").exists());

    Ok(())
}

#[test]
fn test_extract_out_dir() -> Result<()> {
    let test = project()?;

    let output = test.extract_command().args(["--out-dir", "dist"]).output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(test.root().join("dist/en.json").exists());
    assert!(test.root().join("dist/i18n/fr.json").exists());

    Ok(())
}

#[test]
fn test_extract_broken_source_fails() -> Result<()> {
    let test = project()?;
    test.write_file("locales/en.json", "{ not json")?;

    let output = test.extract_command().output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("locales/en.json"));
    assert!(!test.root().join("src/en.json").exists());
    assert!(!test.root().join("src/i18n/fr.json").exists());

    Ok(())
}

#[test]
fn test_extract_without_config() -> Result<()> {
    let test = CliTest::with_file("app.js", "_t('a');")?;

    let output = test.extract_command().output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("transprep init"));

    Ok(())
}

#[test]
fn test_extract_rejects_missing_patterns() -> Result<()> {
    let test = CliTest::with_file(".transpreprc.json", r#"{ "languages": ["en"] }"#)?;

    let output = test.extract_command().output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("patterns"));

    Ok(())
}

#[test]
fn test_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("--help").output()?;
    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("extract"));
    assert!(out.contains("init"));

    Ok(())
}
