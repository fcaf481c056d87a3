use anyhow::{Context, Result};
use serde_json::Value;

use crate::{CliTest, stderr, stdout};

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.run(&["init"])?;
    assert!(output.status.success());
    assert!(stdout(&output).contains("Created .i18nrc.json"));

    let content = test.read_file(".i18nrc.json")?;
    let parsed: Value = serde_json::from_str(&content).context("Config should be valid JSON")?;
    assert_eq!(parsed["primaryLocale"], "zh-CN");
    assert_eq!(parsed["messagesRoot"], "./src/locales");
    assert_eq!(parsed["translation"]["module"], "vue-i18n");
    assert_eq!(parsed["translation"]["hook"], "useI18n");
    assert_eq!(parsed["translation"]["function"], "t");

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::with_file(".i18nrc.json", "{}")?;

    let output = test.run(&["init"])?;
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Error: .i18nrc.json already exists"));
    assert_eq!(test.read_file(".i18nrc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;
    test.run(&["init"])?;
    test.write_file("src/app.ts", "const a = \"你好\";\n")?;

    let output = test.run(&["extract"])?;
    assert!(
        output.status.success(),
        "extract should work with initialized config. stderr: {}",
        stderr(&output)
    );

    Ok(())
}

#[test]
fn test_invalid_config_is_an_error() -> Result<()> {
    let test = CliTest::with_file(".i18nrc.json", r#"{ "ignores": ["[invalid"] }"#)?;

    let output = test.run(&["extract"])?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("ignores"));

    Ok(())
}
