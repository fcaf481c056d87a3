use anyhow::{Context, Result};
use serde_json::Value;

use crate::{CliTest, stderr, stdout};

const NIHAO: &str = "7eca689f0d3389d9dea66ae112e5cfd7";
const SHIJIE: &str = "c086b3008aca0efa8f2ded065d6afb50";

fn read_catalog(test: &CliTest, path: &str) -> Result<Value> {
    let content = test.read_file(path)?;
    assert!(content.ends_with("}\n"), "catalog should end with a newline");
    serde_json::from_str(&content).context("catalog should be valid JSON")
}

#[test]
fn test_extract_dry_run_lists_literals() -> Result<()> {
    let test = CliTest::with_file("src/app.ts", "const a = \"你好\";\n")?;

    let output = test.run(&["extract"])?;
    let out = stdout(&output);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(out.contains(&format!("string: \"你好\"  {}", NIHAO)));
    assert!(out.contains("--> src/app.ts:1:11"));
    assert!(out.contains("1 | const a = \"你好\";"));
    assert!(out.contains("Would add 1 key to ./src/locales/zh-CN.json (1 literal in 1 file)"));
    assert!(out.contains("Run with --apply to write the message file."));
    assert!(!test.root().join("src/locales/zh-CN.json").exists());

    Ok(())
}

#[test]
fn test_extract_apply_writes_catalog() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("src/a.ts", "const a = \"你好\";\n")?;
    test.write_file("src/b.ts", "const b = `世界`;\nconst c = \"你好\";\n")?;

    let output = test.run(&["extract", "--apply"])?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("Added 2 keys to ./src/locales/zh-CN.json (0 already present)"));

    let catalog = read_catalog(&test, "src/locales/zh-CN.json")?;
    assert_eq!(catalog[NIHAO], "你好");
    assert_eq!(catalog[SHIJIE], "世界");
    assert_eq!(catalog.as_object().map(|o| o.len()), Some(2));

    // Sources are left alone.
    assert_eq!(test.read_file("src/a.ts")?, "const a = \"你好\";\n");

    Ok(())
}

#[test]
fn test_extract_apply_keeps_existing_values() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("src/a.ts", "const a = \"你好\";\nconst b = \"世界\";\n")?;
    test.write_file(
        "src/locales/zh-CN.json",
        &format!("{{\n  \"{}\": \"您好\"\n}}\n", NIHAO),
    )?;

    let output = test.run(&["extract", "--apply"])?;
    let out = stdout(&output);

    assert!(out.contains("Added 1 key to"));
    assert!(out.contains(&format!("key \"{}\" already has a different value", NIHAO)));

    let catalog = read_catalog(&test, "src/locales/zh-CN.json")?;
    assert_eq!(catalog[NIHAO], "您好");
    assert_eq!(catalog[SHIJIE], "世界");

    Ok(())
}

#[test]
fn test_extract_respects_cli_overrides() -> Result<()> {
    let test = CliTest::with_file("src/a.ts", "const a = \"你好\";\n")?;

    let output = test.run(&[
        "extract",
        "--apply",
        "--messages-root",
        "./i18n",
        "--primary-locale",
        "zh-TW",
    ])?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let catalog = read_catalog(&test, "i18n/zh-TW.json")?;
    assert_eq!(catalog[NIHAO], "你好");

    Ok(())
}

#[test]
fn test_extract_nothing_found() -> Result<()> {
    let test = CliTest::with_file("src/a.ts", "const a = \"hello\";\n")?;

    let output = test.run(&["extract", "--apply"])?;

    assert!(output.status.success());
    assert!(stdout(&output).contains("Checked 1 source file - no CJK literals found"));
    assert!(!test.root().join("src/locales").exists());

    Ok(())
}

#[test]
fn test_extract_skips_ignored_and_test_files() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("src/a.test.ts", "const a = \"你好\";\n")?;
    test.write_file("src/types.d.ts", "declare const a: \"你好\";\n")?;
    test.write_file("node_modules/lib/index.js", "const a = \"你好\";\n")?;
    test.write_file(
        ".i18nrc.json",
        r#"{ "includes": ["src", "node_modules"] }"#,
    )?;

    let output = test.run(&["extract"])?;

    assert!(output.status.success());
    assert!(stdout(&output).contains("no CJK literals found"));

    Ok(())
}
