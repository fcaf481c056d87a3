use anyhow::Result;
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::{CliTest, stderr, stdout};

const NIHAO: &str = "7eca689f0d3389d9dea66ae112e5cfd7";

#[test]
fn test_rewrite_dry_run_changes_nothing() -> Result<()> {
    let test = CliTest::with_file("src/app.ts", "const a = \"你好\";\n")?;

    let output = test.run(&["rewrite"])?;
    let out = stdout(&output);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(out.contains("--> src/app.ts:1:11"));
    assert!(out.contains("Would rewrite 1 literal in 1 file (1 key for ./src/locales/zh-CN.json)"));
    assert!(out.contains("Run with --apply to rewrite these files."));
    assert_eq!(test.read_file("src/app.ts")?, "const a = \"你好\";\n");
    assert!(!test.root().join("src/locales/zh-CN.json").exists());

    Ok(())
}

#[test]
fn test_rewrite_apply_updates_sources_and_catalog() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        "src/views/list.ts",
        "import { ref } from 'vue';\n\n// 分页\nconst label = `共${total}条，第${page}页`;\nconst ok = \"成功\";\n",
    )?;
    test.write_file("src/plain.ts", "export const a = 1;\n")?;

    let output = test.run(&["rewrite", "--apply"])?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains(
        "Rewrote 2 literals in 1 file (1 file received the translation import)"
    ));

    assert_eq!(
        test.read_file("src/views/list.ts")?,
        "import { useI18n } from \"vue-i18n\";\nimport { ref } from 'vue';\nconst { t } = useI18n();\n\n// 分页\nconst label = t(\"5869b12302be03e8ee3cbd754509ae8c\", [total, page]);\nconst ok = t(\"330363dfc524cff2488f2ebde0500896\");\n"
    );
    assert_eq!(test.read_file("src/plain.ts")?, "export const a = 1;\n");

    let catalog: Value = serde_json::from_str(&test.read_file("src/locales/zh-CN.json")?)?;
    assert_eq!(catalog["5869b12302be03e8ee3cbd754509ae8c"], "共{0}条，第{1}页");
    assert_eq!(catalog["330363dfc524cff2488f2ebde0500896"], "成功");

    Ok(())
}

#[test]
fn test_rewrite_is_idempotent() -> Result<()> {
    let test = CliTest::with_file("src/app.ts", "const a = \"你好\";\n")?;

    test.run(&["rewrite", "--apply"])?;
    let first = test.read_file("src/app.ts")?;

    let output = test.run(&["rewrite", "--apply"])?;
    assert!(stdout(&output).contains("no CJK literals found"));
    assert_eq!(test.read_file("src/app.ts")?, first);
    assert!(first.contains(&format!("t(\"{}\")", NIHAO)));

    Ok(())
}

#[test]
fn test_rewrite_existing_import_is_reused() -> Result<()> {
    let test = CliTest::with_file(
        "src/app.ts",
        "import { useI18n } from 'vue-i18n';\nconst { t } = useI18n();\nconst a = \"你好\";\n",
    )?;

    let output = test.run(&["rewrite", "--apply"])?;

    assert!(stdout(&output).contains("(0 files received the translation import)"));
    assert_eq!(
        test.read_file("src/app.ts")?,
        "import { useI18n } from 'vue-i18n';\nconst { t } = useI18n();\nconst a = t(\"7eca689f0d3389d9dea66ae112e5cfd7\");\n"
    );

    Ok(())
}

#[test]
fn test_rewrite_parse_failure_is_reported_and_skipped() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("src/bad.ts", "const = \"你好\";\n")?;
    test.write_file("src/good.ts", "const a = \"你好\";\n")?;

    let output = test.run(&["rewrite", "--apply"])?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("1 file could not be parsed (use -v for details)"));
    assert_eq!(test.read_file("src/bad.ts")?, "const = \"你好\";\n");
    assert!(test.read_file("src/good.ts")?.contains(NIHAO));

    let verbose = test.run(&["rewrite", "-v"])?;
    assert!(stderr(&verbose).contains("--> src/bad.ts:1:"));

    Ok(())
}
