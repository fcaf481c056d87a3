use anyhow::Result;
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::{CliTest, stderr, stdout};

#[test]
fn test_print_outputs_transformed_code() -> Result<()> {
    let test = CliTest::with_file(
        "src/app.ts",
        "import { ref } from 'vue';\n\nconst title = ref(\"标题\");\n",
    )?;

    let output = test.run(&["print", "src/app.ts"])?;

    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "import { useI18n } from \"vue-i18n\";\nimport { ref } from 'vue';\nconst { t } = useI18n();\n\nconst title = ref(t(\"32c65d8d7431e76029678ec7bb73a5ab\"));\n"
    );
    // The file itself is not modified.
    assert!(test.read_file("src/app.ts")?.contains("\"标题\""));

    Ok(())
}

#[test]
fn test_print_json() -> Result<()> {
    let test = CliTest::with_file("src/app.ts", "const s = `你好，${name}`;\n")?;

    let output = test.run(&["print", "src/app.ts", "--json"])?;
    assert!(output.status.success());

    let parsed: Value = serde_json::from_str(&stdout(&output))?;
    assert_eq!(parsed["import"], "injected");
    assert_eq!(
        parsed["records"]["9bba4fd5ab95eeae64732d39407b51bb"],
        "你好，{0}"
    );
    assert!(
        parsed["code"]
            .as_str()
            .unwrap()
            .contains("t(\"9bba4fd5ab95eeae64732d39407b51bb\", [name])")
    );

    Ok(())
}

#[test]
fn test_print_tsx_file() -> Result<()> {
    let test = CliTest::with_file(
        "src/App.tsx",
        "export const App = () => <button>{\"提交\"}</button>;\n",
    )?;

    let output = test.run(&["print", "src/App.tsx"])?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("<button>{t(\"939d5345ad4345dbaabe14798f6ac0f1\")}</button>"));

    Ok(())
}

#[test]
fn test_print_uses_configured_binding() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".i18nrc.json",
        r#"{ "translation": { "module": "@/i18n", "hook": "useLocale", "function": "$t" } }"#,
    )?;
    test.write_file("src/app.ts", "alert(\"确定\");\n")?;

    let output = test.run(&["print", "src/app.ts"])?;

    assert_eq!(
        stdout(&output),
        "import { useLocale } from \"@/i18n\";\nconst { $t } = useLocale();\nalert($t(\"38cf16f2204ffab8a6e0187070558721\"));\n"
    );

    Ok(())
}

#[test]
fn test_print_parse_error() -> Result<()> {
    let test = CliTest::with_file("src/bad.ts", "const a = \"你好\"\nconst = ;\n")?;

    let output = test.run(&["print", "src/bad.ts"])?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());
    let err = stderr(&output);
    assert!(err.contains("error:"));
    assert!(err.contains("--> src/bad.ts:2:"));

    Ok(())
}

#[test]
fn test_print_missing_file() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.run(&["print", "src/missing.ts"])?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Failed to read file"));

    Ok(())
}
