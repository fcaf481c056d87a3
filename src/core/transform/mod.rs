//! Source-to-source rewrite of CJK literals into translation calls.
//!
//! One call to [`transform`] parses the script once, visits every string and
//! template literal expression in pre-order, records a replacement for each
//! translatable literal and renders the output once at the end. All state
//! (records, import flag, edits) is created per call and returned in
//! [`TransformOutput`], so independent scripts never share identifiers or flags.
//!
//! ```
//! use cjk_i18n::core::transform::{TransformOptions, transform};
//!
//! let output = transform("const a = \"你好\";", &TransformOptions::default()).unwrap();
//! assert!(output.code.contains("t(\"7eca689f0d3389d9dea66ae112e5cfd7\")"));
//! assert_eq!(output.records.get("7eca689f0d3389d9dea66ae112e5cfd7"), Some("你好"));
//! ```

mod edits;
mod imports;
mod rewriter;


use std::sync::Arc;

use serde::{Deserialize, Serialize};
use swc_common::SourceMap;

pub use edits::{EditList, TextEdit};
pub use imports::{ImportOutcome, ImportState};
pub use rewriter::{
    LiteralRewriter, interpolation_pattern, is_translatable_template, translation_call,
};

use crate::core::{
    error::TransformResult, parsers::script::parse_script_source, records::RecordMap,
};

const UTF8_BOM: char = '\u{feff}';

/// Names used to reach the runtime translation function.
///
/// With the defaults the injected code is
/// `import { useI18n } from "vue-i18n";` followed by `const { t } = useI18n();`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationBinding {
    /// Module the hook is imported from.
    #[serde(default = "default_module")]
    pub module: String,
    /// Hook that returns the translation function.
    #[serde(default = "default_hook")]
    pub hook: String,
    /// Name the translation function is bound to and called by.
    #[serde(default = "default_function")]
    pub function: String,
}

fn default_module() -> String {
    "vue-i18n".to_string()
}

fn default_hook() -> String {
    "useI18n".to_string()
}

fn default_function() -> String {
    "t".to_string()
}

impl Default for TranslationBinding {
    fn default() -> Self {
        Self {
            module: default_module(),
            hook: default_hook(),
            function: default_function(),
        }
    }
}

impl TranslationBinding {
    pub fn import_statement(&self) -> String {
        format!("import {{ {} }} from \"{}\";", self.hook, self.module)
    }

    pub fn binding_statement(&self) -> String {
        format!("const {{ {} }} = {}();", self.function, self.hook)
    }
}

#[derive(Debug, Clone, Default)]
pub struct TransformOptions {
    pub binding: TranslationBinding,
    /// Parse JSX syntax (TSX).
    pub jsx: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum LiteralKind {
    String,
    Template,
}

/// One literal replaced by a translation call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RewrittenLiteral {
    pub id: String,
    /// Original string value, or the interpolation pattern for templates.
    pub text: String,
    pub kind: LiteralKind,
    /// 1-based line of the literal in the input.
    pub line: usize,
    /// 1-based column of the literal in the input.
    pub col: usize,
}

/// Result of one transform call.
#[derive(Debug, Clone, Serialize)]
pub struct TransformOutput {
    pub code: String,
    pub records: RecordMap,
    #[serde(skip)]
    pub literals: Vec<RewrittenLiteral>,
    pub import: ImportOutcome,
}

impl TransformOutput {
    /// True when nothing was rewritten and `code` equals the input.
    pub fn is_unchanged(&self) -> bool {
        self.literals.is_empty()
    }
}

/// Per-call state threaded through the traversal.
#[derive(Debug, Default)]
pub struct TransformState {
    pub records: RecordMap,
    pub import: ImportState,
    pub edits: EditList,
    pub literals: Vec<RewrittenLiteral>,
}

/// Transform a script body. See the module docs.
pub fn transform(source: &str, options: &TransformOptions) -> TransformResult<TransformOutput> {
    let file_name = if options.jsx { "script.tsx" } else { "script.ts" };
    transform_file(source, file_name, options)
}

/// Like [`transform`], with `file_path` used for source-map bookkeeping.
pub fn transform_file(
    source: &str,
    file_path: &str,
    options: &TransformOptions,
) -> TransformResult<TransformOutput> {
    let (bom, body) = match source.strip_prefix(UTF8_BOM) {
        Some(rest) => (source.len() - rest.len(), rest),
        None => (0, source),
    };

    let script = parse_script_source(
        body.to_owned(),
        file_path,
        options.jsx,
        Arc::new(SourceMap::default()),
    )?;

    let mut state = TransformState::default();
    LiteralRewriter::new(&script, body, options, &mut state).rewrite();

    let TransformState {
        records,
        import,
        edits,
        literals,
    } = state;

    let mut code = String::with_capacity(source.len());
    code.push_str(&source[..bom]);
    code.push_str(&edits.apply(body)?);

    Ok(TransformOutput {
        code,
        records,
        literals,
        import: import.outcome(),
    })
}
