use std::path::PathBuf;

use crate::core::{
    ParseFailure,
    catalog::MergeStats,
    transform::{LiteralKind, TransformOutput},
};

/// One literal as shown in command previews.
#[derive(Debug, Clone)]
pub struct LiteralReport {
    pub file_path: String,
    pub line: usize,
    pub col: usize,
    pub source_line: Option<String>,
    pub id: String,
    pub text: String,
    pub kind: LiteralKind,
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
}

#[derive(Debug)]
pub struct PrintSummary {
    /// Transformed code, or the JSON document with `--json`.
    /// None when the file could not be parsed.
    pub rendered: Option<String>,
    pub output: Option<TransformOutput>,
}

/// Catalog side of `extract` and `rewrite`.
#[derive(Debug)]
pub struct CatalogSummary {
    pub catalog_path: PathBuf,
    pub record_count: usize,
    /// Present once the catalog has been written.
    pub merge: Option<MergeStats>,
}

#[derive(Debug)]
pub struct ExtractSummary {
    pub literals: Vec<LiteralReport>,
    pub file_count: usize,
    pub catalog: CatalogSummary,
    pub is_apply: bool,
}

#[derive(Debug)]
pub struct RewriteSummary {
    pub literals: Vec<LiteralReport>,
    /// Files with at least one rewritten literal.
    pub file_count: usize,
    /// Files that received the translation import.
    pub injected_count: usize,
    pub catalog: CatalogSummary,
    pub is_apply: bool,
}

#[derive(Debug)]
pub enum CommandSummary {
    Init(InitSummary),
    Print(PrintSummary),
    Extract(ExtractSummary),
    Rewrite(RewriteSummary),
}

/// Result of running a command.
pub struct CommandResult {
    pub summary: CommandSummary,
    /// Files that could not be parsed; they are never modified.
    pub parse_failures: Vec<ParseFailure>,
    /// Number of source files that were scanned.
    pub source_files_checked: usize,
}
