use anyhow::Result;

use super::{CatalogSummary, CommandResult, CommandSummary, LiteralReport};
use crate::core::{
    ParseFailure, RecordMap, TransformContext, TransformResults, catalog::MessageCatalog,
};

pub fn finish(
    summary: CommandSummary,
    mut parse_failures: Vec<ParseFailure>,
    source_files_checked: usize,
) -> CommandResult {
    parse_failures.sort_by(|a, b| a.file_path.cmp(&b.file_path));

    CommandResult {
        summary,
        parse_failures,
        source_files_checked,
    }
}

/// Path as shown to the user: scanning from `.` yields `./src/...`.
pub fn display_path(file_path: &str) -> &str {
    file_path.strip_prefix("./").unwrap_or(file_path)
}

/// Flatten per-file rewrites into report entries, in path then source order.
pub fn literal_reports(results: &TransformResults) -> Vec<LiteralReport> {
    results
        .changed()
        .flat_map(|file| {
            file.output.literals.iter().map(move |literal| LiteralReport {
                file_path: display_path(&file.file_path).to_owned(),
                line: literal.line,
                col: literal.col,
                source_line: file.source_line(literal.line).map(str::to_owned),
                id: literal.id.clone(),
                text: literal.text.clone(),
                kind: literal.kind,
            })
        })
        .collect()
}

/// Merge `records` into the primary locale catalog, writing it only when `apply` is set.
pub fn update_catalog(
    ctx: &TransformContext,
    records: &RecordMap,
    apply: bool,
) -> Result<CatalogSummary> {
    let catalog_path = ctx.catalog_path();

    let merge = if apply && !records.is_empty() {
        let mut catalog = MessageCatalog::open_or_create(&catalog_path)?;
        let stats = catalog.merge(records);
        if stats.added > 0 {
            catalog.save()?;
        }
        tracing::debug!(
            path = %catalog_path.display(),
            added = stats.added,
            conflicts = stats.conflicts.len(),
            "catalog merged"
        );
        Some(stats)
    } else {
        None
    };

    Ok(CatalogSummary {
        catalog_path,
        record_count: records.len(),
        merge,
    })
}
