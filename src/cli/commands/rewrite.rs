use std::fs;

use anyhow::{Context, Result};

use super::{
    CommandResult, CommandSummary, RewriteSummary,
    helper::{finish, literal_reports, update_catalog},
};
use crate::{
    cli::args::RewriteCommand,
    core::{TransformContext, transform::ImportOutcome},
};

/// Replace translatable literals in place and merge their records into the catalog.
/// Without `--apply` nothing is written.
pub fn rewrite(cmd: RewriteCommand) -> Result<CommandResult> {
    let RewriteCommand { common, apply } = cmd;
    let ctx = TransformContext::new(&common)?;
    let results = ctx.results()?;

    if apply {
        for file in results.changed() {
            fs::write(&file.file_path, &file.output.code)
                .with_context(|| format!("Failed to write file: {}", file.file_path))?;
            tracing::debug!(file = %file.file_path, "rewritten");
        }
    }

    let records = results.records();
    let catalog = update_catalog(&ctx, &records, apply)?;

    let summary = RewriteSummary {
        literals: literal_reports(results),
        file_count: results.changed().count(),
        injected_count: results
            .changed()
            .filter(|f| f.output.import == ImportOutcome::Injected)
            .count(),
        catalog,
        is_apply: apply,
    };

    Ok(finish(
        CommandSummary::Rewrite(summary),
        results.failures.clone(),
        ctx.files.len(),
    ))
}
