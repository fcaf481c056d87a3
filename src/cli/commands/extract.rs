use anyhow::Result;

use super::{
    CommandResult, CommandSummary, ExtractSummary,
    helper::{finish, literal_reports, update_catalog},
};
use crate::{cli::args::ExtractCommand, core::TransformContext};

/// Collect translatable literals and, with `--apply`, merge them into the catalog.
/// Source files are never modified.
pub fn extract(cmd: ExtractCommand) -> Result<CommandResult> {
    let ExtractCommand { common, apply } = cmd;
    let ctx = TransformContext::new(&common)?;
    let results = ctx.results()?;

    let records = results.records();
    let catalog = update_catalog(&ctx, &records, apply)?;

    let summary = ExtractSummary {
        literals: literal_reports(results),
        file_count: results.changed().count(),
        catalog,
        is_apply: apply,
    };

    Ok(finish(
        CommandSummary::Extract(summary),
        results.failures.clone(),
        ctx.files.len(),
    ))
}
