use std::fs;

use anyhow::{Context, Result};

use super::{CommandResult, CommandSummary, PrintSummary, helper::finish};
use crate::{
    cli::args::PrintCommand,
    config::load_config,
    core::{
        ParseFailure,
        file_scanner::is_jsx_file,
        transform::{TransformOptions, transform_file},
    },
};

/// Transform a single file without touching it on disk.
pub fn print(cmd: PrintCommand) -> Result<CommandResult> {
    let PrintCommand { file, json, .. } = cmd;

    let start_dir = match file.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => ".".into(),
    };
    let config = load_config(&start_dir)?.config;

    let source = fs::read_to_string(&file)
        .with_context(|| format!("Failed to read file: {}", file.display()))?;
    let options = TransformOptions {
        binding: config.translation,
        jsx: is_jsx_file(&file),
    };
    let file_path = file.to_string_lossy().into_owned();

    let (summary, failures) = match transform_file(&source, &file_path, &options) {
        Ok(output) => {
            let rendered = if json {
                serde_json::to_string_pretty(&output).context("Failed to serialize output")?
            } else {
                output.code.clone()
            };
            let summary = PrintSummary {
                rendered: Some(rendered),
                output: Some(output),
            };
            (summary, Vec::new())
        }
        Err(error) => {
            let summary = PrintSummary {
                rendered: None,
                output: None,
            };
            (summary, vec![ParseFailure { file_path, error }])
        }
    };

    Ok(finish(CommandSummary::Print(summary), failures, 1))
}
