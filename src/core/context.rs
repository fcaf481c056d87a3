use std::{
    cell::OnceCell,
    collections::BTreeSet,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context as _, Result};
use colored::Colorize;
use rayon::prelude::*;

use crate::{
    cli::args::CommonArgs,
    config::{CONFIG_FILE_NAME, Config, load_config},
    core::{
        error::TransformError,
        file_scanner::{ScanOptions, is_jsx_file, scan_files},
        records::RecordMap,
        transform::{TransformOptions, TransformOutput, transform_file},
    },
};

/// One successfully transformed source file.
#[derive(Debug)]
pub struct FileTransform {
    pub file_path: String,
    /// Input text as read from disk.
    pub source: String,
    pub output: TransformOutput,
}

impl FileTransform {
    /// Text of the 1-based `line` in the input, without its line terminator.
    pub fn source_line(&self, line: usize) -> Option<&str> {
        self.source
            .lines()
            .nth(line.checked_sub(1)?)
            .map(|l| l.trim_start_matches('\u{feff}'))
    }
}

/// A file that could not be parsed; it is left untouched.
#[derive(Debug, Clone)]
pub struct ParseFailure {
    pub file_path: String,
    pub error: TransformError,
}

/// Per-file results of a batch run, in path order.
#[derive(Debug, Default)]
pub struct TransformResults {
    pub files: Vec<FileTransform>,
    pub failures: Vec<ParseFailure>,
}

impl TransformResults {
    /// Files whose output differs from their input.
    pub fn changed(&self) -> impl Iterator<Item = &FileTransform> {
        self.files.iter().filter(|f| !f.output.is_unchanged())
    }

    pub fn literal_count(&self) -> usize {
        self.files.iter().map(|f| f.output.literals.len()).sum()
    }

    /// All per-file records merged in path order.
    pub fn records(&self) -> RecordMap {
        let mut merged = RecordMap::new();
        for file in &self.files {
            merged.extend(&file.output.records);
        }
        merged
    }
}

/// Project-wide transform run.
///
/// Configuration priority (highest to lowest): CLI arguments, `.i18nrc.json`,
/// built-in defaults. Transform results are computed on first access.
pub struct TransformContext {
    pub config: Config,
    /// Project root; scanning and the catalog path are relative to it.
    pub root_dir: PathBuf,
    /// Source files to transform, sorted.
    pub files: BTreeSet<String>,
    pub verbose: bool,
    results: OnceCell<Result<TransformResults>>,
}

impl TransformContext {
    pub fn new(common_args: &CommonArgs) -> Result<Self> {
        let verbose = common_args.verbose;
        let root_dir = common_args
            .source_root
            .clone()
            .unwrap_or_else(|| PathBuf::from("."));

        let config_result = load_config(&root_dir)?;
        if verbose && !config_result.from_file {
            eprintln!(
                "{} No {} found, using default configuration",
                "note:".bold(),
                CONFIG_FILE_NAME
            );
        }

        let mut config = config_result.config;
        if let Some(ref primary_locale) = common_args.primary_locale {
            config.primary_locale = primary_locale.clone();
        }
        if let Some(ref messages_root) = common_args.messages_root {
            config.messages_root = messages_root.to_string_lossy().into_owned();
        }

        let scan_result = scan_files(ScanOptions {
            base_dir: &root_dir,
            includes: &config.includes,
            ignores: &config.ignores,
            ignore_test_files: config.ignore_test_files,
            verbose,
        });

        if scan_result.skipped_count > 0 {
            eprintln!(
                "{} {} path(s) skipped due to access errors{}",
                "warning:".bold().yellow(),
                scan_result.skipped_count,
                if verbose { "" } else { " (use -v for details)" }
            );
        }

        tracing::debug!(
            root = %root_dir.display(),
            files = scan_result.files.len(),
            "scanned source files"
        );

        Ok(Self {
            config,
            root_dir,
            files: scan_result.files,
            verbose,
            results: OnceCell::new(),
        })
    }

    /// Primary locale catalog file.
    pub fn catalog_path(&self) -> PathBuf {
        self.config.catalog_path(&self.root_dir)
    }

    /// Transform every scanned file. Each file gets its own parser state and records.
    pub fn results(&self) -> Result<&TransformResults> {
        self.results
            .get_or_init(|| self.run())
            .as_ref()
            .map_err(|e| anyhow::anyhow!("{:#}", e))
    }

    fn run(&self) -> Result<TransformResults> {
        let files: Vec<&String> = self.files.iter().collect();
        let binding = &self.config.translation;

        let outcomes = files
            .par_iter()
            .map(|file_path| {
                let options = TransformOptions {
                    binding: binding.clone(),
                    jsx: is_jsx_file(Path::new(file_path.as_str())),
                };
                transform_one(file_path, &options)
            })
            .collect::<Result<Vec<_>>>()?;

        let mut results = TransformResults::default();
        for outcome in outcomes {
            match outcome {
                Ok(file) => results.files.push(file),
                Err(failure) => results.failures.push(failure),
            }
        }

        tracing::debug!(
            transformed = results.files.len(),
            failed = results.failures.len(),
            "batch transform finished"
        );

        Ok(results)
    }
}

fn transform_one(
    file_path: &str,
    options: &TransformOptions,
) -> Result<Result<FileTransform, ParseFailure>> {
    let source = fs::read_to_string(file_path)
        .with_context(|| format!("Failed to read file: {}", file_path))?;

    Ok(match transform_file(&source, file_path, options) {
        Ok(output) => {
            tracing::trace!(file = file_path, literals = output.literals.len(), "transformed");
            Ok(FileTransform {
                file_path: file_path.to_owned(),
                source,
                output,
            })
        }
        Err(error) => {
            tracing::debug!(file = file_path, %error, "parse failed");
            Err(ParseFailure {
                file_path: file_path.to_owned(),
                error,
            })
        }
    })
}
