use std::{
    collections::BTreeSet,
    path::{Path, PathBuf},
};

use colored::Colorize;
use glob::{Pattern, glob};
use walkdir::WalkDir;

use crate::config::TEST_FILE_PATTERNS;

/// Script extensions the transform understands.
const SCRIPT_EXTENSIONS: &[&str] = &["ts", "tsx", "mts", "cts", "js", "jsx", "mjs", "cjs"];

/// Check if a pattern contains glob wildcards (* or ?).
/// Patterns without wildcards are treated as literal paths.
fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains('*') || pattern.contains('?')
}

/// What to scan, relative to `base_dir`.
#[derive(Debug, Clone, Copy)]
pub struct ScanOptions<'a> {
    pub base_dir: &'a Path,
    pub includes: &'a [String],
    pub ignores: &'a [String],
    pub ignore_test_files: bool,
    pub verbose: bool,
}

/// Result of scanning files. Paths are sorted for stable reporting.
#[derive(Debug, Default)]
pub struct ScanResult {
    pub files: BTreeSet<String>,
    pub skipped_count: usize,
}

fn warn(verbose: bool, message: std::fmt::Arguments<'_>) {
    if verbose {
        eprintln!("{} {}", "warning:".bold().yellow(), message);
    }
}

pub fn scan_files(options: ScanOptions<'_>) -> ScanResult {
    let ScanOptions {
        base_dir,
        includes,
        ignores,
        ignore_test_files,
        verbose,
    } = options;

    let mut result = ScanResult::default();
    let mut literal_ignores: Vec<PathBuf> = Vec::new();
    let mut glob_ignores: Vec<Pattern> = Vec::new();

    for p in ignores {
        if !is_glob_pattern(p) {
            literal_ignores.push(base_dir.join(p));
            continue;
        }
        match Pattern::new(p) {
            Ok(pattern) => glob_ignores.push(pattern),
            Err(e) => warn(verbose, format_args!("Invalid ignore pattern '{}': {}", p, e)),
        }
    }

    if ignore_test_files {
        glob_ignores.extend(TEST_FILE_PATTERNS.iter().filter_map(|p| Pattern::new(p).ok()));
    }

    let roots: Vec<PathBuf> = if includes.is_empty() {
        vec![base_dir.to_path_buf()]
    } else {
        includes
            .iter()
            .flat_map(|inc| expand_include(base_dir, inc, verbose))
            .collect()
    };

    for root in roots {
        for entry in WalkDir::new(root) {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    result.skipped_count += 1;
                    warn(verbose, format_args!("Cannot access path: {}", e));
                    continue;
                }
            };
            let path = entry.path();
            let path_str = path.to_string_lossy();

            if literal_ignores.iter().any(|ignore| path.starts_with(ignore))
                || glob_ignores.iter().any(|p| p.matches(&path_str))
            {
                continue;
            }

            if entry.file_type().is_file() && is_script_file(path) {
                result.files.insert(path_str.into_owned());
            }
        }
    }

    result
}

/// Resolve one include entry to the directories or files it names.
fn expand_include(base_dir: &Path, include: &str, verbose: bool) -> Vec<PathBuf> {
    let full = base_dir.join(include);

    if !is_glob_pattern(include) {
        if full.exists() {
            return vec![full];
        }
        warn(
            verbose,
            format_args!("Include path does not exist: {}", full.display()),
        );
        return Vec::new();
    }

    match glob(&full.to_string_lossy()) {
        Ok(entries) => entries.flatten().collect(),
        Err(e) => {
            warn(
                verbose,
                format_args!("Invalid glob pattern '{}': {}", include, e),
            );
            Vec::new()
        }
    }
}

/// Script source file, excluding TypeScript declaration files.
fn is_script_file(path: &Path) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    if name.ends_with(".d.ts") || name.ends_with(".d.mts") || name.ends_with(".d.cts") {
        return false;
    }
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| SCRIPT_EXTENSIONS.contains(&ext))
}

/// Whether a file needs JSX parsing.
pub fn is_jsx_file(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("tsx" | "jsx")
    )
}
