//! Report formatting and printing.
//!
//! Literal previews use a cargo-style layout (`-->` location, source line, caret).
//! Kept apart from the commands so the library can be used without any output.

use std::io::{self, Write};

use colored::Colorize;
use unicode_width::UnicodeWidthChar;

use super::commands::{
    CatalogSummary, CommandResult, CommandSummary, ExtractSummary, InitSummary, LiteralReport,
    PrintSummary, RewriteSummary,
};
use crate::{
    config::CONFIG_FILE_NAME,
    core::{ParseFailure, TransformError, transform::LiteralKind},
    utils::plural,
};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

pub fn print(result: &CommandResult, verbose: bool) {
    let mut stdout = io::stdout().lock();
    let mut stderr = io::stderr().lock();

    match &result.summary {
        CommandSummary::Init(summary) => print_init(summary, &mut stdout, &mut stderr),
        CommandSummary::Print(summary) => print_transformed(summary, &mut stdout),
        CommandSummary::Extract(summary) => {
            print_extract(summary, result.source_files_checked, &mut stdout)
        }
        CommandSummary::Rewrite(summary) => {
            print_rewrite(summary, result.source_files_checked, &mut stdout)
        }
    }

    // A single-file run always explains its failure.
    let detailed = verbose || matches!(result.summary, CommandSummary::Print(_));
    print_parse_failures_to(&result.parse_failures, detailed, &mut stderr);
}

/// Print a warning about files that could not be parsed.
///
/// With `detailed` every failure is listed with its location, otherwise only the count.
pub fn print_parse_failures_to<W: Write>(failures: &[ParseFailure], detailed: bool, writer: &mut W) {
    if failures.is_empty() {
        return;
    }

    if !detailed {
        let _ = writeln!(
            writer,
            "{} {} could not be parsed (use {} for details)",
            "warning:".bold().yellow(),
            plural(failures.len(), "file"),
            "-v".cyan()
        );
        return;
    }

    for failure in failures {
        let path = super::commands::helper::display_path(&failure.file_path);
        match &failure.error {
            TransformError::Parse { line, col, message } => {
                let _ = writeln!(writer, "{}: {}", "error".bold().red(), message);
                let _ = writeln!(writer, "  {} {}:{}:{}", "-->".blue(), path, line, col);
            }
            other => {
                let _ = writeln!(writer, "{}: {}", "error".bold().red(), other);
                let _ = writeln!(writer, "  {} {}", "-->".blue(), path);
            }
        }
    }
}

fn print_init<W: Write, E: Write>(summary: &InitSummary, out: &mut W, err: &mut E) {
    if summary.created {
        let _ = writeln!(
            out,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    } else {
        let _ = writeln!(err, "Error: {} already exists", CONFIG_FILE_NAME);
    }
}

fn print_transformed<W: Write>(summary: &PrintSummary, writer: &mut W) {
    if let Some(rendered) = &summary.rendered {
        let _ = write!(writer, "{}", rendered);
        if !rendered.ends_with('\n') {
            let _ = writeln!(writer);
        }
    }
}

fn print_extract<W: Write>(summary: &ExtractSummary, files_checked: usize, writer: &mut W) {
    if summary.literals.is_empty() {
        print_nothing_found(files_checked, writer);
        return;
    }

    print_literals_to(&summary.literals, writer);

    let literals = plural(summary.literals.len(), "literal");
    let files = plural(summary.file_count, "file");
    if summary.is_apply {
        print_catalog_result(&summary.catalog, writer);
    } else {
        let _ = writeln!(
            writer,
            "{} {} to {} ({} in {})",
            "Would add".yellow().bold(),
            plural(summary.catalog.record_count, "key"),
            summary.catalog.catalog_path.display(),
            literals,
            files
        );
        let _ = writeln!(
            writer,
            "Run with {} to write the message file.",
            "--apply".cyan()
        );
    }
}

fn print_rewrite<W: Write>(summary: &RewriteSummary, files_checked: usize, writer: &mut W) {
    if summary.literals.is_empty() {
        print_nothing_found(files_checked, writer);
        return;
    }

    let literals = plural(summary.literals.len(), "literal");
    let files = plural(summary.file_count, "file");

    if summary.is_apply {
        let _ = writeln!(
            writer,
            "{} {} in {} ({} received the translation import)",
            "Rewrote".green().bold(),
            literals,
            files,
            plural(summary.injected_count, "file")
        );
        print_catalog_result(&summary.catalog, writer);
    } else {
        print_literals_to(&summary.literals, writer);
        let _ = writeln!(
            writer,
            "{} {} in {} ({} for {})",
            "Would rewrite".yellow().bold(),
            literals,
            files,
            plural(summary.catalog.record_count, "key"),
            summary.catalog.catalog_path.display()
        );
        let _ = writeln!(
            writer,
            "Run with {} to rewrite these files.",
            "--apply".cyan()
        );
    }
}

fn print_nothing_found<W: Write>(files_checked: usize, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Checked {} - no CJK literals found",
            plural(files_checked, "source file")
        )
        .green()
    );
}

fn print_catalog_result<W: Write>(catalog: &CatalogSummary, writer: &mut W) {
    let Some(stats) = &catalog.merge else {
        return;
    };

    let _ = writeln!(
        writer,
        "{} {} to {} ({} already present)",
        "Added".green().bold(),
        plural(stats.added, "key"),
        catalog.catalog_path.display(),
        stats.unchanged
    );

    for id in &stats.conflicts {
        let _ = writeln!(
            writer,
            "{} key \"{}\" already has a different value in {}, kept existing value",
            "warning:".bold().yellow(),
            id,
            catalog.catalog_path.display()
        );
    }

    if !stats.conflicts.is_empty() {
        let _ = writeln!(
            writer,
            "{} {}",
            FAILURE_MARK.red(),
            format!("{} not written", plural(stats.conflicts.len(), "conflicting key")).red()
        );
    }
}

/// Print every literal in cargo style.
pub fn print_literals_to<W: Write>(literals: &[LiteralReport], writer: &mut W) {
    let max_line_width = literals
        .iter()
        .map(|l| l.line)
        .max()
        .map(|n| n.to_string().len())
        .unwrap_or(1);

    for literal in literals {
        print_literal(literal, writer, max_line_width);
    }
}

fn print_literal<W: Write>(literal: &LiteralReport, writer: &mut W, max_line_width: usize) {
    let kind = match literal.kind {
        LiteralKind::String => "string",
        LiteralKind::Template => "template",
    };

    let _ = writeln!(
        writer,
        "{}: \"{}\"  {}",
        kind.bold().cyan(),
        literal.text,
        literal.id.dimmed()
    );
    let _ = writeln!(
        writer,
        "  {} {}:{}:{}",
        "-->".blue(),
        literal.file_path,
        literal.line,
        literal.col
    );

    if let Some(source_line) = &literal.source_line {
        let _ = writeln!(
            writer,
            "{:>width$} {}",
            "",
            "|".blue(),
            width = max_line_width
        );
        let _ = writeln!(
            writer,
            "{:>width$} {} {}",
            literal.line.to_string().blue(),
            "|".blue(),
            source_line,
            width = max_line_width
        );
        let _ = writeln!(
            writer,
            "{:>width$} {} {:>padding$}{}",
            "",
            "|".blue(),
            "",
            "^".cyan(),
            width = max_line_width,
            padding = caret_padding(source_line, literal.col)
        );
    }

    let _ = writeln!(writer);
}

/// Display width of `source_line` before the 1-based display column `col`.
fn caret_padding(source_line: &str, col: usize) -> usize {
    let target = col.saturating_sub(1);
    let mut width = 0;
    for ch in source_line.chars() {
        let next = width + UnicodeWidthChar::width(ch).unwrap_or(0);
        if next > target {
            break;
        }
        width = next;
    }
    width
}
