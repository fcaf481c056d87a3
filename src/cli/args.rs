//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `init`: Write a default `.i18nrc.json`
//! - `print`: Transform one file and print the result
//! - `extract`: Collect CJK literals into the primary locale catalog
//! - `rewrite`: Replace CJK literals with translation calls in place

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Extract(cmd)) => cmd.common.verbose,
            Some(Command::Rewrite(cmd)) => cmd.common.verbose,
            Some(Command::Print(cmd)) => cmd.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by project-wide commands.
#[derive(Debug, Clone, Default, Args)]
pub struct CommonArgs {
    /// Primary locale (overrides config file)
    #[arg(long)]
    pub primary_locale: Option<String>,

    /// Source code root directory (overrides config file)
    #[arg(long)]
    pub source_root: Option<PathBuf>,

    /// Messages directory path (overrides config file)
    #[arg(long)]
    pub messages_root: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct PrintCommand {
    /// Script file to transform
    pub file: PathBuf,

    /// Print code, records and import outcome as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct ExtractCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Actually write the catalog (default is dry-run)
    #[arg(long)]
    pub apply: bool,
}

#[derive(Debug, Args)]
pub struct RewriteCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Actually rewrite source files and write the catalog (default is dry-run)
    #[arg(long)]
    pub apply: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Initialize a new .i18nrc.json configuration file
    Init,
    /// Transform a single file and print the result to stdout
    Print(PrintCommand),
    /// Collect CJK literals into the primary locale message file
    Extract(ExtractCommand),
    /// Replace CJK literals with translation calls
    Rewrite(RewriteCommand),
}
