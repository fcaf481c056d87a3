use std::process::ExitCode;

use cjk_i18n::cli::{Arguments, ExitStatus};
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Environment variable holding a `tracing` filter directive, e.g. `cjk_i18n=trace`.
const LOG_ENV: &str = "CJK_I18N_LOG";

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}

fn main() -> ExitCode {
    let args = Arguments::parse();
    init_logging(args.verbose());

    match cjk_i18n::cli::run_cli(args) {
        Ok(status) => status.into(),
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitStatus::Error.into()
        }
    }
}
