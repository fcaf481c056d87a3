use anyhow::Result;

use super::{
    args::{Arguments, Command},
    commands::{
        CommandResult, CommandSummary, InitSummary, extract::extract, init::init, print::print,
        rewrite::rewrite,
    },
    exit_status::ExitStatus,
};

/// Dispatch to the command handler for the parsed arguments.
pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Init) => init(),
        Some(Command::Print(cmd)) => print(cmd),
        Some(Command::Extract(cmd)) => extract(cmd),
        Some(Command::Rewrite(cmd)) => rewrite(cmd),
        None => anyhow::bail!("No command provided. Use --help to see available commands."),
    }
}

/// Files that failed to parse, or an `init` that found an existing config, fail the run.
pub fn exit_status_from_result(result: &CommandResult) -> ExitStatus {
    let init_refused = matches!(
        result.summary,
        CommandSummary::Init(InitSummary { created: false })
    );

    if init_refused || !result.parse_failures.is_empty() {
        ExitStatus::Failure
    } else {
        ExitStatus::Success
    }
}
