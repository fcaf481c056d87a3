use std::process::ExitCode;

/// Exit status for CLI commands.
///
/// - `Success` (0): command completed, every file was processed
/// - `Failure` (1): command completed but some files could not be parsed
/// - `Error` (2): command failed (config error, I/O error, etc.)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
