use thiserror::Error;

/// Errors surfaced by a single transform call.
///
/// No partial output is produced when any of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransformError {
    /// The script could not be parsed (fatal or recovered parser error).
    #[error("syntax error at {line}:{col}: {message}")]
    Parse {
        line: usize,
        col: usize,
        message: String,
    },

    /// Two recorded edits touched the same source range.
    #[error("overlapping edits at byte {start}..{end}")]
    OverlappingEdit { start: usize, end: usize },
}

pub type TransformResult<T> = std::result::Result<T, TransformError>;
