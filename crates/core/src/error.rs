// crates/core/src/error.rs
use thiserror::Error;

/// Errors from the job paginator.
///
/// Out-of-range page numbers are clamped rather than rejected; the only
/// invalid input is a zero page size, for which the ceiling-division math
/// is undefined.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaginateError {
    #[error("per_page must be at least 1 (got {per_page})")]
    InvalidPerPage { per_page: usize },
}

/// Errors from parsing user-supplied per-document metadata.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MetadataError {
    #[error("Invalid metadata at line {line}: {message}")]
    MalformedLine { line: usize, message: String },

    #[error("Metadata count ({actual}) must match the number of submitted documents ({expected})")]
    CountMismatch { expected: usize, actual: usize },
}

impl MetadataError {
    pub fn malformed(line: usize, message: impl Into<String>) -> Self {
        Self::MalformedLine {
            line,
            message: message.into(),
        }
    }
}
