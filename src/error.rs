//! Error types for the symbolic field core

use thiserror::Error;

/// Errors surfaced by field and layout operations.
///
/// The taxonomy is deliberately narrow: this is a closed, fixed-size
/// simulation with no I/O. Out-of-range *values* are clamped rather than
/// rejected; only index contract violations are errors.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    /// A node index outside `0..NODE_COUNT` was passed to an operation.
    ///
    /// Surfaced immediately instead of clamped, so integration bugs in a
    /// rendering collaborator fail loudly at the call site.
    #[error("invalid node index {index} (expected 0..{limit})")]
    InvalidIndex { index: usize, limit: usize },
}

pub type FieldResult<T> = Result<T, FieldError>;
