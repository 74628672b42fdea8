//! Option store error types.

/// Kinds of option store errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum StoreErrorKind {
    /// A store operation failed
    #[display("{} failed: {}", operation, message)]
    Operation {
        /// Store operation that failed, e.g. "put"
        operation: String,
        /// Backend-specific detail
        message: String,
    },
    /// Store backend is unavailable
    #[display("Store unavailable: {}", _0)]
    Unavailable(String),
}

/// Option store error with location tracking.
///
/// # Examples
///
/// ```
/// use randomizer_error::{StoreError, StoreErrorKind};
///
/// let err = StoreError::operation("delete", "table is read-only");
/// assert!(format!("{}", err).contains("delete failed"));
/// assert!(matches!(err.kind, StoreErrorKind::Operation { .. }));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Store Error: {} at line {} in {}", kind, line, file)]
pub struct StoreError {
    /// The kind of error that occurred
    pub kind: StoreErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl StoreError {
    /// Create a new store error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: StoreErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Shorthand for a failed store operation.
    #[track_caller]
    pub fn operation(operation: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(StoreErrorKind::Operation {
            operation: operation.into(),
            message: message.into(),
        })
    }
}
