//! Secret lookup error types.

/// Kinds of secret lookup errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum SecretErrorKind {
    /// The remote lookup could not be completed
    #[display("Failed to fetch secret: {}", _0)]
    Fetch(String),
    /// The remote source answered with a non-success status
    #[display("Secret source returned status {}", _0)]
    Status(u16),
    /// The remote source returned no value for the name
    #[display("Secret {:?} is empty", _0)]
    Empty(String),
}

/// Secret lookup error with location tracking.
///
/// # Examples
///
/// ```
/// use randomizer_error::{SecretError, SecretErrorKind};
///
/// let err = SecretError::new(SecretErrorKind::Status(403));
/// assert!(format!("{}", err).contains("403"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Secret Error: {} at line {} in {}", kind, line, file)]
pub struct SecretError {
    /// The kind of error that occurred
    pub kind: SecretErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl SecretError {
    /// Create a new secret error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: SecretErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
