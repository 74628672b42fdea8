//! Cancellation error type.

/// The caller's context was cancelled or its deadline passed.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Cancelled while {}: {} at line {} in {}", stage, reason, line, file)]
pub struct CancelledError {
    /// What was in progress, e.g. "waiting for secret cache"
    pub stage: String,
    /// "cancelled" or "deadline exceeded"
    pub reason: String,
    /// Line number where the error was created
    pub line: u32,
    /// File where the error was created
    pub file: &'static str,
}

impl CancelledError {
    /// Create a new CancelledError at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use randomizer_error::CancelledError;
    ///
    /// let err = CancelledError::new("fetching secret", "deadline exceeded");
    /// assert!(err.to_string().contains("fetching secret"));
    /// ```
    #[track_caller]
    pub fn new(stage: impl Into<String>, reason: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            stage: stage.into(),
            reason: reason.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}
