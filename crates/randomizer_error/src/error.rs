//! Top-level error wrapper types.

use crate::{CancelledError, CommandError, ConfigError, SecretError, StoreError};

const GENERIC_HELP: &str = "Sorry, something went wrong on my end. Please try again later.";
const CANCELLED_HELP: &str = "Sorry, that took too long. Please try again.";

/// Every error condition the randomizer can report.
///
/// # Examples
///
/// ```
/// use randomizer_error::{RandomizerError, StoreError};
///
/// let err: RandomizerError = StoreError::operation("get", "connection reset").into();
/// assert!(format!("{}", err).contains("Store Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum RandomizerErrorKind {
    /// Problem with the user's command
    #[from(CommandError)]
    Command(CommandError),
    /// Caller cancelled or timed out
    #[from(CancelledError)]
    Cancelled(CancelledError),
    /// Secret lookup failed
    #[from(SecretError)]
    Secret(SecretError),
    /// Option store failed
    #[from(StoreError)]
    Store(StoreError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
}

/// Randomizer error with kind discrimination.
///
/// `Display` renders the diagnostic cause for logs. [`RandomizerError::help_text`]
/// renders what the end user should see. The two are never interchanged.
///
/// # Examples
///
/// ```
/// use randomizer_error::{CancelledError, RandomizerError};
///
/// let err: RandomizerError = CancelledError::new("fetching secret", "cancelled").into();
/// assert!(err.to_string().contains("fetching secret"));
/// assert!(!err.help_text().contains("fetching secret"));
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Randomizer Error: {}", _0)]
pub struct RandomizerError(Box<RandomizerErrorKind>);

impl RandomizerError {
    /// Create a new error from a kind.
    pub fn new(kind: RandomizerErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &RandomizerErrorKind {
        &self.0
    }

    /// User-facing text for this error.
    ///
    /// Command errors explain what to fix. Everything else gets a generic
    /// message so internal details stay in the logs.
    pub fn help_text(&self) -> String {
        match self.kind() {
            RandomizerErrorKind::Command(err) => err.kind.help_text(),
            RandomizerErrorKind::Cancelled(_) => CANCELLED_HELP.to_string(),
            RandomizerErrorKind::Secret(_)
            | RandomizerErrorKind::Store(_)
            | RandomizerErrorKind::Config(_) => GENERIC_HELP.to_string(),
        }
    }

    /// Whether this error is a cancellation.
    pub fn is_cancelled(&self) -> bool {
        matches!(self.kind(), RandomizerErrorKind::Cancelled(_))
    }
}

// Generic From implementation for any type that converts to RandomizerErrorKind
impl<T> From<T> for RandomizerError
where
    T: Into<RandomizerErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for randomizer operations.
pub type RandomizerResult<T> = std::result::Result<T, RandomizerError>;
