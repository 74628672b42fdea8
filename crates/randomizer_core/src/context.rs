//! Cancellation and deadline signal.

use randomizer_error::CancelledError;
use std::future::Future;
use std::time::Duration;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

/// Cancellation signal with an optional deadline.
///
/// Cloning a context shares its cancellation state. [`Context::child`] and
/// [`Context::with_timeout`] derive contexts that are cancelled along with
/// their parent but can also be cancelled (or time out) on their own.
///
/// # Examples
///
/// ```
/// use randomizer_core::Context;
///
/// let ctx = Context::new();
/// let child = ctx.child();
/// ctx.cancel();
/// assert!(child.is_cancelled());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Context {
    token: CancellationToken,
    deadline: Option<Instant>,
}

impl Context {
    /// Create a context that is never cancelled unless asked to.
    pub fn new() -> Self {
        Self::default()
    }

    /// Derive a context that is additionally cancelled after `timeout`.
    ///
    /// An existing, earlier deadline is kept. A timeout too large to
    /// represent adds no deadline.
    pub fn with_timeout(&self, timeout: Duration) -> Self {
        let deadline = match (self.deadline, Instant::now().checked_add(timeout)) {
            (Some(existing), Some(deadline)) => Some(existing.min(deadline)),
            (existing, None) => existing,
            (None, deadline) => deadline,
        };
        Self {
            token: self.token.child_token(),
            deadline,
        }
    }

    /// Derive a context that can be cancelled independently of this one.
    pub fn child(&self) -> Self {
        Self {
            token: self.token.child_token(),
            deadline: self.deadline,
        }
    }

    /// Cancel this context and every context derived from it.
    pub fn cancel(&self) {
        self.token.cancel();
    }

    /// The deadline, if one was set.
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Whether the context was cancelled or its deadline has passed.
    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled() || self.deadline.is_some_and(|d| d <= Instant::now())
    }

    /// Completes once the context is cancelled or its deadline passes.
    pub async fn cancelled(&self) {
        if self.is_cancelled() {
            return;
        }
        match self.deadline {
            Some(deadline) => {
                tokio::select! {
                    _ = self.token.cancelled() => {}
                    _ = tokio::time::sleep_until(deadline) => {}
                }
            }
            None => self.token.cancelled().await,
        }
    }

    /// Fail with [`CancelledError`] if the context is already done.
    #[track_caller]
    pub fn check(&self, stage: &str) -> Result<(), CancelledError> {
        if self.is_cancelled() {
            Err(self.error(stage))
        } else {
            Ok(())
        }
    }

    /// Run `fut` until it completes or the context is cancelled.
    ///
    /// Cancellation is checked first, so a context that is already done
    /// never polls `fut` at all.
    pub async fn run<F>(&self, stage: &str, fut: F) -> Result<F::Output, CancelledError>
    where
        F: Future,
    {
        tokio::select! {
            biased;
            _ = self.cancelled() => Err(self.error(stage)),
            output = fut => Ok(output),
        }
    }

    /// Build the cancellation error describing why this context is done.
    #[track_caller]
    pub fn error(&self, stage: &str) -> CancelledError {
        let reason = if self.token.is_cancelled() {
            "cancelled"
        } else {
            "deadline exceeded"
        };
        CancelledError::new(stage, reason)
    }
}
