//! Printing outcomes and errors.

use randomizer::{Outcome, RandomizerError, RandomizerErrorKind, RandomizerResult};
use serde_json::json;
use tracing::Level;

/// Level a failed request is logged at.
///
/// Mistakes in the command are routine; anything else means the randomizer
/// itself could not do its job.
fn failure_level(err: &RandomizerError) -> Level {
    match err.kind() {
        RandomizerErrorKind::Command(_) => Level::INFO,
        RandomizerErrorKind::Cancelled(_) => Level::WARN,
        RandomizerErrorKind::Secret(_)
        | RandomizerErrorKind::Store(_)
        | RandomizerErrorKind::Config(_) => Level::ERROR,
    }
}

fn log_failure(err: &RandomizerError) {
    let level = failure_level(err);
    if level == Level::ERROR {
        tracing::error!(error = %err, "Request failed");
    } else if level == Level::WARN {
        tracing::warn!(error = %err, "Request failed");
    } else {
        tracing::info!(error = %err, "Request failed");
    }
}

/// Print the result of one command to stdout.
///
/// Failures print only their help text; the cause is logged once, here.
/// Returns whether the command succeeded.
pub fn render(result: RandomizerResult<Outcome>, as_json: bool) -> bool {
    match result {
        Ok(outcome) => {
            if as_json {
                let value = json!({
                    "public": outcome.is_public(),
                    "text": outcome.message(),
                    "outcome": outcome,
                });
                println!("{}", value);
            } else {
                println!("{}", outcome.message());
            }
            true
        }
        Err(e) => {
            log_failure(&e);
            if as_json {
                println!("{}", json!({ "public": false, "text": e.help_text() }));
            } else {
                println!("{}", e.help_text());
            }
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use randomizer::{CancelledError, CommandError, CommandErrorKind, StoreError};

    #[test]
    fn test_store_failure_logged_as_error() {
        let err: RandomizerError = StoreError::operation("get \"lunch\"", "db down").into();
        assert_eq!(failure_level(&err), Level::ERROR);
    }

    #[test]
    fn test_command_mistake_logged_as_info() {
        let err: RandomizerError =
            CommandError::new(CommandErrorKind::GroupNotFound("lunch".to_string())).into();
        assert_eq!(failure_level(&err), Level::INFO);
    }

    #[test]
    fn test_cancellation_logged_as_warning() {
        let err: RandomizerError = CancelledError::new("listing groups", "cancelled").into();
        assert_eq!(failure_level(&err), Level::WARN);
    }
}
