//! The randomizer application entry point.

use crate::{RandomShuffler, Shuffler, dispatch, parse};
use randomizer_core::{Context, Outcome};
use randomizer_error::RandomizerResult;
use randomizer_store::OptionStore;
use std::sync::Arc;
use tracing::instrument;

/// A randomizer instance that accepts commands.
///
/// Cheap to clone; clones share the store and shuffler.
#[derive(Clone)]
pub struct App {
    name: String,
    store: Arc<dyn OptionStore>,
    shuffler: Arc<dyn Shuffler>,
}

impl App {
    /// Create an app invoked as `name` (shown in help text) backed by `store`.
    pub fn new(name: impl Into<String>, store: Arc<dyn OptionStore>) -> Self {
        Self {
            name: name.into(),
            store,
            shuffler: Arc::new(RandomShuffler),
        }
    }

    /// Replace the shuffler, e.g. with a deterministic one for tests.
    pub fn with_shuffler(mut self, shuffler: impl Shuffler + 'static) -> Self {
        self.shuffler = Arc::new(shuffler);
        self
    }

    /// Name the command is invoked as.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn store(&self) -> &dyn OptionStore {
        self.store.as_ref()
    }

    pub(crate) fn shuffler(&self) -> &dyn Shuffler {
        self.shuffler.as_ref()
    }

    /// Parse `args` and run the matching handler.
    ///
    /// Errors are [`RandomizerError`](randomizer_error::RandomizerError)s whose
    /// `help_text()` is fit to show the user.
    #[instrument(skip(self, ctx, args), fields(app = %self.name, arg_count = args.len(), operation))]
    pub async fn main(&self, ctx: &Context, args: &[String]) -> RandomizerResult<Outcome> {
        let request = parse(ctx.clone(), args).inspect_err(|e| {
            tracing::debug!(error = %e, "Rejected command");
        })?;

        tracing::Span::current().record("operation", request.operation().as_ref());
        dispatch(self, request).await
    }
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App").field("name", &self.name).finish_non_exhaustive()
    }
}
