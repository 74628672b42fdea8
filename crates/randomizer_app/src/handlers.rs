//! Operation handlers.
//!
//! Each public-to-the-crate function here adapts an `App` method to the
//! [`Handler`](crate::dispatch::Handler) signature used by the dispatch table.

use crate::App;
use crate::selection::is_literal;
use crate::validation::validate_group_name;
use futures::future::BoxFuture;
use randomizer_core::{Outcome, Request};
use randomizer_error::{
    CommandError, CommandErrorKind, RandomizerError, RandomizerResult, StoreError,
};
use tracing::instrument;

pub(crate) fn show_help(app: &App, request: Request) -> BoxFuture<'_, RandomizerResult<Outcome>> {
    Box::pin(app.show_help(request))
}

pub(crate) fn make_selection(
    app: &App,
    request: Request,
) -> BoxFuture<'_, RandomizerResult<Outcome>> {
    Box::pin(app.make_selection(request))
}

pub(crate) fn list_groups(app: &App, request: Request) -> BoxFuture<'_, RandomizerResult<Outcome>> {
    Box::pin(app.list_groups(request))
}

pub(crate) fn show_group(app: &App, request: Request) -> BoxFuture<'_, RandomizerResult<Outcome>> {
    Box::pin(app.show_group(request))
}

pub(crate) fn save_group(app: &App, request: Request) -> BoxFuture<'_, RandomizerResult<Outcome>> {
    Box::pin(app.save_group(request))
}

pub(crate) fn delete_group(
    app: &App,
    request: Request,
) -> BoxFuture<'_, RandomizerResult<Outcome>> {
    Box::pin(app.delete_group(request))
}

/// Wrap a store failure with the operation and group it concerned.
///
/// Cancellations pass through untouched so callers can still tell them apart.
pub(crate) fn store_failure<'a>(
    operation: &'static str,
    group: &'a str,
) -> impl FnOnce(RandomizerError) -> RandomizerError + 'a {
    move |err| {
        if err.is_cancelled() {
            return err;
        }
        tracing::debug!(operation, group, error = %err, "Option store call failed");
        StoreError::operation(format!("{} {:?}", operation, group), err.to_string()).into()
    }
}

fn not_enough_options(found: usize) -> RandomizerError {
    CommandError::new(CommandErrorKind::NotEnoughOptions { found }).into()
}

impl App {
    async fn show_help(&self, _request: Request) -> RandomizerResult<Outcome> {
        Ok(Outcome::Help {
            command: self.name().to_string(),
        })
    }

    #[instrument(skip_all, fields(arg_count = request.args().len()))]
    async fn make_selection(&self, request: Request) -> RandomizerResult<Outcome> {
        let ctx = request.context();
        let args = request.args();

        // A lone word naming a saved group picks from that group.
        let mut resolved = self.resolve_options(ctx, args).await?;
        if let [only] = args.as_slice()
            && is_literal(only)
        {
            let saved = self
                .store()
                .get(ctx, only)
                .await
                .map_err(store_failure("get", only))?;
            if !saved.is_empty() {
                tracing::debug!(group = %only, "Selecting from saved group");
                resolved.options = saved;
            }
        }

        let mut options = resolved.options;
        if options.len() < 2 {
            return Err(not_enough_options(options.len()));
        }

        let count = resolved.count.unwrap_or(1);
        if count > options.len() {
            return Err(CommandError::new(CommandErrorKind::TooManyPicks {
                requested: count,
                available: options.len(),
            })
            .into());
        }

        self.shuffler().shuffle(&mut options);
        options.truncate(count);
        tracing::debug!(picks = options.len(), "Made selection");
        Ok(Outcome::Selection { picks: options })
    }

    #[instrument(skip_all)]
    async fn list_groups(&self, request: Request) -> RandomizerResult<Outcome> {
        let names = self
            .store()
            .list(request.context())
            .await
            .map_err(store_failure("list", ""))?;
        Ok(Outcome::Groups { names })
    }

    #[instrument(skip_all, fields(group = %request.operand()))]
    async fn show_group(&self, request: Request) -> RandomizerResult<Outcome> {
        let name = request.operand();
        let options = self
            .store()
            .get(request.context(), name)
            .await
            .map_err(store_failure("get", name))?;

        if options.is_empty() {
            return Err(
                CommandError::new(CommandErrorKind::GroupNotFound(name.to_string())).into(),
            );
        }

        Ok(Outcome::Group {
            name: name.to_string(),
            options,
        })
    }

    #[instrument(skip_all, fields(group = %request.operand()))]
    async fn save_group(&self, request: Request) -> RandomizerResult<Outcome> {
        let ctx = request.context();
        let name = request.operand();
        validate_group_name(name)?;

        let resolved = self.resolve_options(ctx, request.args()).await?;
        if resolved.count.is_some() {
            return Err(CommandError::new(CommandErrorKind::InvalidOption("/n".to_string())).into());
        }
        if resolved.options.len() < 2 {
            return Err(not_enough_options(resolved.options.len()));
        }

        self.store()
            .put(ctx, name, &resolved.options)
            .await
            .map_err(store_failure("put", name))?;

        tracing::info!(count = resolved.options.len(), "Saved group");
        Ok(Outcome::Saved {
            name: name.to_string(),
            options: resolved.options,
        })
    }

    #[instrument(skip_all, fields(group = %request.operand()))]
    async fn delete_group(&self, request: Request) -> RandomizerResult<Outcome> {
        let name = request.operand();
        let existed = self
            .store()
            .delete(request.context(), name)
            .await
            .map_err(store_failure("delete", name))?;

        tracing::info!(existed, "Deleted group");
        Ok(Outcome::Deleted {
            name: name.to_string(),
            existed,
        })
    }
}
