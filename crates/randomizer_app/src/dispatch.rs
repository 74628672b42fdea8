//! Routing requests to handlers.

use crate::{App, handlers};
use futures::future::BoxFuture;
use randomizer_core::{Operation, Outcome, Request};
use randomizer_error::RandomizerResult;

/// Signature shared by every operation handler.
pub(crate) type Handler = for<'a> fn(&'a App, Request) -> BoxFuture<'a, RandomizerResult<Outcome>>;

/// The handler for each operation.
///
/// Adding an operation means one new arm here plus its handler function.
pub(crate) fn handler_for(operation: Operation) -> Handler {
    match operation {
        Operation::Help => handlers::show_help,
        Operation::Select => handlers::make_selection,
        Operation::List => handlers::list_groups,
        Operation::Show => handlers::show_group,
        Operation::Save => handlers::save_group,
        Operation::Delete => handlers::delete_group,
    }
}

/// Run the handler for `request`'s operation.
pub async fn dispatch(app: &App, request: Request) -> RandomizerResult<Outcome> {
    let handler = handler_for(*request.operation());
    handler(app, request).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use randomizer_core::Context;
    use randomizer_store::MemoryStore;
    use std::sync::Arc;
    use strum::IntoEnumIterator;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test]
    async fn test_every_operation_reaches_its_handler() {
        let app = App::new("/randomize", Arc::new(MemoryStore::new()));

        for operation in Operation::iter() {
            let (operand, args) = match operation {
                Operation::Help | Operation::List => ("", vec![]),
                Operation::Select => ("", strings(&["a", "b"])),
                Operation::Show | Operation::Delete => ("g", vec![]),
                Operation::Save => ("g", strings(&["a", "b"])),
            };
            let ctx = Context::new();
            if operation == Operation::Show {
                app.store().put(&ctx, "g", &strings(&["a", "b"])).await.unwrap();
            }

            let request = Request::new(ctx, operation, operand, args);
            let outcome = dispatch(&app, request).await.unwrap();

            let matches = match operation {
                Operation::Help => matches!(outcome, Outcome::Help { .. }),
                Operation::Select => matches!(outcome, Outcome::Selection { .. }),
                Operation::List => matches!(outcome, Outcome::Groups { .. }),
                Operation::Show => matches!(outcome, Outcome::Group { .. }),
                Operation::Save => matches!(outcome, Outcome::Saved { .. }),
                Operation::Delete => matches!(outcome, Outcome::Deleted { .. }),
            };
            assert!(matches, "{operation} produced {outcome:?}");
        }
    }
}
