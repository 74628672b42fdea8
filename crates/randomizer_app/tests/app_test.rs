//! End-to-end tests for command handling.

use randomizer_app::App;
use randomizer_core::{Context, Outcome};
use randomizer_error::{
    CommandErrorKind, RandomizerErrorKind, RandomizerResult, StoreError, StoreErrorKind,
};
use randomizer_store::{MemoryStore, OptionStore};
use std::sync::Arc;

fn args(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// App whose "shuffle" reverses the options, so picks are predictable.
fn app() -> (App, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let app = App::new("/randomize", store.clone())
        .with_shuffler(|options: &mut [String]| options.reverse());
    (app, store)
}

async fn run(app: &App, input: &[&str]) -> RandomizerResult<Outcome> {
    app.main(&Context::new(), &args(input)).await
}

fn command_kind(result: RandomizerResult<Outcome>) -> CommandErrorKind {
    let err = result.unwrap_err();
    match err.kind() {
        RandomizerErrorKind::Command(command) => command.kind.clone(),
        other => panic!("expected command error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_help() {
    let (app, _) = app();
    assert_eq!(
        run(&app, &[]).await.unwrap(),
        Outcome::Help {
            command: "/randomize".to_string()
        }
    );
    assert!(matches!(run(&app, &["help"]).await.unwrap(), Outcome::Help { .. }));
}

#[tokio::test]
async fn test_select_uses_shuffled_order() {
    let (app, _) = app();
    assert_eq!(
        run(&app, &["a", "b", "c"]).await.unwrap(),
        Outcome::Selection {
            picks: args(&["c"])
        }
    );
}

#[tokio::test]
async fn test_select_multiple_picks() {
    let (app, _) = app();
    assert_eq!(
        run(&app, &["/n", "2", "a", "b", "c"]).await.unwrap(),
        Outcome::Selection {
            picks: args(&["c", "b"])
        }
    );
}

#[tokio::test]
async fn test_select_rejects_bad_counts() {
    let (app, _) = app();
    assert_eq!(
        command_kind(run(&app, &["a", "b", "/n"]).await),
        CommandErrorKind::MissingCount
    );
    assert_eq!(
        command_kind(run(&app, &["/n", "zero", "a", "b"]).await),
        CommandErrorKind::InvalidCount("zero".to_string())
    );
    assert_eq!(
        command_kind(run(&app, &["/n", "3", "a", "b"]).await),
        CommandErrorKind::TooManyPicks {
            requested: 3,
            available: 2
        }
    );
}

#[tokio::test]
async fn test_select_needs_two_options() {
    let (app, _) = app();
    assert_eq!(
        command_kind(run(&app, &["lonely"]).await),
        CommandErrorKind::NotEnoughOptions { found: 1 }
    );
}

#[tokio::test]
async fn test_select_from_saved_group() {
    let (app, store) = app();
    let ctx = Context::new();
    store.put(&ctx, "lunch", &args(&["tacos", "pizza"])).await.unwrap();

    assert_eq!(
        run(&app, &["lunch"]).await.unwrap(),
        Outcome::Selection {
            picks: args(&["pizza"])
        }
    );
    assert_eq!(
        run(&app, &["+lunch", "sushi"]).await.unwrap(),
        Outcome::Selection {
            picks: args(&["sushi"])
        }
    );
    assert_eq!(
        run(&app, &["+lunch", "sushi", "-sushi", "-pizza", "curry"]).await.unwrap(),
        Outcome::Selection {
            picks: args(&["curry"])
        }
    );
}

#[tokio::test]
async fn test_select_missing_group_expansion() {
    let (app, _) = app();
    assert_eq!(
        command_kind(run(&app, &["+dinner", "a"]).await),
        CommandErrorKind::GroupNotFound("dinner".to_string())
    );
}

#[tokio::test]
async fn test_flag_like_options_are_selectable() {
    let (app, _) = app();
    assert_eq!(
        run(&app, &["/notaflag", "+", "-"]).await.unwrap(),
        Outcome::Selection {
            picks: args(&["-"])
        }
    );
}

#[tokio::test]
async fn test_save_show_list_delete() {
    let (app, _) = app();

    assert_eq!(
        run(&app, &["/save", "lunch", "tacos", "pizza"]).await.unwrap(),
        Outcome::Saved {
            name: "lunch".to_string(),
            options: args(&["tacos", "pizza"])
        }
    );
    assert_eq!(
        run(&app, &["/show", "lunch"]).await.unwrap(),
        Outcome::Group {
            name: "lunch".to_string(),
            options: args(&["tacos", "pizza"])
        }
    );
    assert_eq!(
        run(&app, &["/list"]).await.unwrap(),
        Outcome::Groups {
            names: args(&["lunch"])
        }
    );
    assert_eq!(
        run(&app, &["/delete", "lunch"]).await.unwrap(),
        Outcome::Deleted {
            name: "lunch".to_string(),
            existed: true
        }
    );
    assert_eq!(
        run(&app, &["/delete", "lunch"]).await.unwrap(),
        Outcome::Deleted {
            name: "lunch".to_string(),
            existed: false
        }
    );
    assert_eq!(
        run(&app, &["/list"]).await.unwrap(),
        Outcome::Groups { names: vec![] }
    );
}

#[tokio::test]
async fn test_save_composes_existing_groups() {
    let (app, _) = app();
    run(&app, &["/save", "lunch", "tacos", "pizza"]).await.unwrap();

    assert_eq!(
        run(&app, &["/save", "dinner", "+lunch", "-tacos", "steak"]).await.unwrap(),
        Outcome::Saved {
            name: "dinner".to_string(),
            options: args(&["pizza", "steak"])
        }
    );
}

#[tokio::test]
async fn test_save_rejects_reserved_names() {
    let (app, store) = app();
    for name in ["help", "/list", "+x", "-x"] {
        assert!(matches!(
            command_kind(run(&app, &["/save", name, "a", "b"]).await),
            CommandErrorKind::InvalidGroupName { .. }
        ));
    }
    assert!(store.is_empty());
}

#[tokio::test]
async fn test_save_rejects_count_and_short_lists() {
    let (app, _) = app();
    assert_eq!(
        command_kind(run(&app, &["/save", "g", "/n", "2", "a", "b"]).await),
        CommandErrorKind::InvalidOption("/n".to_string())
    );
    assert_eq!(
        command_kind(run(&app, &["/save", "g", "a"]).await),
        CommandErrorKind::NotEnoughOptions { found: 1 }
    );
}

#[tokio::test]
async fn test_show_missing_group() {
    let (app, _) = app();
    let err = run(&app, &["/show", "nope"]).await.unwrap_err();
    assert!(err.help_text().contains("nope"));
}

#[tokio::test]
async fn test_missing_operand_never_reaches_store() {
    let (app, store) = app();
    let err = run(&app, &["/save"]).await.unwrap_err();
    assert!(err.help_text().contains("/save"));
    assert!(store.is_empty());
}

#[tokio::test]
async fn test_cancelled_context_propagates() {
    let (app, _) = app();
    let ctx = Context::new();
    ctx.cancel();
    let err = app.main(&ctx, &args(&["/list"])).await.unwrap_err();
    assert!(err.is_cancelled());
}

/// Store whose every call fails.
struct BrokenStore;

#[async_trait::async_trait]
impl OptionStore for BrokenStore {
    async fn list(&self, _ctx: &Context) -> RandomizerResult<Vec<String>> {
        Err(StoreError::new(StoreErrorKind::Unavailable("db down".to_string())).into())
    }

    async fn get(&self, _ctx: &Context, _group: &str) -> RandomizerResult<Vec<String>> {
        Err(StoreError::new(StoreErrorKind::Unavailable("db down".to_string())).into())
    }

    async fn put(&self, _ctx: &Context, _group: &str, _options: &[String]) -> RandomizerResult<()> {
        Err(StoreError::new(StoreErrorKind::Unavailable("db down".to_string())).into())
    }

    async fn delete(&self, _ctx: &Context, _group: &str) -> RandomizerResult<bool> {
        Err(StoreError::new(StoreErrorKind::Unavailable("db down".to_string())).into())
    }
}

#[tokio::test]
async fn test_store_failure_is_wrapped_with_operation() {
    let app = App::new("/randomize", Arc::new(BrokenStore));
    let err = app
        .main(&Context::new(), &args(&["/delete", "lunch"]))
        .await
        .unwrap_err();

    match err.kind() {
        RandomizerErrorKind::Store(store) => match &store.kind {
            StoreErrorKind::Operation { operation, message } => {
                assert!(operation.contains("delete"));
                assert!(operation.contains("lunch"));
                assert!(message.contains("db down"));
            }
            other => panic!("unexpected store error {:?}", other),
        },
        other => panic!("expected store error, got {:?}", other),
    }

    // Internal details stay out of the user's message.
    assert!(!err.help_text().contains("db down"));
}
