//! Tests for command argument parsing.

use randomizer_app::{parse, parse_args};
use randomizer_core::{Context, Operation};
use randomizer_error::{CommandErrorKind, RandomizerErrorKind};

fn args(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_help_forms() {
    for input in [args(&[]), args(&["/help"]), args(&["help"]), args(&["/help", "x"])] {
        let (operation, operand, _) = parse_args(&input).unwrap();
        assert_eq!(operation, Operation::Help, "input {:?}", input);
        assert_eq!(operand, "");
    }
}

#[test]
fn test_help_with_extra_args_is_selection() {
    let input = args(&["help", "x"]);
    let (operation, operand, rest) = parse_args(&input).unwrap();
    assert_eq!(operation, Operation::Select);
    assert_eq!(operand, "");
    assert_eq!(rest, input);
}

#[test]
fn test_list_takes_no_operand() {
    let input = args(&["/list"]);
    let (operation, operand, rest) = parse_args(&input).unwrap();
    assert_eq!(operation, Operation::List);
    assert_eq!(operand, "");
    assert_eq!(rest, input);
}

#[test]
fn test_list_ignores_extra_args() {
    let input = args(&["/list", "extra"]);
    let (operation, operand, rest) = parse_args(&input).unwrap();
    assert_eq!(operation, Operation::List);
    assert_eq!(operand, "");
    assert_eq!(rest, input);
}

#[test]
fn test_missing_operand_names_flag() {
    for flag in ["/show", "/save", "/delete"] {
        let err = parse_args(&args(&[flag])).unwrap_err();
        match &err.kind {
            CommandErrorKind::MissingOperand { flag: reported } => assert_eq!(reported, flag),
            other => panic!("unexpected error kind {:?}", other),
        }
        assert!(err.kind.help_text().contains(flag));
        assert!(err.to_string().contains(flag));
    }
}

#[test]
fn test_operand_and_rest_are_split() {
    let (operation, operand, rest) = parse_args(&args(&["/show", "g", "a", "b"])).unwrap();
    assert_eq!(operation, Operation::Show);
    assert_eq!(operand, "g");
    assert_eq!(rest, args(&["a", "b"]));

    let (operation, operand, rest) = parse_args(&args(&["/save", "g", "a", "b"])).unwrap();
    assert_eq!(operation, Operation::Save);
    assert_eq!(operand, "g");
    assert_eq!(rest, args(&["a", "b"]));

    let (operation, operand, rest) = parse_args(&args(&["/delete", "g"])).unwrap();
    assert_eq!(operation, Operation::Delete);
    assert_eq!(operand, "g");
    assert!(rest.is_empty());
}

#[test]
fn test_unknown_tokens_select_with_all_args() {
    let input = args(&["somegroup", "x", "y"]);
    let (operation, operand, rest) = parse_args(&input).unwrap();
    assert_eq!(operation, Operation::Select);
    assert_eq!(operand, "");
    assert_eq!(rest, input);
}

#[test]
fn test_unknown_flag_is_option_text() {
    let input = args(&["/unknown", "x"]);
    let (operation, _, rest) = parse_args(&input).unwrap();
    assert_eq!(operation, Operation::Select);
    assert_eq!(rest, input);
}

#[test]
fn test_parser_does_not_validate_group_names() {
    let (operation, operand, _) = parse_args(&args(&["/save", "help", "a", "b"])).unwrap();
    assert_eq!(operation, Operation::Save);
    assert_eq!(operand, "help");
}

#[test]
fn test_parse_builds_request() {
    let request = parse(Context::new(), &args(&["/show", "g", "a"])).unwrap();
    assert_eq!(*request.operation(), Operation::Show);
    assert_eq!(request.operand(), "g");
    assert_eq!(request.args(), &args(&["a"]));
}

#[test]
fn test_parse_error_is_command_error() {
    let err = parse(Context::new(), &args(&["/delete"])).unwrap_err();
    assert!(matches!(err.kind(), RandomizerErrorKind::Command(_)));
    assert!(err.help_text().contains("/delete"));
}
