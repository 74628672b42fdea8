//! Argument parsing.

use randomizer_core::{Context, Operation, Request};
use randomizer_error::{CommandError, CommandErrorKind, RandomizerResult};

/// Build a [`Request`] from raw command tokens.
pub fn parse(ctx: Context, args: &[String]) -> RandomizerResult<Request> {
    let (operation, operand, rest) = parse_args(args)?;
    Ok(Request::new(ctx, operation, operand, rest))
}

/// Split raw command tokens into an operation, its operand, and the
/// remaining arguments.
///
/// Group names are not validated here. Handlers decide which names they accept.
///
/// # Examples
///
/// ```
/// use randomizer_app::parse_args;
/// use randomizer_core::Operation;
///
/// let args: Vec<String> = ["/show", "lunch"].iter().map(|s| s.to_string()).collect();
/// let (operation, operand, rest) = parse_args(&args).unwrap();
/// assert_eq!(operation, Operation::Show);
/// assert_eq!(operand, "lunch");
/// assert!(rest.is_empty());
/// ```
pub fn parse_args(args: &[String]) -> Result<(Operation, String, Vec<String>), CommandError> {
    // "help" on its own is accepted alongside the flag form. Saving a group
    // named "help" is refused elsewhere so this never hides a group.
    match args {
        [] => return Ok((Operation::Help, String::new(), Vec::new())),
        [first, ..] if first == "/help" => {
            return Ok((Operation::Help, String::new(), args.to_vec()));
        }
        [only] if only == "help" => return Ok((Operation::Help, String::new(), args.to_vec())),
        _ => {}
    }

    let flag = args[0].as_str();
    let operation = match flag {
        "/list" => return Ok((Operation::List, String::new(), args.to_vec())),
        "/show" => Operation::Show,
        "/save" => Operation::Save,
        "/delete" => Operation::Delete,
        // Unknown leading tokens are option text, even when they look like
        // flags, so options may start with any character.
        _ => return Ok((Operation::Select, String::new(), args.to_vec())),
    };

    match args {
        [_, operand, rest @ ..] => Ok((operation, operand.clone(), rest.to_vec())),
        _ => Err(CommandError::new(CommandErrorKind::MissingOperand {
            flag: flag.to_string(),
        })),
    }
}
