//! Group name validation.

use randomizer_error::{CommandError, CommandErrorKind};

/// Check that `name` can be used to save a group.
///
/// Rejected names are the ones that would collide with command syntax:
/// `help`, anything flag-like (`/...`), and the `+`/`-` option prefixes.
///
/// # Examples
///
/// ```
/// use randomizer_app::validate_group_name;
///
/// assert!(validate_group_name("lunch").is_ok());
/// assert!(validate_group_name("help").is_err());
/// assert!(validate_group_name("/list").is_err());
/// ```
pub fn validate_group_name(name: &str) -> Result<(), CommandError> {
    let reason = if name.is_empty() {
        "it's empty"
    } else if name == "help" {
        "it's reserved for showing help"
    } else if name.starts_with('/') {
        "names starting with a slash are reserved for flags"
    } else if name.starts_with('+') || name.starts_with('-') {
        "names starting with + or - would be read as adding or removing options"
    } else {
        return Ok(());
    };

    Err(CommandError::new(CommandErrorKind::InvalidGroupName {
        name: name.to_string(),
        reason: reason.to_string(),
    }))
}
