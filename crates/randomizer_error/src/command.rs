//! Errors caused by the user's command itself.

/// Kinds of command errors.
///
/// Each kind knows how to explain itself to the person who typed the command,
/// see [`CommandErrorKind::help_text`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum CommandErrorKind {
    /// A flag that operates on a group was given without the group name
    #[display("{:?} flag requires an argument", flag)]
    MissingOperand {
        /// The flag as typed, e.g. `/show`
        flag: String,
    },
    /// The group name can't be used for saving
    #[display("invalid group name {:?}: {}", name, reason)]
    InvalidGroupName {
        /// Rejected name
        name: String,
        /// Why it was rejected
        reason: String,
    },
    /// The referenced group does not exist
    #[display("group {:?} does not exist", _0)]
    GroupNotFound(String),
    /// Too few options to choose between
    #[display("need at least 2 options, found {}", found)]
    NotEnoughOptions {
        /// Number of options after resolution
        found: usize,
    },
    /// `/n` was given without a number after it
    #[display("/n flag requires a count")]
    MissingCount,
    /// The value given to `/n` is not a positive integer
    #[display("invalid pick count {:?}", _0)]
    InvalidCount(String),
    /// More picks were requested than there are options
    #[display("requested {} picks from {} options", requested, available)]
    TooManyPicks {
        /// Requested number of picks
        requested: usize,
        /// Number of options available
        available: usize,
    },
    /// A token that isn't allowed in this position
    #[display("invalid option {:?}", _0)]
    InvalidOption(String),
}

impl CommandErrorKind {
    /// User-facing explanation of the problem.
    pub fn help_text(&self) -> String {
        match self {
            Self::MissingOperand { flag } => {
                format!("Whoops, {:?} needs the name of a group to work with!", flag)
            }
            Self::InvalidGroupName { name, reason } => {
                format!("Sorry, {:?} can't be used as a group name: {}.", name, reason)
            }
            Self::GroupNotFound(name) => format!("Hmm, I couldn't find a group named {:?}.", name),
            Self::NotEnoughOptions { found } => format!(
                "I need at least two options to choose from, but only found {}.",
                found
            ),
            Self::MissingCount => "Whoops, `/n` needs a number after it!".to_string(),
            Self::InvalidCount(token) => format!(
                "{:?} isn't a number of items I can pick. Try a whole number like 2.",
                token
            ),
            Self::TooManyPicks {
                requested,
                available,
            } => format!(
                "You asked for {} picks, but there are only {} options.",
                requested, available
            ),
            Self::InvalidOption(token) => format!("Sorry, {:?} isn't allowed here.", token),
        }
    }
}

/// Command error with location tracking.
///
/// # Examples
///
/// ```
/// use randomizer_error::{CommandError, CommandErrorKind};
///
/// let err = CommandError::new(CommandErrorKind::GroupNotFound("lunch".to_string()));
/// assert!(format!("{}", err).contains("does not exist"));
/// assert!(err.kind.help_text().contains("lunch"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Command Error: {} at line {} in {}", kind, line, file)]
pub struct CommandError {
    /// The kind of error that occurred
    pub kind: CommandErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl CommandError {
    /// Create a new command error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: CommandErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
