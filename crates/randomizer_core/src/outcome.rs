//! Handler results and their rendering.

use serde::Serialize;

/// The result of a successfully handled request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Outcome {
    /// Usage information for the given command name
    Help {
        /// Name the command was invoked as, e.g. `/randomize`
        command: String,
    },
    /// Randomly chosen options, in pick order
    Selection {
        /// Chosen options
        picks: Vec<String>,
    },
    /// Names of all saved groups
    Groups {
        /// Group names, sorted
        names: Vec<String>,
    },
    /// Options of a single group
    Group {
        /// Group name
        name: String,
        /// Options in saved order
        options: Vec<String>,
    },
    /// A group was saved
    Saved {
        /// Group name
        name: String,
        /// Options as saved
        options: Vec<String>,
    },
    /// A delete was attempted
    Deleted {
        /// Group name
        name: String,
        /// Whether the group existed before deleting
        existed: bool,
    },
}

impl Outcome {
    /// Whether the whole channel should see this outcome.
    ///
    /// Only selections are shared; everything else goes back to the requester.
    pub fn is_public(&self) -> bool {
        matches!(self, Outcome::Selection { .. })
    }

    /// Render the outcome as chat-formatted text.
    ///
    /// # Examples
    ///
    /// ```
    /// use randomizer_core::Outcome;
    ///
    /// let outcome = Outcome::Selection { picks: vec!["tacos".to_string()] };
    /// assert_eq!(outcome.message(), "The randomizer has spoken: *tacos*");
    /// ```
    pub fn message(&self) -> String {
        match self {
            Outcome::Help { command } => help_message(command),
            Outcome::Selection { picks } => match picks.as_slice() {
                [single] => format!("The randomizer has spoken: *{}*", single),
                many => format!("The randomizer has spoken:\n{}", numbered(many)),
            },
            Outcome::Groups { names } if names.is_empty() => {
                "No groups are saved yet. Use `/save` to make one!".to_string()
            }
            Outcome::Groups { names } => format!("Saved groups:\n{}", bulleted(names)),
            Outcome::Group { name, options } => {
                format!("Options in *{}*:\n{}", name, bulleted(options))
            }
            Outcome::Saved { name, options } => {
                format!("Saved *{}* with {} options.", name, options.len())
            }
            Outcome::Deleted {
                name,
                existed: true,
            } => format!("Deleted *{}*.", name),
            Outcome::Deleted {
                name,
                existed: false,
            } => format!("There was no group named *{}*, so nothing was deleted.", name),
        }
    }
}

fn bulleted(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!("• {}", item))
        .collect::<Vec<_>>()
        .join("\n")
}

fn numbered(items: &[String]) -> String {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| format!("{}. *{}*", i + 1, item))
        .collect::<Vec<_>>()
        .join("\n")
}

fn help_message(command: &str) -> String {
    format!(
        "Randomly pick from a list of options.\n\
         • `{cmd} Alice Bob Carol` picks one of the options\n\
         • `{cmd} /n 2 Alice Bob Carol` picks two of them\n\
         • `{cmd} /save lunch tacos pizza sushi` saves a group for later\n\
         • `{cmd} +lunch` picks from a saved group, and `-pizza` leaves an option out\n\
         • `{cmd} /show lunch` shows the options in a group\n\
         • `{cmd} /list` lists saved groups\n\
         • `{cmd} /delete lunch` deletes a group\n\
         • `{cmd} help` shows this message",
        cmd = command
    )
}
