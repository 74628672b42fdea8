//! The closed set of command operations.

use serde::{Deserialize, Serialize};

/// What a command asks the randomizer to do.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
    strum::AsRefStr,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// Show usage information
    Help,
    /// Randomly pick from options
    Select,
    /// List saved groups
    List,
    /// Show the options in a saved group
    Show,
    /// Save a group of options
    Save,
    /// Delete a saved group
    Delete,
}
