//! A single parsed command invocation.

use crate::{Context, Operation};
use derive_getters::Getters;

/// One user request, created from raw command tokens.
///
/// A request is built once per invocation and never modified afterwards.
///
/// # Examples
///
/// ```
/// use randomizer_core::{Context, Operation, Request};
///
/// let request = Request::new(
///     Context::new(),
///     Operation::Show,
///     "lunch",
///     vec!["extra".to_string()],
/// );
/// assert_eq!(*request.operation(), Operation::Show);
/// assert_eq!(request.operand(), "lunch");
/// assert_eq!(request.args(), &["extra".to_string()]);
/// ```
#[derive(Debug, Clone, Getters)]
pub struct Request {
    context: Context,
    operation: Operation,
    operand: String,
    args: Vec<String>,
}

impl Request {
    /// Create a request.
    pub fn new(
        context: Context,
        operation: Operation,
        operand: impl Into<String>,
        args: Vec<String>,
    ) -> Self {
        Self {
            context,
            operation,
            operand: operand.into(),
            args,
        }
    }
}
