use crate::cli::Args;
use crate::error::{CommandResult, GreeterError};

pub const PREFIX: &str = "Hello, my name is ";

/// Formats the greeting for `name` verbatim.
pub fn greeting(name: &str) -> String {
    format!("{PREFIX}{name}!")
}

/// Returns the greeting message for the provided arguments.
pub fn message(args: &Args) -> CommandResult<String> {
    args.name
        .as_deref()
        .map(greeting)
        .ok_or(GreeterError::MissingName)
}
