pub mod greet;

use crate::cli::Args;
use crate::error::CommandResult;

/// Dispatches execution to the appropriate command handler.
pub fn execute(args: &Args) -> CommandResult<String> {
    tracing::debug!(name_supplied = args.name.is_some(), "building greeting");
    greet::message(args)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GreeterError;

    #[test]
    fn dispatches_to_greeter() {
        let args = Args {
            name: Some("Rocky".into()),
        };
        assert_eq!(execute(&args).unwrap(), "Hello, my name is Rocky!");
    }

    #[test]
    fn propagates_missing_name() {
        assert_eq!(execute(&Args::default()), Err(GreeterError::MissingName));
    }
}
