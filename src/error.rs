use thiserror::Error;

pub type CommandResult<T> = Result<T, GreeterError>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GreeterError {
    #[error("no name was provided; pass --name <NAME>")]
    MissingName,
}
