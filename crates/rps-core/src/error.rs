//! Error types for the input boundary.
//!
//! Nothing past the input boundary fails: the resolver and the strategy only
//! ever see validated [`Move`](crate::Move) values.

use thiserror::Error;

/// Result type for input collaborator operations.
pub type InputResult<T> = Result<T, InputError>;

/// Errors an input collaborator can report for a single prompt.
#[derive(Debug, Error)]
pub enum InputError {
    /// The response was an empty line.
    #[error("invalid input, empty field")]
    EmptyInput,

    /// A number was requested but the response did not parse as one.
    #[error("not a number: {0}")]
    NotANumber(String),

    /// A text prompt received a number that is not a menu command.
    #[error("not a menu option: {0}")]
    NotAMenuOption(i64),

    /// The exit command was entered but not confirmed.
    #[error("exit not confirmed")]
    ExitNotConfirmed,

    /// The input stream has ended. The collaborator raises the cancellation
    /// signal before returning this.
    #[error("input closed")]
    Closed,

    /// Reading from or writing to the terminal failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

impl InputError {
    /// Whether the prompt can be retried after this error.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Self::Closed | Self::Io(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(InputError::EmptyInput.to_string(), "invalid input, empty field");
        assert_eq!(InputError::NotANumber("abc".into()).to_string(), "not a number: abc");
        assert_eq!(InputError::NotAMenuOption(4).to_string(), "not a menu option: 4");
        assert_eq!(InputError::ExitNotConfirmed.to_string(), "exit not confirmed");
    }

    #[test]
    fn recoverable() {
        assert!(InputError::EmptyInput.is_recoverable());
        assert!(InputError::ExitNotConfirmed.is_recoverable());
        assert!(!InputError::Closed.is_recoverable());
        let io = std::io::Error::other("broken pipe");
        assert!(!InputError::from(io).is_recoverable());
    }
}
