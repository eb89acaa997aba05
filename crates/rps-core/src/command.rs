//! Reserved menu commands and prompt replies.

use std::fmt;

/// A command the human can type at any numeric or text prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    /// Leave the game, after confirmation.
    Exit,
}

impl MenuCommand {
    /// The number typed to issue this command.
    pub fn code(self) -> i64 {
        match self {
            Self::Exit => 0,
        }
    }

    /// Look up a command by its number.
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(Self::Exit),
            _ => None,
        }
    }
}

impl fmt::Display for MenuCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exit => write!(f, "exit"),
        }
    }
}

/// A successful answer to a prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply<T> {
    /// An ordinary value.
    Value(T),
    /// The human confirmed the exit command. Cancellation is already raised.
    Exit,
}
