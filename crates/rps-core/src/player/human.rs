//! The human participant.

use tracing::debug;

use crate::command::Reply;
use crate::error::InputError;
use crate::moves::Move;
use crate::throw::Throw;

use super::{Choice, Console, Player};

const NAME_PROMPT: &str = "Enter your name: ";
const MOVE_PROMPT: &str = "What do you want to throw? (1=rock, 2=paper, 3=scissors): ";

/// A participant whose name and moves come from the input collaborator.
#[derive(Debug, Clone, Default)]
pub struct Human {
    name: String,
    current: Option<Move>,
    score: u32,
}

impl Human {
    /// A human with no name yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// A human whose name is already known.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    #[cfg(test)]
    pub(crate) fn set_move(&mut self, mv: Move) {
        self.current = Some(mv);
    }
}

impl Player for Human {
    fn name(&self) -> &str {
        &self.name
    }

    fn choose_name(&mut self, console: &mut Console<'_>) -> Choice {
        loop {
            match console.input.request_text(NAME_PROMPT) {
                Ok(Reply::Value(name)) => {
                    self.name = name.to_uppercase();
                    debug!(name = %self.name, "human named");
                    return Choice::Ready;
                }
                Ok(Reply::Exit) => return Choice::Exit,
                Err(err) if !err.is_recoverable() => {
                    debug!(%err, "name entry abandoned");
                    return Choice::Exit;
                }
                Err(err) => {
                    debug!(%err, "rejected name");
                    console.announcer.invalid_input("Invalid input. Let's try again...");
                }
            }
        }
    }

    fn choose_move(&mut self, _last: &Throw, console: &mut Console<'_>) -> Choice {
        loop {
            let rejected = match console.input.request_number(MOVE_PROMPT) {
                Ok(Reply::Value(choice)) => match Move::from_choice(choice) {
                    Some(mv) => {
                        self.current = Some(mv);
                        return Choice::Ready;
                    }
                    None => InputError::NotAMenuOption(choice),
                },
                Ok(Reply::Exit) => return Choice::Exit,
                Err(err) if !err.is_recoverable() => {
                    debug!(%err, "move entry abandoned");
                    return Choice::Exit;
                }
                Err(err) => err,
            };
            debug!(err = %rejected, "rejected move");
            console.announcer.invalid_input("Invalid input. Please enter 1, 2, or 3:");
        }
    }

    fn current_move(&self) -> Option<Move> {
        self.current
    }

    fn increment_score(&mut self) {
        self.score += 1;
    }

    fn score(&self) -> u32 {
        self.score
    }

    fn reset(&mut self) {
        self.score = 0;
        self.current = None;
    }
}
