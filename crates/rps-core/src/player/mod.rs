//! Game participants.
//!
//! A [`Player`] owns its name, its current move and its score. The session
//! is the only thing that changes the score; the player's own acquisition
//! logic is the only thing that changes the move.

pub mod computer;
pub mod human;

pub use computer::Computer;
pub use human::Human;

use crate::announce::{Announcer, Standing};
use crate::input::InputSource;
use crate::moves::Move;
use crate::throw::Throw;

/// Whether acquisition finished or the human asked to leave.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    /// A name or move is now set.
    Ready,
    /// The human exited; nothing was set.
    Exit,
}

/// The collaborators a participant may talk to while choosing.
pub struct Console<'a> {
    /// Answers to prompts.
    pub input: &'a mut dyn InputSource,
    /// Re-prompt explanations.
    pub announcer: &'a mut dyn Announcer,
}

/// A participant in the game.
pub trait Player {
    /// The participant's name.
    fn name(&self) -> &str;

    /// Obtain a name. Participants with a fixed name are ready immediately.
    fn choose_name(&mut self, _console: &mut Console<'_>) -> Choice {
        Choice::Ready
    }

    /// Choose the move for the coming round, given the previous round's outcome.
    fn choose_move(&mut self, last: &Throw, console: &mut Console<'_>) -> Choice;

    /// The move chosen for the current round.
    fn current_move(&self) -> Option<Move>;

    /// Add one won round.
    fn increment_score(&mut self);

    /// Rounds won in the current game.
    fn score(&self) -> u32;

    /// Zero the score and forget the current move.
    fn reset(&mut self);

    /// This participant's scoreboard line.
    fn standing(&self) -> Standing<'_> {
        Standing {
            name: self.name(),
            score: self.score(),
            last_move: self.current_move(),
        }
    }
}
