//! The display collaborator seam.
//!
//! Every notification is fire-and-forget; the session never reads anything
//! back from the display.

use crate::moves::Move;

/// One participant's line on the scoreboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Standing<'a> {
    /// Participant name.
    pub name: &'a str,
    /// Rounds won so far in this game.
    pub score: u32,
    /// The move thrown in the latest round, if any.
    pub last_move: Option<Move>,
}

/// Receives the session's notifications.
pub trait Announcer {
    /// Clear the screen between phases.
    fn clear(&mut self) {}

    /// Show the scoreboard before a round.
    fn round_score(&mut self, standings: &[Standing<'_>], winning_score: u32);

    /// Reveal the moves thrown this round.
    fn reveal(&mut self, standings: &[Standing<'_>]);

    /// Announce who took the round.
    fn round_winner(&mut self, winning_move: Move, losing_move: Move, winner: &str);

    /// Announce a drawn round.
    fn draw(&mut self);

    /// Announce the winner of the game.
    fn game_winner(&mut self, winner: &str);

    /// Explain why an answer was rejected before re-prompting.
    fn invalid_input(&mut self, message: &str);
}

impl<T: Announcer + ?Sized> Announcer for &mut T {
    fn clear(&mut self) {
        (**self).clear();
    }

    fn round_score(&mut self, standings: &[Standing<'_>], winning_score: u32) {
        (**self).round_score(standings, winning_score);
    }

    fn reveal(&mut self, standings: &[Standing<'_>]) {
        (**self).reveal(standings);
    }

    fn round_winner(&mut self, winning_move: Move, losing_move: Move, winner: &str) {
        (**self).round_winner(winning_move, losing_move, winner);
    }

    fn draw(&mut self) {
        (**self).draw();
    }

    fn game_winner(&mut self, winner: &str) {
        (**self).game_winner(winner);
    }

    fn invalid_input(&mut self, message: &str) {
        (**self).invalid_input(message);
    }
}
