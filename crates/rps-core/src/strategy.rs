//! The computer's adaptive move selection.
//!
//! After a decisive round the computer throws the move that appeared in
//! neither hand. A human who lost tends to copy the move that beat them, and
//! a human who won tends to repeat; the absent move beats both. After a tie,
//! or before the first round, the choice is uniform over all three moves.

use rand::Rng;
use rand::rngs::StdRng;
use tracing::trace;

use crate::moves::Move;
use crate::throw::Throw;

/// Source of uniform draws for the computer.
pub trait Randomizer {
    /// A uniform draw from `0..bound`. `bound` is always positive.
    fn next_index(&mut self, bound: usize) -> usize;
}

impl Randomizer for StdRng {
    fn next_index(&mut self, bound: usize) -> usize {
        self.random_range(0..bound)
    }
}

/// Pick the computer's next move from the previous round's outcome.
pub fn next_move<R: Randomizer + ?Sized>(last: &Throw, rng: &mut R) -> Move {
    match last {
        Throw::Decided {
            winning_move,
            losing_move,
            ..
        } => match Move::missing(*winning_move, *losing_move) {
            Some(mv) => {
                trace!(%winning_move, %losing_move, chosen = %mv, "playing the missing move");
                mv
            }
            None => random_move(rng),
        },
        Throw::Empty => random_move(rng),
    }
}

fn random_move<R: Randomizer + ?Sized>(rng: &mut R) -> Move {
    let index = rng.next_index(Move::ALL.len()) % Move::ALL.len();
    let mv = Move::ALL[index];
    trace!(index, chosen = %mv, "playing a random move");
    mv
}
