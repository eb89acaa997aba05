//! The computer participant.

use tracing::debug;

use crate::moves::Move;
use crate::strategy::{Randomizer, next_move};
use crate::throw::Throw;

use super::{Choice, Console, Player};

/// Default name of the computer participant.
pub const COMPUTER_NAME: &str = "ROBOT";

/// A participant whose moves come from the adaptive strategy.
#[derive(Debug)]
pub struct Computer<R> {
    name: String,
    current: Option<Move>,
    score: u32,
    rng: R,
}

impl<R: Randomizer> Computer<R> {
    /// A computer named [`COMPUTER_NAME`] drawing from `rng`.
    pub fn new(rng: R) -> Self {
        Self::named(COMPUTER_NAME, rng)
    }

    /// A computer with a custom name.
    pub fn named(name: impl Into<String>, rng: R) -> Self {
        Self {
            name: name.into(),
            current: None,
            score: 0,
            rng,
        }
    }

    /// The randomness source.
    pub fn rng(&self) -> &R {
        &self.rng
    }
}

impl<R: Randomizer> Player for Computer<R> {
    fn name(&self) -> &str {
        &self.name
    }

    fn choose_move(&mut self, last: &Throw, _console: &mut Console<'_>) -> Choice {
        let mv = next_move(last, &mut self.rng);
        debug!(name = %self.name, chosen = %mv, "computer chose");
        self.current = Some(mv);
        Choice::Ready
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cancel::CancelToken;
    use crate::testing::{RecordingAnnouncer, ScriptedInput, ScriptedRandomizer};

    fn choose(computer: &mut Computer<ScriptedRandomizer>, last: &Throw) -> Choice {
        let mut input = ScriptedInput::new(vec![], CancelToken::new());
        let mut announcer = RecordingAnnouncer::default();
        computer.choose_move(
            last,
            &mut Console {
                input: &mut input,
                announcer: &mut announcer,
            },
        )
    }

    #[test]
    fn default_name() {
        let c = Computer::new(ScriptedRandomizer::new([]));
        assert_eq!(c.name(), "ROBOT");
        let c = Computer::named("ABC", ScriptedRandomizer::new([]));
        assert_eq!(c.name(), "ABC");
    }

    #[test]
    fn random_move_after_tie() {
        let mut c = Computer::new(ScriptedRandomizer::new([1]));
        assert_eq!(choose(&mut c, &Throw::Empty), Choice::Ready);
        assert_eq!(c.current_move(), Some(Move::Paper));
        assert_eq!(c.rng().calls(), 1);
    }

    #[test]
    fn missing_move_after_win() {
        let mut c = Computer::new(ScriptedRandomizer::new([]));
        choose(&mut c, &Throw::decided(Move::Rock, Move::Scissors, "ANA"));
        assert_eq!(c.current_move(), Some(Move::Paper));
        assert_eq!(c.rng().calls(), 0);
    }

    #[test]
    fn never_prompts() {
        let mut c = Computer::new(ScriptedRandomizer::new([0]));
        let mut input = ScriptedInput::new(vec![], CancelToken::new());
        let mut announcer = RecordingAnnouncer::default();
        let mut console = Console {
            input: &mut input,
            announcer: &mut announcer,
        };
        assert_eq!(c.choose_name(&mut console), Choice::Ready);
        c.choose_move(&Throw::Empty, &mut console);
        assert!(input.prompts().is_empty());
    }

    #[test]
    fn score_and_reset() {
        let mut c = Computer::new(ScriptedRandomizer::new([2]));
        choose(&mut c, &Throw::Empty);
        c.increment_score();
        assert_eq!(c.score(), 1);
        c.reset();
        assert_eq!(c.score(), 0);
        assert_eq!(c.current_move(), None);
    }
}
