//! Round resolution.
//!
//! [`resolve`] is pure; [`apply`] performs the bookkeeping that follows a
//! resolved round: bumping the winner's score and rewriting the [`Throw`].

use tracing::debug;

use crate::moves::Move;
use crate::player::Player;
use crate::throw::Throw;

/// Result of comparing two moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Both sides threw the same move.
    Tie,
    /// The first move wins.
    FirstWins,
    /// The second move wins.
    SecondWins,
}

/// Decide a round between `first` and `second`.
pub fn resolve(first: Move, second: Move) -> Outcome {
    if first == second {
        Outcome::Tie
    } else if first.beats(second) {
        Outcome::FirstWins
    } else {
        Outcome::SecondWins
    }
}

/// Both moves of a round and how they compare.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Showdown {
    /// The first participant's move.
    pub first: Move,
    /// The second participant's move.
    pub second: Move,
    /// How `first` fares against `second`.
    pub outcome: Outcome,
}

impl Showdown {
    /// Compare two moves.
    pub fn new(first: Move, second: Move) -> Self {
        Self {
            first,
            second,
            outcome: resolve(first, second),
        }
    }
}

/// A resolved round as seen by the display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundResult {
    /// Nobody scored.
    Draw,
    /// Someone scored.
    Won {
        /// The winning move.
        winning_move: Move,
        /// The losing move.
        losing_move: Move,
        /// The winner's name.
        winner: String,
    },
}

/// Apply a showdown: increment the winner's score and update `throw`.
///
/// `first` and `second` are the participants who threw the showdown's moves,
/// in the same order. On a tie `throw` is cleared and no score changes.
pub fn apply<'p>(
    showdown: Showdown,
    first: &'p mut dyn Player,
    second: &'p mut dyn Player,
    throw: &mut Throw,
) -> RoundResult {
    let (winner, winning_move, losing_move) = match showdown.outcome {
        Outcome::Tie => {
            throw.clear();
            debug!(played = %showdown.first, "round drawn");
            return RoundResult::Draw;
        }
        Outcome::FirstWins => (first, showdown.first, showdown.second),
        Outcome::SecondWins => (second, showdown.second, showdown.first),
    };

    winner.increment_score();
    throw.record(winning_move, losing_move, winner.name());
    debug!(
        winner = winner.name(),
        %winning_move,
        %losing_move,
        score = winner.score(),
        "round won"
    );

    RoundResult::Won {
        winning_move,
        losing_move,
        winner: winner.name().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::Human;

    fn human(name: &str, mv: Move) -> Human {
        let mut h = Human::named(name);
        h.set_move(mv);
        h
    }

    #[test]
    fn ties() {
        for m in Move::ALL {
            assert_eq!(resolve(m, m), Outcome::Tie);
        }
    }

    #[test]
    fn first_wins() {
        assert_eq!(resolve(Move::Rock, Move::Scissors), Outcome::FirstWins);
        assert_eq!(resolve(Move::Paper, Move::Rock), Outcome::FirstWins);
        assert_eq!(resolve(Move::Scissors, Move::Paper), Outcome::FirstWins);
    }

    #[test]
    fn second_wins() {
        assert_eq!(resolve(Move::Scissors, Move::Rock), Outcome::SecondWins);
        assert_eq!(resolve(Move::Rock, Move::Paper), Outcome::SecondWins);
        assert_eq!(resolve(Move::Paper, Move::Scissors), Outcome::SecondWins);
    }

    #[test]
    fn apply_tie_clears_throw() {
        let mut a = human("PLAYER 1", Move::Rock);
        let mut b = human("PLAYER 2", Move::Rock);
        let mut throw = Throw::decided(Move::Paper, Move::Scissors, "PLAYER 1");

        let result = apply(Showdown::new(Move::Rock, Move::Rock), &mut a, &mut b, &mut throw);

        assert_eq!(result, RoundResult::Draw);
        assert!(throw.is_empty());
        assert_eq!(a.score(), 0);
        assert_eq!(b.score(), 0);
    }

    #[test]
    fn apply_first_wins() {
        let mut a = human("PLAYER 1", Move::Rock);
        let mut b = human("PLAYER 2", Move::Scissors);
        let mut throw = Throw::Empty;

        let showdown = Showdown::new(Move::Rock, Move::Scissors);
        assert_eq!(showdown.outcome, Outcome::FirstWins);
        let result = apply(showdown, &mut a, &mut b, &mut throw);

        assert_eq!(throw, Throw::decided(Move::Rock, Move::Scissors, "PLAYER 1"));
        assert_eq!(a.score(), 1);
        assert_eq!(b.score(), 0);
        assert!(matches!(result, RoundResult::Won { ref winner, .. } if winner == "PLAYER 1"));
    }

    #[test]
    fn apply_second_wins() {
        let mut a = human("PLAYER 1", Move::Paper);
        let mut b = human("PLAYER 2", Move::Scissors);
        let mut throw = Throw::decided(Move::Rock, Move::Scissors, "PLAYER 1");

        apply(Showdown::new(Move::Paper, Move::Scissors), &mut a, &mut b, &mut throw);

        assert_eq!(throw, Throw::decided(Move::Scissors, Move::Paper, "PLAYER 2"));
        assert_eq!(a.score(), 0);
        assert_eq!(b.score(), 1);
    }

    #[test]
    fn apply_uses_showdown_moves() {
        let mut a = Human::named("PLAYER 1");
        let mut b = Human::named("PLAYER 2");
        let mut throw = Throw::Empty;

        let result = apply(Showdown::new(Move::Scissors, Move::Paper), &mut a, &mut b, &mut throw);

        assert_eq!(
            result,
            RoundResult::Won {
                winning_move: Move::Scissors,
                losing_move: Move::Paper,
                winner: "PLAYER 1".into(),
            }
        );
        assert_eq!(throw, Throw::decided(Move::Scissors, Move::Paper, "PLAYER 1"));
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        fn any_move() -> impl Strategy<Value = Move> {
            prop::sample::select(Move::ALL.to_vec())
        }

        proptest! {
            #[test]
            fn exactly_one_winner_for_distinct_moves(a in any_move(), b in any_move()) {
                let outcome = resolve(a, b);
                if a == b {
                    prop_assert_eq!(outcome, Outcome::Tie);
                } else {
                    let expected = if a.beats(b) { Outcome::FirstWins } else { Outcome::SecondWins };
                    prop_assert_eq!(outcome, expected);
                    prop_assert_ne!(a.beats(b), b.beats(a));
                }
            }

            #[test]
            fn resolve_is_symmetric(a in any_move(), b in any_move()) {
                let swapped = match resolve(b, a) {
                    Outcome::Tie => Outcome::Tie,
                    Outcome::FirstWins => Outcome::SecondWins,
                    Outcome::SecondWins => Outcome::FirstWins,
                };
                prop_assert_eq!(resolve(a, b), swapped);
            }

            #[test]
            fn tie_always_empties_throw(w in any_move(), l in any_move(), m in any_move()) {
                let mut a = human("A", m);
                let mut b = human("B", m);
                let mut throw = Throw::decided(w, l, "A");
                apply(Showdown::new(m, m), &mut a, &mut b, &mut throw);
                prop_assert!(throw.is_empty());
            }
        }
    }
}
