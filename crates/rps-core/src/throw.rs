//! The record of the previous round's decisive outcome.

use crate::moves::Move;

/// What the computer remembers about the previous round.
///
/// `Empty` before the first round, after a tie, and after a replay reset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Throw {
    /// No decisive previous round.
    #[default]
    Empty,
    /// The previous round had a winner.
    Decided {
        /// The move that won.
        winning_move: Move,
        /// The move that lost.
        losing_move: Move,
        /// Name of the participant who won.
        winner: String,
    },
}

impl Throw {
    /// Build a decided throw.
    pub fn decided(winning_move: Move, losing_move: Move, winner: impl Into<String>) -> Self {
        Self::Decided {
            winning_move,
            losing_move,
            winner: winner.into(),
        }
    }

    /// Whether the record holds no decisive round.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// The winning move of the previous round, if any.
    pub fn winning_move(&self) -> Option<Move> {
        match self {
            Self::Empty => None,
            Self::Decided { winning_move, .. } => Some(*winning_move),
        }
    }

    /// The losing move of the previous round, if any.
    pub fn losing_move(&self) -> Option<Move> {
        match self {
            Self::Empty => None,
            Self::Decided { losing_move, .. } => Some(*losing_move),
        }
    }

    /// The previous winner's name, empty after a tie or before any round.
    pub fn winner(&self) -> &str {
        match self {
            Self::Empty => "",
            Self::Decided { winner, .. } => winner,
        }
    }

    /// Overwrite with a decisive outcome.
    pub fn record(&mut self, winning_move: Move, losing_move: Move, winner: &str) {
        *self = Self::decided(winning_move, losing_move, winner);
    }

    /// Reset every field to its empty state.
    pub fn clear(&mut self) {
        *self = Self::Empty;
    }
}
