//! The three moves and the cyclic relation between them.

use std::fmt;

/// A move a participant can throw.
///
/// Only the cyclic beats-relation matters; the derived ordering is there so
/// moves can live in sorted collections. "No move yet" is `Option<Move>::None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Move {
    /// Beats scissors.
    Rock,
    /// Beats rock.
    Paper,
    /// Beats paper.
    Scissors,
}

impl Move {
    /// All moves, in menu order.
    pub const ALL: [Move; 3] = [Move::Rock, Move::Paper, Move::Scissors];

    /// Map a uniform draw in `0..3` to a move.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Map a menu choice (`1=rock, 2=paper, 3=scissors`) to a move.
    pub fn from_choice(choice: i64) -> Option<Self> {
        match choice {
            1 => Some(Self::Rock),
            2 => Some(Self::Paper),
            3 => Some(Self::Scissors),
            _ => None,
        }
    }

    /// The menu number for this move.
    pub fn choice(self) -> i64 {
        match self {
            Self::Rock => 1,
            Self::Paper => 2,
            Self::Scissors => 3,
        }
    }

    /// Whether `self` beats `other`.
    pub fn beats(self, other: Move) -> bool {
        other.beaten_by() == self
    }

    /// The move that beats `self`.
    pub fn beaten_by(self) -> Move {
        match self {
            Self::Rock => Self::Paper,
            Self::Paper => Self::Scissors,
            Self::Scissors => Self::Rock,
        }
    }

    /// The one move absent from the pair, or `None` if both are the same.
    pub fn missing(a: Move, b: Move) -> Option<Move> {
        match (a, b) {
            (Self::Rock, Self::Paper) | (Self::Paper, Self::Rock) => Some(Self::Scissors),
            (Self::Rock, Self::Scissors) | (Self::Scissors, Self::Rock) => Some(Self::Paper),
            (Self::Paper, Self::Scissors) | (Self::Scissors, Self::Paper) => Some(Self::Rock),
            (Self::Rock, Self::Rock)
            | (Self::Paper, Self::Paper)
            | (Self::Scissors, Self::Scissors) => None,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rock => write!(f, "Rock"),
            Self::Paper => write!(f, "Paper"),
            Self::Scissors => write!(f, "Scissors"),
        }
    }
}
