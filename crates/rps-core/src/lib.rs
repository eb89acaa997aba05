//! Rock, paper & scissors against an adaptive computer.
//!
//! Provides the round resolver, the computer's move strategy, the two
//! participant kinds, and the session state machine that plays rounds to a
//! winning score and offers replays. Terminal input and output live behind
//! the [`InputSource`] and [`Announcer`] traits.

pub mod announce;
pub mod cancel;
pub mod command;
pub mod config;
pub mod error;
pub mod input;
pub mod moves;
pub mod player;
pub mod round;
pub mod session;
pub mod strategy;
pub mod throw;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use announce::{Announcer, Standing};
pub use cancel::{CancelToken, CancelWaiter, Release};
pub use command::{MenuCommand, Reply};
pub use config::GameConfig;
pub use error::{InputError, InputResult};
pub use input::InputSource;
pub use moves::Move;
pub use player::{Choice, Computer, Console, Human, Player};
pub use round::{Outcome, RoundResult, Showdown, resolve};
pub use session::{Phase, Session, SessionSummary, launch};
pub use strategy::{Randomizer, next_move};
pub use throw::Throw;
