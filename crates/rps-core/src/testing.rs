//! Deterministic collaborators for driving a session in tests.

use std::collections::VecDeque;

use crate::announce::{Announcer, Standing};
use crate::cancel::CancelToken;
use crate::command::Reply;
use crate::error::{InputError, InputResult};
use crate::input::InputSource;
use crate::moves::Move;
use crate::strategy::Randomizer;

/// One scripted answer.
#[derive(Debug)]
pub enum Scripted {
    /// Answer a text prompt.
    Text(String),
    /// Answer a number prompt.
    Number(i64),
    /// Confirm the exit command: raises cancellation and replies `Exit`.
    Exit,
    /// Fail the prompt.
    Fail(InputError),
}

impl Scripted {
    /// A text answer.
    pub fn text(s: impl Into<String>) -> Self {
        Self::Text(s.into())
    }

    /// A number answer.
    pub fn number(n: i64) -> Self {
        Self::Number(n)
    }

    /// A failed prompt.
    pub fn fail(err: InputError) -> Self {
        Self::Fail(err)
    }
}

/// Input that replays a fixed script, then behaves like a closed stream.
#[derive(Debug)]
pub struct ScriptedInput {
    script: VecDeque<Scripted>,
    cancel: CancelToken,
    prompts: Vec<String>,
}

impl ScriptedInput {
    /// Replay `script`, raising `cancel` on exit or when the script runs out.
    pub fn new(script: impl IntoIterator<Item = Scripted>, cancel: CancelToken) -> Self {
        Self {
            script: script.into_iter().collect(),
            cancel,
            prompts: Vec::new(),
        }
    }

    /// Every prompt shown so far.
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    /// Whether every scripted answer was consumed.
    pub fn is_exhausted(&self) -> bool {
        self.script.is_empty()
    }

    /// The token this input raises.
    pub fn cancel_token(&self) -> &CancelToken {
        &self.cancel
    }

    fn next(&mut self, prompt: &str) -> Option<Scripted> {
        self.prompts.push(prompt.to_string());
        let next = self.script.pop_front();
        if next.is_none() {
            self.cancel.cancel();
        }
        next
    }
}

impl InputSource for ScriptedInput {
    fn request_text(&mut self, prompt: &str) -> InputResult<Reply<String>> {
        match self.next(prompt) {
            Some(Scripted::Text(s)) => Ok(Reply::Value(s)),
            Some(Scripted::Number(n)) => Err(InputError::NotAMenuOption(n)),
            Some(Scripted::Exit) => {
                self.cancel.cancel();
                Ok(Reply::Exit)
            }
            Some(Scripted::Fail(err)) => Err(err),
            None => Err(InputError::Closed),
        }
    }

    fn request_number(&mut self, prompt: &str) -> InputResult<Reply<i64>> {
        match self.next(prompt) {
            Some(Scripted::Number(n)) => Ok(Reply::Value(n)),
            Some(Scripted::Text(s)) => Err(InputError::NotANumber(s)),
            Some(Scripted::Exit) => {
                self.cancel.cancel();
                Ok(Reply::Exit)
            }
            Some(Scripted::Fail(err)) => Err(err),
            None => Err(InputError::Closed),
        }
    }
}

/// A notification captured by [`RecordingAnnouncer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Announcement {
    /// Screen cleared.
    Clear,
    /// Scoreboard shown: `(name, score)` per participant.
    RoundScore {
        /// Names and scores, in seating order.
        scores: Vec<(String, u32)>,
        /// Points needed to win.
        winning_score: u32,
    },
    /// Moves revealed, in seating order.
    Reveal(Vec<(String, Option<Move>)>),
    /// Round winner.
    RoundWinner {
        /// Winning move.
        winning_move: Move,
        /// Losing move.
        losing_move: Move,
        /// Winner name.
        winner: String,
    },
    /// Drawn round.
    Draw,
    /// Game winner.
    GameWinner(String),
    /// Re-prompt message.
    InvalidInput(String),
}

/// Display that records every notification.
#[derive(Debug, Default)]
pub struct RecordingAnnouncer {
    /// Everything announced so far, in order.
    pub events: Vec<Announcement>,
}

impl RecordingAnnouncer {
    /// Number of recorded events matching `pred`.
    pub fn count(&self, pred: impl Fn(&Announcement) -> bool) -> usize {
        self.events.iter().filter(|e| pred(e)).count()
    }

    /// Game winners announced so far.
    pub fn game_winners(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|e| match e {
                Announcement::GameWinner(name) => Some(name.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Announcer for RecordingAnnouncer {
    fn clear(&mut self) {
        self.events.push(Announcement::Clear);
    }

    fn round_score(&mut self, standings: &[Standing<'_>], winning_score: u32) {
        self.events.push(Announcement::RoundScore {
            scores: standings
                .iter()
                .map(|s| (s.name.to_string(), s.score))
                .collect(),
            winning_score,
        });
    }

    fn reveal(&mut self, standings: &[Standing<'_>]) {
        self.events.push(Announcement::Reveal(
            standings
                .iter()
                .map(|s| (s.name.to_string(), s.last_move))
                .collect(),
        ));
    }

    fn round_winner(&mut self, winning_move: Move, losing_move: Move, winner: &str) {
        self.events.push(Announcement::RoundWinner {
            winning_move,
            losing_move,
            winner: winner.to_string(),
        });
    }

    fn draw(&mut self) {
        self.events.push(Announcement::Draw);
    }

    fn game_winner(&mut self, winner: &str) {
        self.events.push(Announcement::GameWinner(winner.to_string()));
    }

    fn invalid_input(&mut self, message: &str) {
        self.events.push(Announcement::InvalidInput(message.to_string()));
    }
}

/// Randomness that replays fixed draws, then returns 0.
#[derive(Debug, Default)]
pub struct ScriptedRandomizer {
    draws: VecDeque<usize>,
    bounds: Vec<usize>,
}

impl ScriptedRandomizer {
    /// Replay `draws` in order.
    pub fn new(draws: impl IntoIterator<Item = usize>) -> Self {
        Self {
            draws: draws.into_iter().collect(),
            bounds: Vec::new(),
        }
    }

    /// How many draws were requested.
    pub fn calls(&self) -> usize {
        self.bounds.len()
    }

    /// The bound passed to each draw.
    pub fn bounds(&self) -> &[usize] {
        &self.bounds
    }
}

impl Randomizer for ScriptedRandomizer {
    fn next_index(&mut self, bound: usize) -> usize {
        self.bounds.push(bound);
        self.draws.pop_front().unwrap_or(0)
    }
}
