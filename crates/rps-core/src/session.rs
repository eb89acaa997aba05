//! The session state machine.
//!
//! ```text
//! AwaitingConfig -> InRound -> RoundResolved -> InRound | GameOver
//! GameOver -> AwaitingReplay -> AwaitingConfig | Terminated
//! ```
//!
//! Any phase that waits on the human can also jump straight to `Terminated`
//! when the human exits. Cancellation is checked right after every blocking
//! prompt and right after every resolved round, so nothing is scored or shown
//! once it has been raised. Replay is a loop back to `AwaitingConfig`.

use tracing::{debug, info, warn};

use crate::announce::Announcer;
use crate::cancel::CancelToken;
use crate::command::{MenuCommand, Reply};
use crate::config::GameConfig;
use crate::input::InputSource;
use crate::player::{Choice, Computer, Console, Human, Player};
use crate::round::{self, RoundResult, Showdown};
use crate::strategy::Randomizer;
use crate::throw::Throw;

/// Where the session is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Asking for the winning score.
    AwaitingConfig,
    /// Collecting moves for a round.
    InRound,
    /// A round was decided and awaits bookkeeping.
    RoundResolved(Showdown),
    /// Someone reached the winning score.
    GameOver,
    /// Asking whether to play again.
    AwaitingReplay,
    /// Finished; no further transitions.
    Terminated,
}

/// What happened over the lifetime of a session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionSummary {
    /// Games played to a winner.
    pub games_completed: u32,
    /// Rounds resolved across all games.
    pub rounds_played: u32,
    /// Winner of the most recent completed game.
    pub last_winner: Option<String>,
}

/// A running game between two participants.
pub struct Session<I, A> {
    first: Box<dyn Player>,
    second: Box<dyn Player>,
    throw: Throw,
    default_winning_score: u32,
    winning_score: u32,
    input: I,
    announcer: A,
    cancel: CancelToken,
    phase: Phase,
    summary: SessionSummary,
}

impl<I: InputSource, A: Announcer> Session<I, A> {
    /// Seat two participants. `first` moves first in every round.
    pub fn new(
        config: &GameConfig,
        first: Box<dyn Player>,
        second: Box<dyn Player>,
        input: I,
        announcer: A,
        cancel: CancelToken,
    ) -> Self {
        Self {
            first,
            second,
            throw: Throw::Empty,
            default_winning_score: config.winning_score.max(1),
            winning_score: config.winning_score.max(1),
            input,
            announcer,
            cancel,
            phase: Phase::AwaitingConfig,
            summary: SessionSummary::default(),
        }
    }

    /// The current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The previous round's outcome as the computer sees it.
    pub fn throw(&self) -> &Throw {
        &self.throw
    }

    /// Points needed to win the current game.
    pub fn winning_score(&self) -> u32 {
        self.winning_score
    }

    /// Both participants, in seating order.
    pub fn players(&self) -> [&dyn Player; 2] {
        [self.first.as_ref(), self.second.as_ref()]
    }

    /// The input collaborator.
    pub fn input(&self) -> &I {
        &self.input
    }

    /// The display collaborator.
    pub fn announcer(&self) -> &A {
        &self.announcer
    }

    /// Totals so far.
    pub fn summary(&self) -> &SessionSummary {
        &self.summary
    }

    /// Drive the session until it terminates.
    pub fn run(&mut self) -> SessionSummary {
        info!(
            first = self.first.name(),
            second = self.second.name(),
            "session started"
        );
        while self.step() != Phase::Terminated {}
        info!(
            games = self.summary.games_completed,
            rounds = self.summary.rounds_played,
            "session terminated"
        );
        self.summary.clone()
    }

    /// Perform one transition and return the new phase.
    pub fn step(&mut self) -> Phase {
        let next = match self.phase {
            Phase::AwaitingConfig => self.configure(),
            Phase::InRound => self.play_round(),
            Phase::RoundResolved(showdown) => self.settle(showdown),
            Phase::GameOver => self.finish_game(),
            Phase::AwaitingReplay => self.offer_replay(),
            Phase::Terminated => Phase::Terminated,
        };
        if next == Phase::Terminated && self.phase != Phase::Terminated {
            debug!(from = ?self.phase, "terminating");
            self.cancel.cancel();
        }
        self.phase = next;
        next
    }

    fn configure(&mut self) -> Phase {
        self.winning_score = self.default_winning_score;
        let prompt = format!(
            "Enter the number of points a player needs to win (default: {}) or type {} to exit: ",
            self.default_winning_score,
            MenuCommand::Exit.code()
        );
        let reply = self.input.request_number(&prompt);
        if self.cancel.is_cancelled() {
            return Phase::Terminated;
        }

        match reply {
            Ok(Reply::Exit) => return Phase::Terminated,
            Ok(Reply::Value(n)) if n > 0 => {
                self.winning_score = u32::try_from(n).unwrap_or(u32::MAX);
            }
            Ok(Reply::Value(n)) => debug!(n, "non-positive winning score, using default"),
            Err(err) if !err.is_recoverable() => return Phase::Terminated,
            Err(err) => debug!(%err, "no winning score given, using default"),
        }

        debug!(winning_score = self.winning_score, "game configured");
        self.announcer.clear();
        Phase::InRound
    }

    fn play_round(&mut self) -> Phase {
        self.announcer.round_score(
            &[self.first.standing(), self.second.standing()],
            self.winning_score,
        );

        let mut console = Console {
            input: &mut self.input,
            announcer: &mut self.announcer,
        };
        for player in [&mut self.first, &mut self.second] {
            let choice = player.choose_move(&self.throw, &mut console);
            if choice == Choice::Exit || self.cancel.is_cancelled() {
                debug!(player = player.name(), "round abandoned");
                return Phase::Terminated;
            }
        }

        let (Some(a), Some(b)) = (self.first.current_move(), self.second.current_move()) else {
            warn!("participant reported ready without a move");
            return Phase::Terminated;
        };

        self.announcer
            .reveal(&[self.first.standing(), self.second.standing()]);
        Phase::RoundResolved(Showdown::new(a, b))
    }

    fn settle(&mut self, showdown: Showdown) -> Phase {
        let result = round::apply(
            showdown,
            self.first.as_mut(),
            self.second.as_mut(),
            &mut self.throw,
        );
        self.summary.rounds_played += 1;

        match result {
            RoundResult::Draw => self.announcer.draw(),
            RoundResult::Won {
                winning_move,
                losing_move,
                winner,
            } => self.announcer.round_winner(winning_move, losing_move, &winner),
        }

        if self.cancel.is_cancelled() {
            return Phase::Terminated;
        }
        if self.first.score() >= self.winning_score || self.second.score() >= self.winning_score {
            Phase::GameOver
        } else {
            Phase::InRound
        }
    }

    fn finish_game(&mut self) -> Phase {
        let winner = if self.first.score() >= self.winning_score {
            self.first.name()
        } else {
            self.second.name()
        }
        .to_string();

        info!(
            %winner,
            first = self.first.score(),
            second = self.second.score(),
            "game over"
        );
        self.announcer.game_winner(&winner);
        self.summary.games_completed += 1;
        self.summary.last_winner = Some(winner);
        Phase::AwaitingReplay
    }

    fn offer_replay(&mut self) -> Phase {
        let prompt = format!(
            "Type {} to exit or any key to play again: ",
            MenuCommand::Exit.code()
        );
        let reply = self.input.request_number(&prompt);
        if self.cancel.is_cancelled() {
            return Phase::Terminated;
        }

        match reply {
            Ok(Reply::Exit) => return Phase::Terminated,
            Err(err) if !err.is_recoverable() => return Phase::Terminated,
            // Anything else, including invalid answers, means play again.
            _ => {}
        }

        self.first.reset();
        self.second.reset();
        self.throw.clear();
        self.announcer.clear();
        debug!("replaying");
        Phase::AwaitingConfig
    }
}

/// Ask the human for a name, then play until they leave.
///
/// Returns `None` without playing when no name is given. The cancellation
/// token is always raised on return.
pub fn launch<I, A, R>(
    config: &GameConfig,
    mut input: I,
    mut announcer: A,
    rng: R,
    cancel: CancelToken,
) -> Option<SessionSummary>
where
    I: InputSource,
    A: Announcer,
    R: Randomizer + 'static,
{
    let mut human = Human::new();
    let choice = human.choose_name(&mut Console {
        input: &mut input,
        announcer: &mut announcer,
    });
    if choice == Choice::Exit || human.name().is_empty() || cancel.is_cancelled() {
        info!("no name given, leaving");
        cancel.cancel();
        return None;
    }
    announcer.clear();

    let computer = Computer::named(config.computer_name.clone(), rng);
    let mut session = Session::new(
        config,
        Box::new(human),
        Box::new(computer),
        input,
        announcer,
        cancel,
    );
    Some(session.run())
}
