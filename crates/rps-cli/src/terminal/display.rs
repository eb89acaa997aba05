//! Scoreboard and round announcements on the terminal.

use std::io::{self, Write};

use colored::Colorize;
use comfy_table::{CellAlignment, ContentArrangement, Table};
use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::terminal::{Clear, ClearType};
use tracing::warn;

use rps_core::{Announcer, Move, Standing};

use crate::pacing::Pacing;

const SPINNER_WIDTH: usize = 30;

/// Writes the game's notifications to `out`.
pub struct TerminalAnnouncer<W> {
    out: W,
    pacing: Pacing,
}

impl<W: Write> TerminalAnnouncer<W> {
    /// Create an announcer.
    pub fn new(out: W, pacing: Pacing) -> Self {
        Self { out, pacing }
    }

    fn report(result: io::Result<()>) {
        if let Err(err) = result {
            warn!(%err, "failed to write to terminal");
        }
    }

    fn spinner(&mut self) -> io::Result<()> {
        for i in 0..SPINNER_WIDTH {
            write!(
                self.out,
                "\r{}{}",
                "⣿".repeat(i),
                "|".repeat(SPINNER_WIDTH - i)
            )?;
            self.out.flush()?;
            self.pacing.pause(self.pacing.tick);
        }
        writeln!(self.out)
    }

    fn write_scoreboard(&mut self, table: &Table, winning_score: u32) -> io::Result<()> {
        writeln!(self.out, "winning score = {winning_score}")?;
        writeln!(self.out, "{table}")?;
        self.out.flush()
    }

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.out, "{line}")?;
        self.out.flush()
    }
}

/// Two-column scoreboard: names, scores, then the latest moves.
pub fn score_table(standings: &[Standing<'_>]) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(
        standings
            .iter()
            .map(|s| format!("   {}   ", s.name))
            .collect::<Vec<_>>(),
    );
    table.add_row(
        standings
            .iter()
            .map(|s| s.score.to_string())
            .collect::<Vec<_>>(),
    );
    table.add_row(
        standings
            .iter()
            .map(|s| s.last_move.map(|m| m.to_string()).unwrap_or_default())
            .collect::<Vec<_>>(),
    );
    for column in table.column_iter_mut() {
        column.set_cell_alignment(CellAlignment::Center);
    }
    table
}

impl<W: Write> Announcer for TerminalAnnouncer<W> {
    fn clear(&mut self) {
        if self.pacing.animate {
            Self::report(execute!(self.out, Clear(ClearType::All), MoveTo(0, 0)));
        }
    }

    fn round_score(&mut self, standings: &[Standing<'_>], winning_score: u32) {
        self.clear();
        let table = score_table(standings);
        let written = self.write_scoreboard(&table, winning_score);
        Self::report(written);
    }

    fn reveal(&mut self, standings: &[Standing<'_>]) {
        if self.pacing.animate {
            let spun = self.spinner();
            Self::report(spun);
        }
        for s in standings {
            let mv = s.last_move.map(|m| m.to_string()).unwrap_or_default();
            let line = format!("{} plays {mv}", s.name);
            Self::report(self.write_line(&line));
        }
    }

    fn round_winner(&mut self, winning_move: Move, losing_move: Move, winner: &str) {
        let line = format!(
            "{winning_move} beats {losing_move}, {} wins the round!",
            winner.red().bold()
        );
        Self::report(self.write_line(&line));
        self.pacing.pause(self.pacing.round);
    }

    fn draw(&mut self) {
        Self::report(self.write_line("It's a draw!"));
        self.pacing.pause(self.pacing.round);
    }

    fn game_winner(&mut self, winner: &str) {
        let line = format!("\n{} is the WINNER of the game!!!\n", winner.red().bold());
        Self::report(self.write_line(&line));
    }

    fn invalid_input(&mut self, message: &str) {
        Self::report(self.write_line(message));
        self.pacing.pause(self.pacing.settle);
    }
}
