//! Opening screen.

use std::io::{self, Write};

use colored::Colorize;
use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::terminal::{self, Clear, ClearType};

use crate::pacing::Pacing;

const FALLBACK_WIDTH: u16 = 80;

const LOGO: &str = r"
    _______         _______          _______
---'   ____)    ---'    ____)____ ---'   ____)____
      (_____)             ______)           ______)
      (_____)            _______)        __________)
      (____)            _______)        (____)
---.__(___)      ---.__________)   ---.__(___)
";

const SLOGAN: &str = "Let's play ROCK, PAPER & SCISSORS !!!";

/// Pad `text` so it sits in the middle of a `width`-column line.
fn center(text: &str, width: u16) -> String {
    let len = text.chars().count();
    let padding = usize::from(width).saturating_sub(len) / 2;
    format!("{}{text}", " ".repeat(padding))
}

/// Draw the logo and slogan, then clear the screen again.
pub fn opening(out: &mut impl Write, pacing: &Pacing) -> io::Result<()> {
    let width = terminal::size().map(|(w, _)| w).unwrap_or(FALLBACK_WIDTH);
    if pacing.animate {
        execute!(out, Clear(ClearType::All), MoveTo(0, 0))?;
    }

    let logo_width = LOGO.lines().map(|l| l.chars().count()).max().unwrap_or(0);
    for line in LOGO.lines() {
        let padded = format!("{line:<logo_width$}");
        writeln!(out, "{}", center(&padded, width).red())?;
        out.flush()?;
        pacing.pause(pacing.tick);
    }

    let rule = "=".repeat(SLOGAN.len());
    for line in [rule.as_str(), SLOGAN, rule.as_str()] {
        writeln!(out, "{}", center(line, width).red())?;
    }
    out.flush()?;

    pacing.pause(pacing.banner);
    if pacing.animate {
        execute!(out, Clear(ClearType::All), MoveTo(0, 0))?;
    }
    Ok(())
}
