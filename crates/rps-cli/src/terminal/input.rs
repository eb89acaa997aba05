//! Line-based prompts with the exit confirmation dialog.

use std::io::{BufRead, Write};

use colored::Colorize;
use tracing::debug;

use rps_core::{CancelToken, InputError, InputResult, InputSource, MenuCommand, Reply};

use crate::pacing::Pacing;

/// Reads answers line by line from `reader`, echoing prompts to `writer`.
///
/// Typing the exit command opens a confirmation prompt. A confirmed exit, or
/// the end of the input stream, raises the cancellation token.
pub struct TerminalInput<R, W> {
    reader: R,
    writer: W,
    cancel: CancelToken,
    pacing: Pacing,
    line: Vec<u8>,
}

impl<R: BufRead, W: Write> TerminalInput<R, W> {
    /// Create a terminal input.
    pub fn new(reader: R, writer: W, cancel: CancelToken, pacing: Pacing) -> Self {
        Self {
            reader,
            writer,
            cancel,
            pacing,
            line: Vec::new(),
        }
    }

    fn read_line(&mut self, prompt: &str) -> InputResult<String> {
        write!(self.writer, "{prompt}")?;
        self.writer.flush()?;

        self.line.clear();
        if self.reader.read_until(b'\n', &mut self.line)? == 0 {
            debug!("input closed");
            writeln!(self.writer)?;
            self.cancel.cancel();
            return Err(InputError::Closed);
        }
        // Undecodable bytes become U+FFFD so the answer is rejected, not fatal.
        Ok(String::from_utf8_lossy(&self.line).trim().to_string())
    }

    fn confirm(&mut self, command: MenuCommand) -> InputResult<()> {
        let answer = self.read_line(&format!("Are you sure you want to {command}: Y/n? "))?;
        match answer.to_lowercase().as_str() {
            "y" | "yes" => {
                writeln!(self.writer, "{}", "Bye bye...".red().bold())?;
                self.writer.flush()?;
                debug!(%command, "confirmed");
                self.cancel.cancel();
                Ok(())
            }
            _ => {
                self.pacing.pause(self.pacing.confirm);
                Err(InputError::ExitNotConfirmed)
            }
        }
    }
}

impl<R: BufRead, W: Write> InputSource for TerminalInput<R, W> {
    fn request_text(&mut self, prompt: &str) -> InputResult<Reply<String>> {
        let input = self.read_line(prompt)?;
        if input.is_empty() {
            return Err(InputError::EmptyInput);
        }
        match input.parse::<i64>() {
            Ok(n) => match MenuCommand::from_code(n) {
                Some(command) => self.confirm(command).map(|()| Reply::Exit),
                None => Err(InputError::NotAMenuOption(n)),
            },
            Err(_) => Ok(Reply::Value(input)),
        }
    }

    fn request_number(&mut self, prompt: &str) -> InputResult<Reply<i64>> {
        let input = self.read_line(prompt)?;
        let n = input
            .parse::<i64>()
            .map_err(|_| InputError::NotANumber(input.clone()))?;
        match MenuCommand::from_code(n) {
            Some(command) => self.confirm(command).map(|()| Reply::Exit),
            None => Ok(Reply::Value(n)),
        }
    }
}
