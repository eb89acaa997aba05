//! Terminal-backed collaborators for the game session.

pub mod display;
pub mod input;

pub use display::TerminalAnnouncer;
pub use input::TerminalInput;
