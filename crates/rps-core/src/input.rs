//! The input collaborator seam.

use crate::command::Reply;
use crate::error::InputResult;

/// Where the human's answers come from.
///
/// Implementations own the exit dialog: when a reply equals
/// [`MenuCommand::Exit`](crate::MenuCommand::Exit) and the human confirms,
/// they raise the session's [`CancelToken`](crate::CancelToken) and return
/// [`Reply::Exit`].
pub trait InputSource {
    /// Ask for a line of text.
    ///
    /// Empty lines are [`InputError::EmptyInput`](crate::InputError::EmptyInput);
    /// numbers other than a menu command are
    /// [`InputError::NotAMenuOption`](crate::InputError::NotAMenuOption).
    fn request_text(&mut self, prompt: &str) -> InputResult<Reply<String>>;

    /// Ask for an integer.
    ///
    /// Non-numeric answers are
    /// [`InputError::NotANumber`](crate::InputError::NotANumber); any number
    /// other than a menu command is returned as-is.
    fn request_number(&mut self, prompt: &str) -> InputResult<Reply<i64>>;
}

impl<T: InputSource + ?Sized> InputSource for &mut T {
    fn request_text(&mut self, prompt: &str) -> InputResult<Reply<String>> {
        (**self).request_text(prompt)
    }

    fn request_number(&mut self, prompt: &str) -> InputResult<Reply<i64>> {
        (**self).request_number(prompt)
    }
}
