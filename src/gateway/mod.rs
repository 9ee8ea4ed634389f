//! External Process Gateway.
//!
//! Every interaction with the outside world beyond the terminal goes through the
//! [`Gateway`] trait: the index search, the user's ad-hoc filter commands, the
//! clipboard, and the file openers. The session only sees typed results, so the
//! whole state machine can be driven in tests by a fake gateway.
//!
//! # Contracts
//!
//! - **search**: an empty query returns no results without running anything.
//!   Failures are returned as errors; the session turns them into a single
//!   pseudo-result line.
//! - **filter**: input lines are joined with `\n` and piped to the command's
//!   stdin. Output is trimmed and split into lines.
//! - **copy**: reports success as a boolean only.
//! - **open**: fire-and-forget, failures are discarded.
//! - **open_with**: fire-and-forget once started, but a failure to start is
//!   reported so the session can show it.
//!
//! All calls are synchronous. The loop is unresponsive while one runs, which is
//! acceptable because they are expected to be fast local utilities.

mod process;

pub use process::ProcessGateway;

use crate::domain::Result;

/// Invokes the external programs the session depends on.
pub trait Gateway {
    /// Searches the file index for `query`, returning at most `limit` paths in
    /// the order the index reports them.
    ///
    /// # Errors
    ///
    /// Returns [`GlocateError::CommandNotFound`](crate::GlocateError::CommandNotFound)
    /// when the search program is missing and
    /// [`GlocateError::CommandFailed`](crate::GlocateError::CommandFailed) on a
    /// non-zero exit.
    fn search(&mut self, query: &str, limit: usize) -> Result<Vec<String>>;

    /// Pipes `input` through the shell command `command` and returns its output lines.
    ///
    /// # Errors
    ///
    /// Returns an error if the shell cannot be started, the pipe fails, or the
    /// command exits non-zero.
    fn filter(&mut self, command: &str, input: &[String]) -> Result<Vec<String>>;

    /// Copies `text` to the clipboard. Returns `true` on success.
    fn copy(&mut self, text: &str) -> bool;

    /// Name of the clipboard program, for failure messages.
    fn copy_program(&self) -> &str;

    /// Opens `path` with the default opener, discarding any failure.
    fn open(&mut self, path: &str);

    /// Starts `command` (split on whitespace) with `path` appended as the final argument.
    ///
    /// # Errors
    ///
    /// Returns an error if the command is empty or the program cannot be started.
    fn open_with(&mut self, command: &str, path: &str) -> Result<()>;
}
