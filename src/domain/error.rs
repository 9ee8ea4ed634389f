//! Error types for glocate.
//!
//! This module defines the centralized error type [`GlocateError`] and a type alias
//! [`Result`] used throughout the crate. All errors are implemented using the
//! `thiserror` crate for automatic `Error` trait implementation.
//!
//! Most variants never reach the user as a failure: the session folds gateway
//! errors into pseudo-results or status messages. Only terminal and configuration
//! errors are fatal, and those are reported by the binary before exiting.

use thiserror::Error;

/// The main error type for glocate operations.
///
/// # Examples
///
/// ```
/// use glocate::GlocateError;
///
/// let err = GlocateError::CommandNotFound { program: "locate".to_string() };
/// assert_eq!(
///     err.to_string(),
///     "'locate' command not found. Please ensure it's installed."
/// );
/// ```
#[derive(Debug, Error)]
pub enum GlocateError {
    /// Filesystem or pipe I/O failed.
    ///
    /// Wraps errors from standard library I/O operations, including failures to
    /// write a child process's stdin or read its output.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// An external program could not be found on `PATH`.
    #[error("'{program}' command not found. Please ensure it's installed.")]
    CommandNotFound {
        /// Program that failed to spawn.
        program: String,
    },

    /// An external program ran but exited with a non-zero status.
    ///
    /// The message is the program's trimmed stderr, which is what the user sees.
    #[error("{stderr}")]
    CommandFailed {
        /// Program that failed.
        program: String,
        /// Trimmed standard error output.
        stderr: String,
    },

    /// Configuration is invalid or unreadable.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Theme file could not be read or parsed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// The terminal could not be set up, read or drawn to.
    #[error("Terminal error: {0}")]
    Terminal(String),
}

impl GlocateError {
    /// Maps a spawn failure to [`GlocateError::CommandNotFound`] when the program is
    /// missing, keeping every other I/O failure as [`GlocateError::Io`].
    #[must_use]
    pub fn from_spawn(program: &str, err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::NotFound {
            Self::CommandNotFound {
                program: program.to_string(),
            }
        } else {
            Self::Io(err)
        }
    }
}

/// A specialized `Result` type for glocate operations.
pub type Result<T> = std::result::Result<T, GlocateError>;
