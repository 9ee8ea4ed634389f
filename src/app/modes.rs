//! Input mode state type for the application.
//!
//! The session is always in exactly one [`InputMode`]. The mode decides which
//! handler receives the next key, what the input bar shows, and which hint the
//! status line displays.
//!
//! # State Machine
//!
//! - **Search → Select**: Enter, only when there are filtered results
//! - **Select → Search**: Esc (clears the selection)
//! - **Search | Select → Command**: `/`
//! - **Command → Search**: Enter, Esc, or Backspace on the lone `/`

/// Current input handling mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Typing a search query. Every buffer change schedules or requests a search.
    #[default]
    Search,

    /// Typing a `/` command. The buffer always starts with `/`.
    Command,

    /// Navigating results with single-key actions (j/k, b, u, c, o, f).
    Select,
}

impl InputMode {
    /// Label shown before the input buffer in the input bar.
    ///
    /// Select mode has no editable buffer and therefore no prefix.
    #[must_use]
    pub const fn prompt_prefix(self) -> &'static str {
        match self {
            Self::Search => "Search: ",
            Self::Command => "Command: ",
            Self::Select => "",
        }
    }

    /// Keybinding hint displayed in the status bar when no message is active.
    #[must_use]
    pub const fn hint(self) -> &'static str {
        match self {
            Self::Search => "MODE: SEARCH | Press '/' for commands or Enter to select",
            Self::Command => "MODE: COMMAND | Enter to execute, ESC to cancel",
            Self::Select => {
                "j/k: Nav | c: Copy | b: Blacklist | u: Undo | o: Open with | f: Filter | /: Cmd | Enter: Open | ESC: Search"
            }
        }
    }
}
