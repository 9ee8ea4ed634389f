//! Action requests produced by the mode handlers.
//!
//! Handlers never run external programs or open dialogs themselves. They mutate
//! [`AppState`](super::AppState) and return a list of [`Action`]s; the
//! [`Session`](super::Session) executes them in order, feeding any outcome back
//! into the state.
//!
//! # Example
//!
//! ```rust
//! use glocate::app::{handle_event, Action, AppState, Event};
//! use std::time::Instant;
//!
//! let mut state = AppState::default();
//! let actions = handle_event(&mut state, &Event::Char('f'), Instant::now());
//! assert_eq!(actions, vec![Action::Search]);
//! ```

/// Side effects requested by a handler for the current tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Run the search for `last_search_query` now, bypassing the debounce.
    Search,

    /// Recompute `filtered_results` from `raw_results` with the current
    /// directory filter and blacklist.
    Refilter,

    /// Open a path with the default opener.
    Open {
        /// Full path of the selected result.
        path: String,
    },

    /// Copy a path to the clipboard and report the outcome.
    Copy {
        /// Full path of the selected result.
        path: String,
    },

    /// Ask for a command and launch it with `path` appended.
    PromptOpenWith {
        /// Full path of the selected result.
        path: String,
    },

    /// Ask for a shell command and pipe the visible results through it.
    PromptFilter,

    /// Open the Blacklist Manager over the current blacklist, then refilter.
    ManageBlacklist,
}
