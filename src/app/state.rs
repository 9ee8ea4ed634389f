//! Application state management.
//!
//! This module defines [`AppState`], the Session State: the single mutable
//! aggregate holding the mode, input buffers, result sets, selection, scroll
//! position, tunable limits, filters, blacklist with its undo stack, the transient
//! status message, and debounce bookkeeping. Only the mode handlers, the debounce
//! check and the session tick mutate it, always through `&mut AppState`.
//!
//! # Selection
//!
//! `selected_index` is `None` when nothing is selected. Every method that touches
//! the selection or `filtered_results` keeps it inside
//! `0..filtered_results.len()`. An empty result list never carries a selection.
//!
//! # Example
//!
//! ```rust
//! use glocate::app::AppState;
//!
//! let mut state = AppState::default();
//! state.apply_search_results(vec!["/a/b".into(), "/x/y".into()]);
//! state.blacklist.push("/a".into());
//! state.refilter();
//! assert_eq!(state.filtered_results, vec!["/x/y".to_string()]);
//! ```

use super::debounce::Debounce;
use super::filter::filter_results;
use super::modes::InputMode;
use crate::domain::Result;
use crate::ui::theme::Theme;
use std::time::{Duration, Instant};

/// Default maximum number of results requested from the search tool.
pub const DEFAULT_RESULT_LIMIT: usize = 50;

/// Default result limit above which keystrokes are debounced.
pub const DEFAULT_DELAY_LIMIT: usize = 1000;

/// Default debounce delay in milliseconds.
pub const DEFAULT_SEARCH_DELAY_MS: u64 = 1000;

/// Lifetime of informational status messages.
pub const STATUS_INFO: Duration = Duration::from_secs(2);

/// Lifetime of status messages reporting a failed copy or launch.
pub const STATUS_FAILURE: Duration = Duration::from_secs(3);

/// Lifetime of status messages reporting a failed ad-hoc filter.
pub const STATUS_FILTER_FAILURE: Duration = Duration::from_secs(4);

/// Transient text shown in the status bar until its deadline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    /// Message text.
    pub text: String,
    /// Instant after which the message is no longer shown.
    pub expires_at: Instant,
}

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Current input handling mode.
    pub input_mode: InputMode,

    /// Live text of the Search or Command input bar.
    pub input_buffer: String,

    /// Text last submitted as a search.
    ///
    /// Restored into `input_buffer` when leaving Command mode.
    pub last_search_query: String,

    /// Paths returned by the last search, in the search tool's order.
    pub raw_results: Vec<String>,

    /// Ordered subsequence of `raw_results` after filters (or of the previous
    /// `filtered_results` after an ad-hoc filter).
    pub filtered_results: Vec<String>,

    /// Index of the first visible row.
    pub scroll_pos: usize,

    /// Index into `filtered_results` of the current selection.
    pub selected_index: Option<usize>,

    /// Maximum number of results requested per search.
    pub result_limit: usize,

    /// Result limit above which keystrokes are debounced.
    pub delay_limit: usize,

    /// Quiet period before a debounced search fires.
    pub search_delay_ms: u64,

    /// Absolute directory prefix results must start with; empty disables it.
    pub filter_dir: String,

    /// Directory prefixes excluded from results.
    pub blacklist: Vec<String>,

    /// Blacklist additions made with `b`, most recent last.
    pub undo_stack: Vec<String>,

    /// Transient status overlay.
    pub status: Option<StatusMessage>,

    /// Pending-search bookkeeping.
    pub debounce: Debounce,

    /// Color scheme for rendering.
    pub theme: Theme,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Theme::default())
    }
}

impl AppState {
    /// Creates a fresh session in Search mode with default limits.
    #[must_use]
    pub fn new(theme: Theme) -> Self {
        Self {
            input_mode: InputMode::Search,
            input_buffer: String::new(),
            last_search_query: String::new(),
            raw_results: vec![],
            filtered_results: vec![],
            scroll_pos: 0,
            selected_index: None,
            result_limit: DEFAULT_RESULT_LIMIT,
            delay_limit: DEFAULT_DELAY_LIMIT,
            search_delay_ms: DEFAULT_SEARCH_DELAY_MS,
            filter_dir: String::new(),
            blacklist: vec![],
            undo_stack: vec![],
            status: None,
            debounce: Debounce::default(),
            theme,
        }
    }

    /// Returns the selected path, if the selection points at a result.
    #[must_use]
    pub fn selected_path(&self) -> Option<&str> {
        self.selected_index
            .and_then(|idx| self.filtered_results.get(idx))
            .map(String::as_str)
    }

    /// Moves the selection down by one, stopping at the last result.
    ///
    /// No-op on an empty result list. Without a selection, selects the first row.
    pub fn move_selection_down(&mut self) {
        let Some(last) = self.filtered_results.len().checked_sub(1) else {
            return;
        };
        self.selected_index = Some(self.selected_index.map_or(0, |idx| (idx + 1).min(last)));
    }

    /// Moves the selection up by one, stopping at the first result.
    ///
    /// No-op on an empty result list. Without a selection, selects the first row.
    pub fn move_selection_up(&mut self) {
        if self.filtered_results.is_empty() {
            return;
        }
        self.selected_index = Some(self.selected_index.map_or(0, |idx| idx.saturating_sub(1)));
    }

    /// Replaces the raw results with a fresh search outcome and refilters.
    ///
    /// Scrolling restarts at the top.
    pub fn apply_search_results(&mut self, results: Vec<String>) {
        self.scroll_pos = 0;
        self.raw_results = results;
        self.refilter();
    }

    /// Recomputes `filtered_results` from `raw_results` and clamps the selection.
    ///
    /// Any earlier ad-hoc narrowing is discarded. A selection past the end moves
    /// to the last result, or is dropped when nothing remains.
    pub fn refilter(&mut self) {
        let _span = tracing::debug_span!(
            "refilter",
            raw_count = self.raw_results.len(),
            filter_dir = %self.filter_dir,
            blacklist_len = self.blacklist.len()
        )
        .entered();

        self.filtered_results = filter_results(&self.raw_results, &self.filter_dir, &self.blacklist);
        self.clamp_selection();

        tracing::debug!(filtered_count = self.filtered_results.len(), "results filtered");
    }

    /// Clamps `selected_index` into the current result list.
    fn clamp_selection(&mut self) {
        if let Some(idx) = self.selected_index {
            self.selected_index = self
                .filtered_results
                .len()
                .checked_sub(1)
                .map(|last| idx.min(last));
        }
    }

    /// Adds `dir` to the blacklist unless it is empty or already present.
    ///
    /// Returns `true` if the blacklist changed.
    pub fn add_to_blacklist(&mut self, dir: &str) -> bool {
        if dir.is_empty() || self.blacklist.iter().any(|entry| entry == dir) {
            return false;
        }
        self.blacklist.push(dir.to_string());
        true
    }

    /// Pops the most recent undoable blacklist addition and removes it from the
    /// blacklist if it is still there.
    ///
    /// Returns the popped entry, or `None` if there was nothing to undo.
    pub fn undo_blacklist(&mut self) -> Option<String> {
        let entry = self.undo_stack.pop()?;
        if let Some(pos) = self.blacklist.iter().position(|b| b == &entry) {
            self.blacklist.remove(pos);
        }
        Some(entry)
    }

    /// Applies the outcome of an ad-hoc filter command to the visible results.
    ///
    /// On success the output replaces `filtered_results`, the selection moves to
    /// the first row (or is dropped when empty) and scrolling restarts. On failure
    /// the results are left alone and the error is shown.
    pub fn apply_adhoc_filter(&mut self, outcome: Result<Vec<String>>, now: Instant) {
        match outcome {
            Ok(lines) => {
                tracing::debug!(before = self.filtered_results.len(), after = lines.len(), "ad-hoc filter applied");
                self.selected_index = if lines.is_empty() { None } else { Some(0) };
                self.filtered_results = lines;
                self.scroll_pos = 0;
                self.set_status("Results filtered.", STATUS_INFO, now);
            }
            Err(e) => {
                self.set_status(format!("Filter error: {e}"), STATUS_FILTER_FAILURE, now);
            }
        }
    }

    /// Shows `text` in the status bar for `duration` from `now`.
    pub fn set_status(&mut self, text: impl Into<String>, duration: Duration, now: Instant) {
        let text = text.into();
        tracing::debug!(message = %text, duration_ms = duration.as_millis() as u64, "status message set");
        self.status = Some(StatusMessage {
            text,
            expires_at: now + duration,
        });
    }

    /// Returns the status message if it has not yet expired at `now`.
    #[must_use]
    pub fn active_status(&self, now: Instant) -> Option<&str> {
        self.status
            .as_ref()
            .filter(|status| now < status.expires_at)
            .map(|status| status.text.as_str())
    }

    /// Drops an expired status message. Returns `true` if one was dropped.
    pub fn expire_status(&mut self, now: Instant) -> bool {
        if self.status.as_ref().is_some_and(|status| now >= status.expires_at) {
            self.status = None;
            return true;
        }
        false
    }
}
