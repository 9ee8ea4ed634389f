//! Render Projector.
//!
//! Turns [`AppState`] into a [`UIViewModel`] for the current terminal size and
//! keeps the scroll window in step with the selection. The screen is one input
//! bar row, the result window, and one status row, so the window is always
//! `rows - 2` lines tall.
//!
//! # Example
//!
//! ```rust
//! use glocate::app::AppState;
//! use std::time::Instant;
//!
//! let mut state = AppState::default();
//! state.apply_search_results((0..100).map(|i| format!("/f/{i}")).collect());
//! state.selected_index = Some(40);
//! state.sync_scroll(AppState::visible_height(12));
//! assert_eq!(state.scroll_pos, 31);
//!
//! let vm = state.compute_viewmodel(12, 80, Instant::now());
//! assert_eq!(vm.display_items.len(), 10);
//! assert!(vm.display_items[9].is_selected);
//! ```

use super::dialogs::BlacklistEditor;
use super::modes::InputMode;
use super::AppState;
use crate::ui::helpers::{display_width, ellipsize, truncate_to_width};
use crate::ui::viewmodel::{
    BlacklistViewModel, CursorPosition, DisplayItem, InputBarInfo, StatusInfo, UIViewModel,
};
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use std::time::Instant;

/// Rows used by the input bar and the status line.
const CHROME_ROWS: usize = 2;

/// Blacklist Manager title.
const BLACKLIST_TITLE: &str = "Blacklist Manager";

/// Blacklist Manager key help.
const BLACKLIST_FOOTER: &str = "j/k: Navigate | d: Delete | q: Back to Search";

impl AppState {
    /// Number of result rows that fit in a terminal `rows` high.
    #[must_use]
    pub const fn visible_height(rows: usize) -> usize {
        rows.saturating_sub(CHROME_ROWS)
    }

    /// Scrolls the minimal amount needed to keep the selection visible.
    ///
    /// Without a selection, or with no room for rows, scrolling is left alone.
    /// Returns `true` if `scroll_pos` changed.
    pub fn sync_scroll(&mut self, visible_height: usize) -> bool {
        let Some(selected) = self.selected_index else {
            return false;
        };
        if visible_height == 0 {
            return false;
        }

        let before = self.scroll_pos;
        if selected < self.scroll_pos {
            self.scroll_pos = selected;
        } else if selected >= self.scroll_pos + visible_height {
            self.scroll_pos = selected + 1 - visible_height;
        }
        before != self.scroll_pos
    }

    /// Computes the main screen view model for a `rows` x `cols` terminal.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize, now: Instant) -> UIViewModel {
        let line_limit = cols.saturating_sub(1);

        let (bar_text, cursor) = match self.input_mode {
            InputMode::Select => (format!("SELECT MODE (Query: {})", self.last_search_query), None),
            mode => {
                let text = format!("{}{}", mode.prompt_prefix(), self.input_buffer);
                let col = display_width(&text).min(line_limit);
                (text, Some(CursorPosition { row: 0, col }))
            }
        };

        let len = self.filtered_results.len();
        let start = self.scroll_pos.min(len);
        let end = (start + Self::visible_height(rows)).min(len);

        let matcher = (!self.last_search_query.is_empty()).then(|| SkimMatcherV2::default().ignore_case());

        let display_items = self.filtered_results[start..end]
            .iter()
            .enumerate()
            .map(|(offset, path)| {
                let is_selected = self.selected_index == Some(start + offset);
                let text = ellipsize(path, cols);
                let highlight_ranges = match (&matcher, is_selected) {
                    (Some(m), false) => self.compute_highlight_ranges(&text, m),
                    _ => vec![],
                };
                DisplayItem {
                    text,
                    is_selected,
                    highlight_ranges,
                }
            })
            .collect();

        let (status_text, is_message) = self
            .active_status(now)
            .map_or((self.input_mode.hint(), false), |text| (text, true));

        UIViewModel {
            input_bar: InputBarInfo {
                text: truncate_to_width(&bar_text, line_limit).to_string(),
            },
            display_items,
            status: StatusInfo {
                text: truncate_to_width(status_text, line_limit).to_string(),
                is_message,
            },
            cursor,
        }
    }

    /// Computes character index ranges to highlight for fuzzy match visualization.
    ///
    /// Consecutive match indices are coalesced into `(start, end)` ranges, end
    /// exclusive.
    fn compute_highlight_ranges(&self, text: &str, matcher: &SkimMatcherV2) -> Vec<(usize, usize)> {
        let Some((_score, indices)) = matcher.fuzzy_indices(text, &self.last_search_query) else {
            return vec![];
        };

        let mut ranges: Vec<(usize, usize)> = Vec::new();
        for idx in indices {
            match ranges.last_mut() {
                Some((_, end)) if *end == idx => *end = idx + 1,
                _ => ranges.push((idx, idx + 1)),
            }
        }
        ranges
    }
}

impl BlacklistEditor {
    /// Computes the Blacklist Manager view model for a `rows` x `cols` terminal.
    ///
    /// Entries are numbered from 1 and cut to `cols - 2` columns.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> BlacklistViewModel {
        let visible = rows.saturating_sub(Self::CHROME_ROWS);
        let entries = self.entries();
        let start = self.scroll().min(entries.len());
        let end = (start + visible).min(entries.len());

        let items = entries[start..end]
            .iter()
            .enumerate()
            .map(|(offset, entry)| {
                let idx = start + offset;
                DisplayItem {
                    text: ellipsize(&format!("{}. {entry}", idx + 1), cols.saturating_sub(2)),
                    is_selected: idx == self.selected(),
                    highlight_ranges: vec![],
                }
            })
            .collect();

        BlacklistViewModel {
            title: BLACKLIST_TITLE.to_string(),
            items,
            footer: truncate_to_width(BLACKLIST_FOOTER, cols.saturating_sub(2)).to_string(),
        }
    }
}
