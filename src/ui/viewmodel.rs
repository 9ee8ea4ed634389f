//! View model types representing renderable UI state.
//!
//! This module defines immutable view models computed from application state.
//! View models are display-ready: rows are already windowed and truncated to the
//! terminal width, highlight ranges are precomputed, and the status line has
//! already chosen between a transient message and the mode hint.
//!
//! # Architecture
//!
//! View models are created via `AppState::compute_viewmodel()` and
//! `BlacklistEditor::compute_viewmodel()` and consumed by the renderer. They
//! contain no business logic.
//!
//! # Example
//!
//! ```rust
//! use glocate::ui::viewmodel::{CursorPosition, DisplayItem, InputBarInfo, StatusInfo, UIViewModel};
//!
//! let vm = UIViewModel {
//!     input_bar: InputBarInfo { text: "Search: foo".to_string() },
//!     display_items: vec![DisplayItem {
//!         text: "/home/user/foo.txt".to_string(),
//!         is_selected: false,
//!         highlight_ranges: vec![(11, 14)],
//!     }],
//!     status: StatusInfo { text: "MODE: SEARCH".to_string(), is_message: false },
//!     cursor: Some(CursorPosition { row: 0, col: 11 }),
//! };
//! assert_eq!(vm.display_items.len(), 1);
//! ```

/// Complete UI view model for the main screen.
///
/// Row 0 is the input bar, the last row is the status line, and everything in
/// between is the result window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UIViewModel {
    /// Top bar contents.
    pub input_bar: InputBarInfo,

    /// Visible slice of the filtered results, top to bottom.
    pub display_items: Vec<DisplayItem>,

    /// Bottom line contents.
    pub status: StatusInfo,

    /// Where to show the terminal cursor; `None` hides it.
    pub cursor: Option<CursorPosition>,
}

/// Display information for a single result row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayItem {
    /// Row text, already truncated to the terminal width.
    pub text: String,

    /// Whether this row is the current selection.
    pub is_selected: bool,

    /// Character ranges to highlight (for fuzzy query matches).
    ///
    /// Each tuple is `(start_index, end_index)` in character indices into
    /// `text`, end exclusive. Always empty for selected rows.
    pub highlight_ranges: Vec<(usize, usize)>,
}

/// Input bar display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputBarInfo {
    /// Mode prefix and buffer, or the Select mode banner.
    pub text: String,
}

/// Status line display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusInfo {
    /// Text to show.
    pub text: String,

    /// `true` for a transient status message, `false` for the mode hint.
    pub is_message: bool,
}

/// Zero-based terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorPosition {
    pub row: usize,
    pub col: usize,
}

/// View model for the Blacklist Manager screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlacklistViewModel {
    /// Centered title on row 0.
    pub title: String,

    /// Numbered entries in the scroll window, starting on row 2.
    pub items: Vec<DisplayItem>,

    /// Key help on the last row.
    pub footer: String,
}
