//! Top-level rendering coordinator.
//!
//! This module provides the rendering entry points: the main screen, the line
//! prompt drawn over the input bar, and the Blacklist Manager screen. Each one
//! computes or receives a view model, delegates to the components, places or
//! hides the cursor, and flushes.
//!
//! # Example
//!
//! ```rust
//! use glocate::app::AppState;
//! use glocate::ui::render;
//! use std::time::Instant;
//!
//! let state = AppState::default();
//! let mut frame = Vec::new();
//! render(&mut frame, &state, 24, 80, Instant::now()).unwrap();
//! assert!(String::from_utf8(frame).unwrap().contains("Search: "));
//! ```

use crate::app::{AppState, BlacklistEditor, LinePrompt};
use crate::ui::components;
use crate::ui::helpers::{display_width, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::CursorPosition;
use std::io::{self, Write};
use std::time::Instant;

const SHOW_CURSOR: &str = "\u{1b}[?25h";
const HIDE_CURSOR: &str = "\u{1b}[?25l";

/// Renders the main screen for `state` into `out`.
///
/// # Errors
///
/// Returns any error from writing to or flushing `out`.
pub fn render(out: &mut impl Write, state: &AppState, rows: usize, cols: usize, now: Instant) -> io::Result<()> {
    let viewmodel = state.compute_viewmodel(rows, cols, now);

    write!(out, "{HIDE_CURSOR}")?;
    components::render_main_screen(out, &viewmodel, &state.theme, rows, cols)?;
    place_cursor(out, viewmodel.cursor)?;
    out.flush()
}

/// Redraws only the input bar with a line prompt and parks the cursor after it.
///
/// # Errors
///
/// Returns any error from writing to or flushing `out`.
pub fn render_prompt(out: &mut impl Write, prompt: &LinePrompt, theme: &Theme, cols: usize) -> io::Result<()> {
    let text = prompt.text();

    write!(out, "{HIDE_CURSOR}")?;
    components::render_input_bar(out, 0, &text, theme, cols)?;
    let col = display_width(&text).min(cols.saturating_sub(1));
    place_cursor(out, Some(CursorPosition { row: 0, col }))?;
    out.flush()
}

/// Renders the Blacklist Manager screen.
///
/// # Errors
///
/// Returns any error from writing to or flushing `out`.
pub fn render_blacklist(
    out: &mut impl Write,
    editor: &BlacklistEditor,
    theme: &Theme,
    rows: usize,
    cols: usize,
) -> io::Result<()> {
    let viewmodel = editor.compute_viewmodel(rows, cols);

    write!(out, "{HIDE_CURSOR}")?;
    components::render_blacklist_screen(out, &viewmodel, theme, rows, cols)?;
    out.flush()
}

fn place_cursor(out: &mut impl Write, cursor: Option<CursorPosition>) -> io::Result<()> {
    if let Some(CursorPosition { row, col }) = cursor {
        position_cursor(out, row, col)?;
        write!(out, "{SHOW_CURSOR}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{Event, InputMode};

    fn frame(state: &AppState, rows: usize, cols: usize) -> String {
        let mut out = Vec::new();
        render(&mut out, state, rows, cols, Instant::now()).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn search_frame_shows_cursor_after_buffer() {
        let mut state = AppState::default();
        state.input_buffer = "abc".into();
        let text = frame(&state, 10, 40);
        assert!(text.contains("Search: abc"));
        assert!(text.ends_with("\u{1b}[1;12H\u{1b}[?25h"));
    }

    #[test]
    fn select_frame_hides_cursor() {
        let mut state = AppState::default();
        state.apply_search_results(vec!["/etc/hosts".into()]);
        state.input_mode = InputMode::Select;
        state.selected_index = Some(0);
        let text = frame(&state, 10, 40);
        assert!(text.contains("SELECT MODE (Query: )"));
        assert!(text.contains("/etc/hosts"));
        assert!(!text.contains(SHOW_CURSOR));
    }

    #[test]
    fn tiny_terminal_renders_without_panicking() {
        let mut state = AppState::default();
        state.apply_search_results(vec!["/a".into()]);
        for (rows, cols) in [(0, 0), (1, 1), (2, 3), (3, 1)] {
            frame(&state, rows, cols);
        }
    }

    #[test]
    fn prompt_redraws_input_bar_only() {
        let mut prompt = LinePrompt::new("Open 'x' with: ");
        prompt.handle(&Event::Char('v'));
        let mut out = Vec::new();
        render_prompt(&mut out, &prompt, &Theme::default(), 80).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Open 'x' with: v"));
        assert!(text.ends_with("\u{1b}[1;17H\u{1b}[?25h"));
    }

    #[test]
    fn blacklist_screen_lists_entries() {
        let editor = BlacklistEditor::new(vec!["/tmp".into(), "/var".into()]);
        let mut out = Vec::new();
        render_blacklist(&mut out, &editor, &Theme::default(), 10, 60).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Blacklist Manager"));
        assert!(text.contains("1. /tmp"));
        assert!(text.contains("2. /var"));
        assert!(text.contains("q: Back to Search"));
    }
}
