//! Input bar component renderer.

use super::pad_to;
use crate::ui::helpers::{position_cursor, truncate_to_width};
use crate::ui::theme::Theme;
use std::io::{self, Write};

/// Renders the input bar across the full width of `row`.
///
/// Text beyond `cols - 1` columns is cut off. Used for the search and command
/// buffers and for line prompts.
///
/// # Errors
///
/// Returns any error from writing to `out`.
pub fn render_input_bar(
    out: &mut impl Write,
    row: usize,
    text: &str,
    theme: &Theme,
    cols: usize,
) -> io::Result<usize> {
    let text = truncate_to_width(text, cols.saturating_sub(1));

    position_cursor(out, row, 0)?;
    write!(
        out,
        "{}{}{}{}",
        Theme::fg(&theme.colors.input_bar_fg),
        Theme::bg(&theme.colors.input_bar_bg),
        pad_to(text, cols),
        Theme::reset()
    )?;
    Ok(row + 1)
}
