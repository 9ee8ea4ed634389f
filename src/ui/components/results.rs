//! Result window component renderer.

use super::pad_to;
use crate::ui::helpers::{display_width, position_cursor, render_highlighted_text};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DisplayItem;
use std::io::{self, Write};

/// Renders result rows from `start_row` up to (not including) `end_row`.
///
/// Rows without an item are blanked. The selected row uses the selection
/// colors across the full width; other rows show query matches highlighted.
///
/// # Errors
///
/// Returns any error from writing to `out`.
pub fn render_result_rows(
    out: &mut impl Write,
    start_row: usize,
    end_row: usize,
    items: &[DisplayItem],
    theme: &Theme,
    cols: usize,
) -> io::Result<usize> {
    let colors = &theme.colors;
    for row in start_row..end_row {
        position_cursor(out, row, 0)?;
        match items.get(row - start_row) {
            Some(item) if item.is_selected => {
                write!(
                    out,
                    "{}{}{}",
                    Theme::fg(&colors.selection_fg),
                    Theme::bg(&colors.selection_bg),
                    pad_to(&item.text, cols)
                )?;
            }
            Some(item) => {
                write!(
                    out,
                    "{}{}",
                    Theme::fg(&colors.result_fg),
                    Theme::bg_opt(colors.result_bg.as_ref())
                )?;
                render_highlighted_text(out, &item.text, &item.highlight_ranges, theme, &colors.result_fg)?;
                write!(
                    out,
                    "{}{}",
                    Theme::bg_opt(colors.result_bg.as_ref()),
                    " ".repeat(cols.saturating_sub(display_width(&item.text)))
                )?;
            }
            None => write!(out, "{}", " ".repeat(cols))?,
        }
        write!(out, "{}", Theme::reset())?;
    }
    Ok(end_row)
}
