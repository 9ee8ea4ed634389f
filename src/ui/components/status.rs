//! Status line component renderer.

use super::pad_to;
use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::StatusInfo;
use std::io::{self, Write};

/// Renders the status line at `row`.
///
/// Transient messages are drawn in the message color, mode hints in the status
/// color.
///
/// # Errors
///
/// Returns any error from writing to `out`.
pub fn render_status_line(
    out: &mut impl Write,
    row: usize,
    status: &StatusInfo,
    theme: &Theme,
    cols: usize,
) -> io::Result<usize> {
    let colors = &theme.colors;
    let fg = if status.is_message {
        &colors.message_fg
    } else {
        &colors.status_fg
    };

    position_cursor(out, row, 0)?;
    write!(
        out,
        "{}{}{}{}",
        Theme::fg(fg),
        Theme::bg_opt(colors.status_bg.as_ref()),
        pad_to(&status.text, cols),
        Theme::reset()
    )?;
    Ok(row + 1)
}
