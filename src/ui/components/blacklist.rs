//! Blacklist Manager screen renderer.

use super::pad_to;
use crate::ui::helpers::{display_width, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::BlacklistViewModel;
use std::io::{self, Write};

/// Renders the whole Blacklist Manager screen.
///
/// ```text
/// row 0         centered bold title
/// row 1         blank
/// rows 2..h-1   numbered entries, indented by one column
/// row h-1       footer in the input bar colors
/// ```
///
/// # Errors
///
/// Returns any error from writing to `out`.
pub fn render_blacklist_screen(
    out: &mut impl Write,
    vm: &BlacklistViewModel,
    theme: &Theme,
    rows: usize,
    cols: usize,
) -> io::Result<()> {
    if rows == 0 || cols == 0 {
        return Ok(());
    }
    let colors = &theme.colors;

    let title_pad = cols.saturating_sub(display_width(&vm.title)) / 2;
    position_cursor(out, 0, 0)?;
    write!(
        out,
        "{}{}{}{}",
        " ".repeat(title_pad),
        Theme::bold(),
        Theme::fg(&colors.title_fg),
        vm.title
    )?;
    write!(
        out,
        "{}{}",
        Theme::reset(),
        " ".repeat(cols.saturating_sub(title_pad + display_width(&vm.title)))
    )?;

    let footer_row = rows - 1;
    for row in 1..footer_row {
        position_cursor(out, row, 0)?;
        match row.checked_sub(2).and_then(|idx| vm.items.get(idx)) {
            Some(item) if item.is_selected => write!(
                out,
                " {}{}{}{}",
                Theme::fg(&colors.selection_fg),
                Theme::bg(&colors.selection_bg),
                item.text,
                Theme::reset()
            )?,
            Some(item) => write!(out, " {}", item.text)?,
            None => {}
        }
        let used = row
            .checked_sub(2)
            .and_then(|idx| vm.items.get(idx))
            .map_or(0, |item| display_width(&item.text) + 1);
        write!(out, "{}", " ".repeat(cols.saturating_sub(used)))?;
    }

    position_cursor(out, footer_row, 0)?;
    write!(
        out,
        "{}{}{}{}",
        Theme::fg(&colors.input_bar_fg),
        Theme::bg(&colors.input_bar_bg),
        pad_to(&format!(" {}", vm.footer), cols),
        Theme::reset()
    )
}
