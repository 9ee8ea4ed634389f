//! Composable UI component renderers.
//!
//! Each component draws one region of the screen into any [`Write`] sink and
//! returns the next free row. Rows are zero-based and every drawn row is padded
//! to the full width, so a frame fully overwrites the previous one without a
//! screen clear.
//!
//! # Components
//!
//! - [`input_bar`]: Top bar with the query, command line, or prompt
//! - [`results`]: Result window with selection and match highlighting
//! - [`status`]: Bottom line with status message or mode hint
//! - [`blacklist`]: Blacklist Manager screen
//!
//! # Layout
//!
//! ```text
//! row 0         input bar
//! rows 1..h-1   results (blank-padded)
//! row h-1       status line
//! ```

mod blacklist;
mod input_bar;
mod results;
mod status;

pub use blacklist::render_blacklist_screen;
pub use input_bar::render_input_bar;

use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;
use std::io::{self, Write};

use results::render_result_rows;
use status::render_status_line;

/// Renders the main screen: input bar, result window, status line.
///
/// # Errors
///
/// Returns any error from writing to `out`.
pub fn render_main_screen(
    out: &mut impl Write,
    vm: &UIViewModel,
    theme: &Theme,
    rows: usize,
    cols: usize,
) -> io::Result<()> {
    if rows == 0 || cols == 0 {
        return Ok(());
    }

    let next = render_input_bar(out, 0, &vm.input_bar.text, theme, cols)?;
    let status_row = rows - 1;
    if status_row >= next {
        render_result_rows(out, next, status_row, &vm.display_items, theme, cols)?;
        render_status_line(out, status_row, &vm.status, theme, cols)?;
    }
    Ok(())
}

/// Pads `text` with spaces up to `cols` columns.
fn pad_to(text: &str, cols: usize) -> String {
    let width = crate::ui::helpers::display_width(text);
    format!("{text}{}", " ".repeat(cols.saturating_sub(width)))
}
