//! Shared rendering utilities and helpers.
//!
//! Text measurement and truncation work in terminal columns via
//! `unicode-width`, so wide characters never push a row past the screen edge.
//! Highlighting works on character indices, never byte indices.
//!
//! # Example
//!
//! ```rust
//! use glocate::ui::helpers::ellipsize;
//!
//! assert_eq!(ellipsize("/very/long/path", 8), "/very/l…");
//! assert_eq!(ellipsize("/short", 8), "/short");
//! ```

use crate::ui::theme::Theme;
use std::io::{self, Write};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Ellipsis appended to truncated rows.
pub const ELLIPSIS: char = '…';

/// Moves the cursor to a zero-based cell.
///
/// Uses the ANSI `CUP` sequence, which is one-based.
///
/// # Errors
///
/// Returns any error from writing to `out`.
pub fn position_cursor(out: &mut impl Write, row: usize, col: usize) -> io::Result<()> {
    write!(out, "\u{1b}[{};{}H", row + 1, col + 1)
}

/// Display width of `text` in terminal columns.
#[must_use]
pub fn display_width(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}

/// Returns the longest prefix of `text` that fits in `max_cols` columns.
#[must_use]
pub fn truncate_to_width(text: &str, max_cols: usize) -> &str {
    let mut used = 0;
    for (idx, c) in text.char_indices() {
        let w = UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w > max_cols {
            return &text[..idx];
        }
        used += w;
    }
    text
}

/// Fits `text` into `limit` columns, replacing the overflow with `…`.
///
/// Text that already fits is returned unchanged.
#[must_use]
pub fn ellipsize(text: &str, limit: usize) -> String {
    if display_width(text) <= limit {
        return text.to_string();
    }
    let mut out = truncate_to_width(text, limit.saturating_sub(1)).to_string();
    out.push(ELLIPSIS);
    out
}

/// Writes text with highlighted character ranges for fuzzy matches.
///
/// Ranges are `(start, end)` character indices, end exclusive. Ranges past the
/// end of `text` are clipped. Highlighted sections use the match highlight
/// colors and then restore `base_fg`.
///
/// # Errors
///
/// Returns any error from writing to `out`.
pub fn render_highlighted_text(
    out: &mut impl Write,
    text: &str,
    ranges: &[(usize, usize)],
    theme: &Theme,
    base_fg: &str,
) -> io::Result<()> {
    if ranges.is_empty() {
        return write!(out, "{text}");
    }

    let chars: Vec<char> = text.chars().collect();
    let mut current_pos = 0;

    for &(start, end) in ranges {
        let start = start.min(chars.len()).max(current_pos);
        let end = end.min(chars.len());
        if start >= end {
            continue;
        }

        let normal_section: String = chars[current_pos..start].iter().collect();
        write!(out, "{normal_section}")?;

        let highlighted_section: String = chars[start..end].iter().collect();
        write!(
            out,
            "{}{}{highlighted_section}{}{}",
            Theme::fg(&theme.colors.match_highlight_fg),
            Theme::bg(&theme.colors.match_highlight_bg),
            Theme::reset(),
            Theme::fg(base_fg),
        )?;

        current_pos = end;
    }

    let remaining: String = chars[current_pos..].iter().collect();
    write!(out, "{remaining}")
}
