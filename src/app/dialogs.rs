//! Blocking sub-dialogs.
//!
//! Two actions need more input than a single key: open-with and the ad-hoc
//! filter ask for a command line, and `/black list` opens the Blacklist Manager.
//! The session reaches both through the [`Dialogs`] trait so that tests can
//! script the answers. The key handling of each dialog lives here as a small
//! pure state machine ([`LinePrompt`], [`BlacklistEditor`]); the terminal
//! implementation only feeds keys in and draws the result.

use super::handler::Event;
use crate::domain::Result;

/// Modal dialogs that block the session until the user is done.
pub trait Dialogs {
    /// Shows `label` in the input bar and reads one line.
    ///
    /// Returns `None` if the user cancelled.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be read or drawn.
    fn prompt(&mut self, label: &str) -> Result<Option<String>>;

    /// Lets the user edit `blacklist` and returns the edited list.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be read or drawn.
    fn manage_blacklist(&mut self, blacklist: Vec<String>) -> Result<Vec<String>>;
}

/// Result of feeding one key to a [`LinePrompt`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptOutcome {
    /// Still editing.
    Pending,
    /// Enter was pressed with this text.
    Submitted(String),
    /// Escape was pressed.
    Cancelled,
}

/// Single-line text input.
///
/// # Example
///
/// ```rust
/// use glocate::app::{Event, LinePrompt, PromptOutcome};
///
/// let mut prompt = LinePrompt::new("Filter results with command: ");
/// prompt.handle(&Event::Char('w'));
/// prompt.handle(&Event::Char('c'));
/// assert_eq!(prompt.text(), "Filter results with command: wc");
/// assert_eq!(prompt.handle(&Event::Enter), PromptOutcome::Submitted("wc".into()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinePrompt {
    label: String,
    buffer: String,
}

impl LinePrompt {
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            buffer: String::new(),
        }
    }

    /// Label followed by the typed text, as shown in the input bar.
    #[must_use]
    pub fn text(&self) -> String {
        format!("{}{}", self.label, self.buffer)
    }

    #[must_use]
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn handle(&mut self, event: &Event) -> PromptOutcome {
        match event {
            Event::Enter => PromptOutcome::Submitted(std::mem::take(&mut self.buffer)),
            Event::Escape => PromptOutcome::Cancelled,
            Event::Backspace => {
                self.buffer.pop();
                PromptOutcome::Pending
            }
            Event::Char(c) => {
                if !c.is_control() {
                    self.buffer.push(*c);
                }
                PromptOutcome::Pending
            }
        }
    }
}

/// Normalizes a prompt answer: blank input counts as no answer.
#[must_use]
pub fn provided(answer: Option<String>) -> Option<String> {
    answer.filter(|text| !text.trim().is_empty())
}

/// Blacklist Manager list editor.
///
/// `j`/`k` move the selection, `d` deletes the selected entry, `q` closes the
/// editor. The scroll window follows the selection with the same minimal
/// adjustment as the result list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlacklistEditor {
    entries: Vec<String>,
    selected: usize,
    scroll: usize,
}

impl BlacklistEditor {
    /// Rows taken by the title, the blank line under it, and the footer.
    pub const CHROME_ROWS: usize = 3;

    #[must_use]
    pub fn new(entries: Vec<String>) -> Self {
        Self {
            entries,
            selected: 0,
            scroll: 0,
        }
    }

    #[must_use]
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    #[must_use]
    pub const fn selected(&self) -> usize {
        self.selected
    }

    #[must_use]
    pub const fn scroll(&self) -> usize {
        self.scroll
    }

    #[must_use]
    pub fn into_entries(self) -> Vec<String> {
        self.entries
    }

    /// Applies one key. Returns `true` when the editor should close.
    pub fn handle(&mut self, event: &Event) -> bool {
        match event {
            Event::Char('q') => return true,
            Event::Char('j') => {
                if self.selected + 1 < self.entries.len() {
                    self.selected += 1;
                }
            }
            Event::Char('k') => {
                self.selected = self.selected.saturating_sub(1);
            }
            Event::Char('d') => {
                if self.selected < self.entries.len() {
                    let removed = self.entries.remove(self.selected);
                    tracing::debug!(entry = %removed, "blacklist entry deleted");
                    if self.selected >= self.entries.len() && !self.entries.is_empty() {
                        self.selected = self.entries.len() - 1;
                    }
                }
            }
            _ => {}
        }
        false
    }

    /// Keeps the selection inside a window of `height - CHROME_ROWS` rows.
    pub fn sync_scroll(&mut self, height: usize) {
        let visible = height.saturating_sub(Self::CHROME_ROWS);
        if visible == 0 {
            return;
        }
        if self.selected < self.scroll {
            self.scroll = self.selected;
        } else if self.selected >= self.scroll + visible {
            self.scroll = self.selected + 1 - visible;
        }
    }
}
