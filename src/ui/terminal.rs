//! Raw-mode terminal session.
//!
//! [`Terminal`] puts the terminal into raw mode on the alternate screen and
//! restores it on drop, including when a panic unwinds through the loop. It
//! also decodes `crossterm` key events into [`Event`]s, implements the
//! blocking [`Dialogs`] on top of the same screen, and runs the main loop.
//!
//! # Loop
//!
//! Each iteration waits up to [`POLL_INTERVAL`] for one key, then ticks the
//! session with it (or with nothing, so the debounce and status expiry still
//! run) and redraws when the tick reports a change or the window was resized.

use crate::app::{AppState, BlacklistEditor, Dialogs, Event, LinePrompt, PromptOutcome, Session};
use crate::domain::{GlocateError, Result};
use crate::gateway::Gateway;
use crate::ui::renderer::{render, render_blacklist, render_prompt};
use crate::ui::theme::Theme;
use crossterm::cursor::Show;
use crossterm::event::{self, Event as TermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    self as term, disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use std::io::{self, BufWriter, Write};
use std::panic;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::OnceLock;
use std::time::{Duration, Instant};

/// How long one loop iteration waits for input.
pub const POLL_INTERVAL: Duration = Duration::from_millis(100);

static RAW_MODE_ENABLED: AtomicBool = AtomicBool::new(false);
static PANIC_HOOK_INSTALLED: OnceLock<()> = OnceLock::new();

/// Decoded terminal input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// A key the session understands.
    Key(Event),
    /// Ctrl+C.
    Quit,
}

/// Maps a `crossterm` key event to session input.
///
/// Key releases, modified keys other than Ctrl+C, and keys without a
/// meaning (arrows, function keys) are dropped.
#[must_use]
pub fn decode_key(key: &KeyEvent) -> Option<Input> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
        return (key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c'))
            .then_some(Input::Quit);
    }
    let event = match key.code {
        KeyCode::Char(c) => Event::Char(c),
        KeyCode::Backspace => Event::Backspace,
        KeyCode::Enter => Event::Enter,
        KeyCode::Esc => Event::Escape,
        _ => return None,
    };
    Some(Input::Key(event))
}

/// The interactive terminal.
#[derive(Debug)]
pub struct Terminal {
    theme: Theme,
    quit_requested: bool,
}

impl Terminal {
    /// Enters raw mode and the alternate screen.
    ///
    /// # Errors
    ///
    /// Returns [`GlocateError::Terminal`] if the terminal cannot be set up.
    pub fn enter(theme: Theme) -> Result<Self> {
        install_panic_hook();
        enable_raw_mode().map_err(|e| GlocateError::Terminal(format!("failed to enable raw mode: {e}")))?;
        RAW_MODE_ENABLED.store(true, Ordering::SeqCst);
        execute!(io::stdout(), EnterAlternateScreen)
            .map_err(|e| GlocateError::Terminal(format!("failed to enter alternate screen: {e}")))?;
        tracing::debug!("terminal entered raw mode");
        Ok(Self {
            theme,
            quit_requested: false,
        })
    }

    /// Current `(rows, cols)`.
    ///
    /// # Errors
    ///
    /// Returns an error if the size cannot be queried.
    pub fn size(&self) -> Result<(usize, usize)> {
        let (cols, rows) = term::size()?;
        Ok((usize::from(rows), usize::from(cols)))
    }

    /// Runs the main loop until Ctrl+C.
    ///
    /// # Errors
    ///
    /// Returns terminal I/O errors. Nothing the user does ends the loop with an
    /// error.
    pub fn run<G: Gateway>(&mut self, session: &mut Session<G>) -> Result<()> {
        let (mut rows, mut cols) = self.size()?;
        self.draw(session.state(), rows, cols)?;

        loop {
            let mut resized = false;
            let mut key = None;
            if event::poll(POLL_INTERVAL)? {
                match event::read()? {
                    TermEvent::Key(k) => match decode_key(&k) {
                        Some(Input::Quit) => break,
                        Some(Input::Key(e)) => key = Some(e),
                        None => {}
                    },
                    TermEvent::Resize(_, _) => resized = true,
                    _ => {}
                }
            }

            (rows, cols) = self.size()?;
            let visible_height = AppState::visible_height(rows);
            let dirty = session.tick(key.as_ref(), Instant::now(), visible_height, self)?;
            if self.quit_requested {
                break;
            }
            if dirty || resized {
                self.draw(session.state(), rows, cols)?;
            }
        }

        tracing::debug!("main loop finished");
        Ok(())
    }

    fn draw(&self, state: &AppState, rows: usize, cols: usize) -> Result<()> {
        let mut out = BufWriter::new(io::stdout().lock());
        render(&mut out, state, rows, cols, Instant::now())?;
        Ok(())
    }

    /// Blocks until the next decoded key. Resizes are reported as `None`.
    fn next_input(&mut self) -> Result<Option<Input>> {
        loop {
            match event::read()? {
                TermEvent::Key(k) => {
                    if let Some(input) = decode_key(&k) {
                        return Ok(Some(input));
                    }
                }
                TermEvent::Resize(_, _) => return Ok(None),
                _ => {}
            }
        }
    }
}

impl Dialogs for Terminal {
    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        let mut prompt = LinePrompt::new(label);
        loop {
            let (_, cols) = self.size()?;
            render_prompt(&mut BufWriter::new(io::stdout().lock()), &prompt, &self.theme, cols)?;

            match self.next_input()? {
                Some(Input::Quit) => {
                    self.quit_requested = true;
                    return Ok(None);
                }
                Some(Input::Key(event)) => match prompt.handle(&event) {
                    PromptOutcome::Pending => {}
                    PromptOutcome::Submitted(text) => return Ok(Some(text)),
                    PromptOutcome::Cancelled => return Ok(None),
                },
                None => {}
            }
        }
    }

    fn manage_blacklist(&mut self, blacklist: Vec<String>) -> Result<Vec<String>> {
        let mut editor = BlacklistEditor::new(blacklist);
        loop {
            let (rows, cols) = self.size()?;
            editor.sync_scroll(rows);
            render_blacklist(&mut BufWriter::new(io::stdout().lock()), &editor, &self.theme, rows, cols)?;

            match self.next_input()? {
                Some(Input::Quit) => {
                    self.quit_requested = true;
                    break;
                }
                Some(Input::Key(event)) => {
                    if editor.handle(&event) {
                        break;
                    }
                }
                None => {}
            }
        }
        Ok(editor.into_entries())
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        restore_terminal();
    }
}

/// Leaves raw mode and the alternate screen if they are active.
pub fn restore_terminal() {
    if RAW_MODE_ENABLED.swap(false, Ordering::SeqCst) {
        let _ = disable_raw_mode();
        let mut stdout = io::stdout();
        let _ = execute!(stdout, LeaveAlternateScreen, Show);
        let _ = stdout.flush();
    }
}

fn install_panic_hook() {
    PANIC_HOOK_INSTALLED.get_or_init(|| {
        let previous = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            restore_terminal();
            previous(info);
        }));
    });
}
