//! Debounce Scheduler.
//!
//! When the result limit is large every search is expensive, so keystrokes arm
//! the debounce instead of searching. The loop polls [`Debounce::fire`] once per
//! tick, before reading input; the search fires once the configured delay has
//! passed since the most recent keystroke. Arming again only moves the
//! deadline. Nothing is ever cancelled once it has fired.

use std::time::{Duration, Instant};

/// Pending-search bookkeeping.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Debounce {
    /// Whether a search is waiting for the input to go quiet.
    pub pending: bool,
    /// Time of the keystroke that last armed the debounce.
    pub last_key_press: Option<Instant>,
}

impl Debounce {
    /// Arms (or re-arms) the debounce at `now`.
    pub fn arm(&mut self, now: Instant) {
        self.pending = true;
        self.last_key_press = Some(now);
    }

    /// Drops any pending search.
    pub fn clear(&mut self) {
        self.pending = false;
    }

    /// Returns `true` exactly once when a pending search is due at `now`.
    ///
    /// Firing clears the pending flag.
    pub fn fire(&mut self, now: Instant, delay_ms: u64) -> bool {
        if !self.pending {
            return false;
        }
        let elapsed = self
            .last_key_press
            .map_or(Duration::MAX, |pressed| now.saturating_duration_since(pressed));
        if elapsed >= Duration::from_millis(delay_ms) {
            self.pending = false;
            true
        } else {
            false
        }
    }
}
