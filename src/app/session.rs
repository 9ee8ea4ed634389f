//! Session tick.
//!
//! [`Session`] owns the [`AppState`] and a [`Gateway`] and advances both by one
//! loop iteration at a time:
//!
//! 1. drop an expired status message
//! 2. fire the debounce if the query has been quiet long enough
//! 3. hand the key (if any) to the mode handler
//! 4. carry out the returned actions, opening dialogs and calling the gateway
//! 5. run a requested search, then a requested refilter
//! 6. clamp the scroll window to the selection
//!
//! Searches run synchronously, so results are always applied in the order they
//! were requested.

use super::dialogs::{provided, Dialogs};
use super::handler::{handle_event, Event};
use super::state::{STATUS_FAILURE, STATUS_INFO};
use super::{Action, AppState};
use crate::domain::Result;
use crate::gateway::Gateway;
use crate::infrastructure::file_name;
use std::time::Instant;

/// Prompt shown before the ad-hoc filter command.
const FILTER_PROMPT: &str = "Filter results with command: ";

/// An interactive session over a gateway.
#[derive(Debug)]
pub struct Session<G> {
    state: AppState,
    gateway: G,
}

impl<G: Gateway> Session<G> {
    #[must_use]
    pub const fn new(state: AppState, gateway: G) -> Self {
        Self { state, gateway }
    }

    #[must_use]
    pub const fn state(&self) -> &AppState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut AppState {
        &mut self.state
    }

    #[must_use]
    pub const fn gateway(&self) -> &G {
        &self.gateway
    }

    /// Advances the session by one loop iteration.
    ///
    /// `visible_height` is the current number of result rows on screen. Returns
    /// `true` if anything visible may have changed.
    ///
    /// # Errors
    ///
    /// Only dialog (terminal) errors propagate. Gateway failures become status
    /// messages or pseudo-results.
    pub fn tick<D: Dialogs>(
        &mut self,
        event: Option<&Event>,
        now: Instant,
        visible_height: usize,
        dialogs: &mut D,
    ) -> Result<bool> {
        let mut dirty = self.state.expire_status(now);
        let mut search = self.state.debounce.fire(now, self.state.search_delay_ms);
        let mut refilter = false;

        if let Some(event) = event {
            dirty = true;
            for action in handle_event(&mut self.state, event, now) {
                match action {
                    Action::Search => search = true,
                    Action::Refilter => refilter = true,
                    other => self.perform(other, now, dialogs)?,
                }
            }
        }

        if search {
            self.run_search();
        } else if refilter {
            self.state.refilter();
        }

        let scrolled = self.state.sync_scroll(visible_height);
        Ok(dirty || search || refilter || scrolled)
    }

    /// Runs the search for `last_search_query` and applies the outcome.
    ///
    /// Failures are shown as a single `Error: ...` pseudo-result.
    fn run_search(&mut self) {
        self.state.debounce.clear();
        let query = self.state.last_search_query.clone();
        let results = match self.gateway.search(&query, self.state.result_limit) {
            Ok(results) => results,
            Err(e) => {
                tracing::warn!(query = %query, error = %e, "search failed");
                vec![format!("Error: {e}")]
            }
        };
        self.state.apply_search_results(results);
    }

    fn perform<D: Dialogs>(&mut self, action: Action, now: Instant, dialogs: &mut D) -> Result<()> {
        let _span = tracing::debug_span!("perform", action = ?action).entered();

        match action {
            Action::Open { path } => self.gateway.open(&path),
            Action::Copy { path } => {
                if self.gateway.copy(&path) {
                    self.state
                        .set_status(format!("Copied: {}", file_name(&path)), STATUS_INFO, now);
                } else {
                    let program = self.gateway.copy_program().to_string();
                    self.state.set_status(
                        format!("Error: Failed to copy. Is '{program}' installed?"),
                        STATUS_FAILURE,
                        now,
                    );
                }
            }
            Action::PromptOpenWith { path } => {
                let label = format!("Open '{}' with: ", file_name(&path));
                if let Some(command) = provided(dialogs.prompt(&label)?) {
                    match self.gateway.open_with(&command, &path) {
                        Ok(()) => self
                            .state
                            .set_status(format!("Opening with '{command}'..."), STATUS_INFO, now),
                        Err(e) => {
                            tracing::warn!(command = %command, error = %e, "open-with failed");
                            self.state
                                .set_status(format!("Failed to run: {e}"), STATUS_FAILURE, now);
                        }
                    }
                }
            }
            Action::PromptFilter => {
                if let Some(command) = provided(dialogs.prompt(FILTER_PROMPT)?) {
                    if !self.state.filtered_results.is_empty() {
                        let outcome = self.gateway.filter(&command, &self.state.filtered_results);
                        self.state.apply_adhoc_filter(outcome, now);
                    }
                }
            }
            Action::ManageBlacklist => {
                let edited = dialogs.manage_blacklist(self.state.blacklist.clone())?;
                tracing::debug!(before = self.state.blacklist.len(), after = edited.len(), "blacklist edited");
                self.state.blacklist = edited;
            }
            Action::Search | Action::Refilter => {}
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::InputMode;
    use crate::domain::GlocateError;
    use std::collections::VecDeque;
    use std::time::Duration;

    /// Records every call and answers from canned data.
    #[derive(Debug, Default)]
    struct FakeGateway {
        index: Vec<String>,
        searches: Vec<(String, usize)>,
        search_error: Option<String>,
        filter_output: Option<Vec<String>>,
        filter_calls: Vec<(String, Vec<String>)>,
        copy_ok: bool,
        copied: Vec<String>,
        opened: Vec<String>,
        opened_with: Vec<(String, String)>,
    }

    impl Gateway for FakeGateway {
        fn search(&mut self, query: &str, limit: usize) -> Result<Vec<String>> {
            if query.is_empty() {
                return Ok(vec![]);
            }
            self.searches.push((query.to_string(), limit));
            if let Some(stderr) = &self.search_error {
                return Err(GlocateError::CommandFailed {
                    program: "locate".into(),
                    stderr: stderr.clone(),
                });
            }
            Ok(self
                .index
                .iter()
                .filter(|p| p.to_lowercase().contains(&query.to_lowercase()))
                .take(limit)
                .cloned()
                .collect())
        }

        fn filter(&mut self, command: &str, input: &[String]) -> Result<Vec<String>> {
            self.filter_calls.push((command.to_string(), input.to_vec()));
            self.filter_output.clone().ok_or_else(|| GlocateError::CommandFailed {
                program: command.to_string(),
                stderr: "sh: bogus: not found".into(),
            })
        }

        fn copy(&mut self, text: &str) -> bool {
            self.copied.push(text.to_string());
            self.copy_ok
        }

        fn copy_program(&self) -> &str {
            "wl-copy"
        }

        fn open(&mut self, path: &str) {
            self.opened.push(path.to_string());
        }

        fn open_with(&mut self, command: &str, path: &str) -> Result<()> {
            if command.starts_with("missing") {
                return Err(GlocateError::CommandNotFound {
                    program: command.to_string(),
                });
            }
            self.opened_with.push((command.to_string(), path.to_string()));
            Ok(())
        }
    }

    /// Answers prompts from a queue and applies a fixed blacklist edit.
    #[derive(Debug, Default)]
    struct ScriptedDialogs {
        answers: VecDeque<Option<String>>,
        prompts: Vec<String>,
        blacklist_result: Option<Vec<String>>,
        seen_blacklist: Option<Vec<String>>,
    }

    impl Dialogs for ScriptedDialogs {
        fn prompt(&mut self, label: &str) -> Result<Option<String>> {
            self.prompts.push(label.to_string());
            Ok(self.answers.pop_front().flatten())
        }

        fn manage_blacklist(&mut self, blacklist: Vec<String>) -> Result<Vec<String>> {
            self.seen_blacklist = Some(blacklist.clone());
            Ok(self.blacklist_result.clone().unwrap_or(blacklist))
        }
    }

    fn paths(items: &[&str]) -> Vec<String> {
        items.iter().map(ToString::to_string).collect()
    }

    fn session(index: &[&str]) -> Session<FakeGateway> {
        let gateway = FakeGateway {
            index: paths(index),
            copy_ok: true,
            ..FakeGateway::default()
        };
        Session::new(AppState::default(), gateway)
    }

    struct Driver {
        session: Session<FakeGateway>,
        dialogs: ScriptedDialogs,
        now: Instant,
    }

    impl Driver {
        fn new(index: &[&str]) -> Self {
            Self {
                session: session(index),
                dialogs: ScriptedDialogs::default(),
                now: Instant::now(),
            }
        }

        fn key(&mut self, event: Event) {
            self.session
                .tick(Some(&event), self.now, 20, &mut self.dialogs)
                .unwrap();
        }

        fn keys(&mut self, text: &str) {
            for c in text.chars() {
                self.key(Event::Char(c));
            }
        }

        fn idle(&mut self, after: Duration) -> bool {
            self.now += after;
            self.session.tick(None, self.now, 20, &mut self.dialogs).unwrap()
        }

        fn state(&self) -> &AppState {
            self.session.state()
        }

        fn gw(&self) -> &FakeGateway {
            self.session.gateway()
        }
    }

    const INDEX: &[&str] = &["/a/b/foo.txt", "/a/c/foo.rs", "/x/y/foo.md", "/x/y/bar.md"];

    #[test]
    fn typing_searches_immediately_with_result_limit() {
        let mut d = Driver::new(INDEX);
        d.keys("foo");
        assert_eq!(d.gw().searches.last(), Some(&("foo".to_string(), 50)));
        assert_eq!(d.gw().searches.len(), 3);
        assert_eq!(d.state().filtered_results.len(), 3);
    }

    #[test]
    fn debounced_search_waits_for_quiet_input() {
        let mut d = Driver::new(INDEX);
        d.session.state_mut().result_limit = 5000;
        d.keys("fo");
        d.idle(Duration::from_millis(500));
        d.key(Event::Char('o'));
        assert!(d.gw().searches.is_empty());

        d.idle(Duration::from_millis(999));
        assert!(d.gw().searches.is_empty());

        assert!(d.idle(Duration::from_millis(1)));
        assert_eq!(d.gw().searches, vec![("foo".to_string(), 5000)]);

        d.idle(Duration::from_secs(5));
        assert_eq!(d.gw().searches.len(), 1);
    }

    #[test]
    fn immediate_search_drops_pending_debounce() {
        let mut d = Driver::new(INDEX);
        d.session.state_mut().result_limit = 5000;
        d.keys("fo");
        d.keys("/bar");
        d.key(Event::Enter);
        assert_eq!(d.gw().searches, vec![("bar".to_string(), 5000)]);
        d.idle(Duration::from_secs(2));
        assert_eq!(d.gw().searches.len(), 1);
    }

    #[test]
    fn search_errors_become_a_pseudo_result() {
        let mut d = Driver::new(INDEX);
        d.session.state_mut().result_limit = 10;
        d.session.state_mut().delay_limit = 100;
        let gw = FakeGateway {
            search_error: Some("locate: can not stat () `/var/lib/mlocate/mlocate.db'".into()),
            ..FakeGateway::default()
        };
        d.session = Session::new(d.session.state().clone(), gw);
        d.keys("x");
        assert_eq!(
            d.state().filtered_results,
            vec!["Error: locate: can not stat () `/var/lib/mlocate/mlocate.db'".to_string()]
        );
    }

    #[test]
    fn blacklist_then_undo_restores_results() {
        let mut d = Driver::new(INDEX);
        d.keys("foo");
        d.key(Event::Enter);
        assert_eq!(d.state().input_mode, InputMode::Select);

        d.key(Event::Char('b'));
        assert_eq!(d.state().blacklist, paths(&["/a/b"]));
        assert_eq!(d.state().filtered_results, paths(&["/a/c/foo.rs", "/x/y/foo.md"]));
        assert_eq!(d.state().selected_index, Some(0));

        d.key(Event::Char('u'));
        assert!(d.state().blacklist.is_empty());
        assert_eq!(
            d.state().filtered_results,
            paths(&["/a/b/foo.txt", "/a/c/foo.rs", "/x/y/foo.md"])
        );
    }

    #[test]
    fn copy_reports_success_and_failure() {
        let mut d = Driver::new(INDEX);
        d.keys("foo");
        d.key(Event::Enter);
        d.key(Event::Char('c'));
        assert_eq!(d.gw().copied, paths(&["/a/b/foo.txt"]));
        assert_eq!(d.state().active_status(d.now), Some("Copied: foo.txt"));

        d.session = Session::new(d.session.state().clone(), FakeGateway::default());
        d.key(Event::Char('c'));
        assert_eq!(
            d.state().active_status(d.now),
            Some("Error: Failed to copy. Is 'wl-copy' installed?")
        );
        assert!(d.state().active_status(d.now + Duration::from_millis(2500)).is_some());
        assert!(d.idle(STATUS_FAILURE));
        assert!(d.state().status.is_none());
    }

    #[test]
    fn enter_opens_selection() {
        let mut d = Driver::new(INDEX);
        d.keys("bar");
        d.key(Event::Enter);
        d.key(Event::Enter);
        assert_eq!(d.gw().opened, paths(&["/x/y/bar.md"]));
    }

    #[test]
    fn open_with_prompts_and_launches() {
        let mut d = Driver::new(INDEX);
        d.keys("bar");
        d.key(Event::Enter);
        d.dialogs.answers = VecDeque::from(vec![Some("vim -R".to_string())]);
        d.key(Event::Char('o'));
        assert_eq!(d.dialogs.prompts, vec!["Open 'bar.md' with: ".to_string()]);
        assert_eq!(
            d.gw().opened_with,
            vec![("vim -R".to_string(), "/x/y/bar.md".to_string())]
        );
        assert_eq!(d.state().active_status(d.now), Some("Opening with 'vim -R'..."));
    }

    #[test]
    fn open_with_failure_and_cancel() {
        let mut d = Driver::new(INDEX);
        d.keys("bar");
        d.key(Event::Enter);
        d.dialogs.answers = VecDeque::from(vec![Some("missing-editor".to_string()), None, Some("  ".into())]);
        d.key(Event::Char('o'));
        assert_eq!(
            d.state().active_status(d.now),
            Some("Failed to run: 'missing-editor' command not found. Please ensure it's installed.")
        );
        d.session.state_mut().status = None;
        d.key(Event::Char('o'));
        d.key(Event::Char('o'));
        assert!(d.gw().opened_with.is_empty());
        assert!(d.state().status.is_none());
    }

    #[test]
    fn adhoc_filter_narrows_until_next_refilter() {
        let mut d = Driver::new(INDEX);
        d.keys("foo");
        d.key(Event::Enter);
        d.key(Event::Char('j'));
        d.session.gateway.filter_output = Some(paths(&["/x/y/foo.md"]));
        d.dialogs.answers = VecDeque::from(vec![Some("grep md".to_string())]);
        d.key(Event::Char('f'));

        assert_eq!(d.dialogs.prompts, vec![FILTER_PROMPT.to_string()]);
        assert_eq!(d.gw().filter_calls[0].1, paths(&["/a/b/foo.txt", "/a/c/foo.rs", "/x/y/foo.md"]));
        assert_eq!(d.state().filtered_results, paths(&["/x/y/foo.md"]));
        assert_eq!(d.state().selected_index, Some(0));
        assert_eq!(d.state().active_status(d.now), Some("Results filtered."));

        d.keys("/dir /");
        d.key(Event::Enter);
        assert_eq!(d.state().filtered_results.len(), 3);
    }

    #[test]
    fn adhoc_filter_failure_keeps_results() {
        let mut d = Driver::new(INDEX);
        d.keys("foo");
        d.key(Event::Enter);
        d.dialogs.answers = VecDeque::from(vec![Some("bogus".to_string())]);
        d.key(Event::Char('f'));
        assert_eq!(d.state().filtered_results.len(), 3);
        assert_eq!(d.state().active_status(d.now), Some("Filter error: sh: bogus: not found"));
    }

    #[test]
    fn adhoc_filter_skips_empty_results() {
        let mut d = Driver::new(INDEX);
        d.session.state_mut().input_mode = InputMode::Select;
        d.dialogs.answers = VecDeque::from(vec![Some("sort".to_string())]);
        d.key(Event::Char('f'));
        assert!(d.gw().filter_calls.is_empty());
    }

    #[test]
    fn blacklist_manager_edits_and_refilters() {
        let mut d = Driver::new(INDEX);
        d.keys("foo");
        d.session.state_mut().blacklist = paths(&["/a", "/x"]);
        d.session.state_mut().refilter();
        assert!(d.state().filtered_results.is_empty());

        d.dialogs.blacklist_result = Some(paths(&["/a"]));
        d.keys("/black list");
        d.key(Event::Enter);
        assert_eq!(d.dialogs.seen_blacklist, Some(paths(&["/a", "/x"])));
        assert_eq!(d.state().blacklist, paths(&["/a"]));
        assert_eq!(d.state().filtered_results, paths(&["/x/y/foo.md"]));
        assert_eq!(d.state().input_buffer, "foo");
    }

    #[test]
    fn unknown_command_searches_for_its_text() {
        let mut d = Driver::new(INDEX);
        d.keys("/bar");
        d.key(Event::Enter);
        assert_eq!(d.state().last_search_query, "bar");
        assert_eq!(d.gw().searches, vec![("bar".to_string(), 50)]);
        assert_eq!(d.state().filtered_results, paths(&["/x/y/bar.md"]));
    }

    #[test]
    fn scroll_follows_selection_each_tick() {
        let index: Vec<String> = (0..40).map(|i| format!("/n/{i}")).collect();
        let refs: Vec<&str> = index.iter().map(String::as_str).collect();
        let mut d = Driver::new(&refs);
        d.keys("n");
        d.key(Event::Enter);
        for _ in 0..25 {
            d.key(Event::Char('j'));
        }
        assert_eq!(d.state().selected_index, Some(25));
        assert_eq!(d.state().scroll_pos, 6);
    }

    #[test]
    fn idle_tick_without_changes_is_clean() {
        let mut d = Driver::new(INDEX);
        assert!(!d.idle(Duration::from_millis(100)));
    }
}
