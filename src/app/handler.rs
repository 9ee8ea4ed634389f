//! Event handling and state transition logic.
//!
//! This module implements the Mode Controller: one handler per [`InputMode`],
//! selected through an exhaustive match. Handlers mutate [`AppState`] directly
//! and return the [`Action`]s the session must carry out this tick. They never
//! block, spawn processes, or fail.
//!
//! # Architecture
//!
//! ```text
//! key → Event → handle_event → handle_{search,select,command} → Vec<Action>
//! ```
//!
//! # Searching
//!
//! Every keystroke that changes the Search buffer copies it into
//! `last_search_query` and clears the selection. When `result_limit` is at most
//! `delay_limit` the handler requests a search at once; otherwise it arms the
//! debounce and the search fires once typing pauses.
//!
//! # Example
//!
//! ```rust
//! use glocate::app::{handle_event, Action, AppState, Event, InputMode};
//! use std::time::Instant;
//!
//! let mut state = AppState::default();
//! handle_event(&mut state, &Event::Char('/'), Instant::now());
//! assert_eq!(state.input_mode, InputMode::Command);
//! ```

use super::command::SlashCommand;
use super::modes::InputMode;
use super::{Action, AppState};
use crate::infrastructure::{parent_dir, resolve_path};
use std::time::Instant;

/// A key press, decoded from the terminal.
///
/// The same events drive the main modes and the line prompt and blacklist
/// dialogs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// A printable character.
    Char(char),
    /// Deletes the last character.
    Backspace,
    /// Submits or confirms.
    Enter,
    /// Cancels or leaves the current mode.
    Escape,
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// `now` is the time of the key press, recorded when the debounce is armed.
pub fn handle_event(state: &mut AppState, event: &Event, now: Instant) -> Vec<Action> {
    let _span = tracing::debug_span!("handle_event", mode = ?state.input_mode, event = ?event).entered();

    if matches!(event, Event::Char(c) if c.is_control()) {
        return vec![];
    }

    match state.input_mode {
        InputMode::Search => handle_search(state, event, now),
        InputMode::Select => handle_select(state, event),
        InputMode::Command => handle_command(state, event),
    }
}

/// Search mode: edit the query, enter Select with Enter, or Command with `/`.
fn handle_search(state: &mut AppState, event: &Event, now: Instant) -> Vec<Action> {
    let changed = match event {
        Event::Char('/') => {
            enter_command_mode(state);
            false
        }
        Event::Char(c) => {
            state.input_buffer.push(*c);
            true
        }
        Event::Backspace => state.input_buffer.pop().is_some(),
        Event::Enter => {
            if !state.filtered_results.is_empty() {
                tracing::debug!(result_count = state.filtered_results.len(), "entering select mode");
                state.input_mode = InputMode::Select;
                if state.selected_index.is_none() {
                    state.selected_index = Some(0);
                }
            }
            false
        }
        Event::Escape => false,
    };

    if !changed {
        return vec![];
    }

    state.last_search_query.clone_from(&state.input_buffer);
    state.selected_index = None;

    if state.result_limit > state.delay_limit {
        tracing::trace!(query = %state.last_search_query, "search debounced");
        state.debounce.arm(now);
        vec![]
    } else {
        vec![Action::Search]
    }
}

/// Select mode: navigate results and act on the selected path.
fn handle_select(state: &mut AppState, event: &Event) -> Vec<Action> {
    match event {
        Event::Char('j') => {
            state.move_selection_down();
            vec![]
        }
        Event::Char('k') => {
            state.move_selection_up();
            vec![]
        }
        Event::Enter => selected_action(state, |path| Action::Open { path }),
        Event::Escape => {
            tracing::debug!("leaving select mode");
            state.input_mode = InputMode::Search;
            state.selected_index = None;
            vec![]
        }
        Event::Char('/') => {
            enter_command_mode(state);
            vec![]
        }
        Event::Char('b') => {
            let Some(dir) = state.selected_path().map(parent_dir) else {
                return vec![];
            };
            if state.add_to_blacklist(&dir) {
                tracing::debug!(dir = %dir, "directory blacklisted");
                state.undo_stack.push(dir);
                vec![Action::Refilter]
            } else {
                vec![]
            }
        }
        Event::Char('u') => match state.undo_blacklist() {
            Some(dir) => {
                tracing::debug!(dir = %dir, "blacklist entry undone");
                vec![Action::Refilter]
            }
            None => vec![],
        },
        Event::Char('c') => selected_action(state, |path| Action::Copy { path }),
        Event::Char('o') => selected_action(state, |path| Action::PromptOpenWith { path }),
        Event::Char('f') => vec![Action::PromptFilter],
        Event::Char(_) | Event::Backspace => vec![],
    }
}

/// Builds a single action from the selected path, or nothing without a selection.
fn selected_action(state: &AppState, build: impl FnOnce(String) -> Action) -> Vec<Action> {
    state
        .selected_path()
        .map(|path| build(path.to_string()))
        .into_iter()
        .collect()
}

/// Command mode: edit a `/` line and execute it on Enter.
fn handle_command(state: &mut AppState, event: &Event) -> Vec<Action> {
    match event {
        Event::Enter => execute_command(state),
        Event::Escape => {
            leave_command_mode(state);
            vec![]
        }
        Event::Backspace => {
            if state.input_buffer.chars().count() > 1 {
                state.input_buffer.pop();
            } else {
                leave_command_mode(state);
            }
            vec![]
        }
        Event::Char(c) => {
            state.input_buffer.push(*c);
            vec![]
        }
    }
}

fn enter_command_mode(state: &mut AppState) {
    tracing::debug!(from = ?state.input_mode, "entering command mode");
    state.input_mode = InputMode::Command;
    state.input_buffer = "/".to_string();
}

/// Returns to Search mode with the last submitted query back in the buffer.
fn leave_command_mode(state: &mut AppState) {
    state.input_mode = InputMode::Search;
    state.input_buffer.clone_from(&state.last_search_query);
}

fn execute_command(state: &mut AppState) -> Vec<Action> {
    let line = state
        .input_buffer
        .strip_prefix('/')
        .unwrap_or(&state.input_buffer)
        .to_string();

    let Some(command) = SlashCommand::parse(&line) else {
        let query = line.trim_start_matches('/').to_string();
        tracing::debug!(query = %query, "unrecognized command, searching instead");
        state.input_mode = InputMode::Search;
        state.input_buffer.clone_from(&query);
        state.last_search_query = query;
        return vec![Action::Search];
    };

    tracing::debug!(command = ?command, "executing command");
    let actions = apply_command(state, command);
    leave_command_mode(state);
    actions
}

fn apply_command(state: &mut AppState, command: SlashCommand) -> Vec<Action> {
    match command {
        SlashCommand::SetResultLimit(value) => {
            if let Some(limit) = value {
                state.result_limit = limit;
            }
            vec![]
        }
        SlashCommand::SetDelayLimit(value) => {
            if let Some(limit) = value {
                state.delay_limit = limit;
            }
            vec![]
        }
        SlashCommand::SetSearchDelay(value) => {
            if let Some(delay) = value {
                state.search_delay_ms = delay;
            }
            vec![]
        }
        SlashCommand::Dir(path) => {
            state.filter_dir = if path.is_empty() {
                String::new()
            } else {
                resolve_path(&path)
            };
            tracing::debug!(filter_dir = %state.filter_dir, "directory filter changed");
            vec![Action::Refilter]
        }
        SlashCommand::BlacklistManage => vec![Action::ManageBlacklist, Action::Refilter],
        SlashCommand::BlacklistAdd(path) => {
            if !path.is_empty() {
                let dir = resolve_path(&path);
                state.add_to_blacklist(&dir);
            }
            vec![Action::Refilter]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn paths(items: &[&str]) -> Vec<String> {
        items.iter().map(ToString::to_string).collect()
    }

    fn type_str(state: &mut AppState, text: &str, now: Instant) -> Vec<Action> {
        text.chars()
            .flat_map(|c| handle_event(state, &Event::Char(c), now))
            .collect()
    }

    fn select_state(results: &[&str]) -> AppState {
        let mut state = AppState::default();
        state.apply_search_results(paths(results));
        handle_event(&mut state, &Event::Enter, Instant::now());
        assert_eq!(state.input_mode, InputMode::Select);
        state
    }

    #[test]
    fn typing_requests_immediate_search_with_default_limits() {
        let mut state = AppState::default();
        let actions = type_str(&mut state, "foo", Instant::now());
        assert_eq!(actions, vec![Action::Search; 3]);
        assert_eq!(state.last_search_query, "foo");
        assert_eq!(state.result_limit, 50);
        assert!(!state.debounce.pending);
    }

    #[test]
    fn typing_arms_debounce_when_limit_exceeds_delay_limit() {
        let start = Instant::now();
        let mut state = AppState::default();
        state.result_limit = 2000;
        let actions = type_str(&mut state, "ab", start);
        assert!(actions.is_empty());
        assert!(state.debounce.pending);
        assert_eq!(state.debounce.last_key_press, Some(start));

        let later = start + Duration::from_millis(300);
        handle_event(&mut state, &Event::Backspace, later);
        assert_eq!(state.debounce.last_key_press, Some(later));
        assert_eq!(state.last_search_query, "a");
    }

    #[test]
    fn editing_clears_selection() {
        let mut state = AppState::default();
        state.apply_search_results(paths(&["/a"]));
        state.selected_index = Some(0);
        handle_event(&mut state, &Event::Char('x'), Instant::now());
        assert_eq!(state.selected_index, None);
    }

    #[test]
    fn backspace_on_empty_search_buffer_does_nothing() {
        let mut state = AppState::default();
        state.last_search_query = "prev".into();
        assert!(handle_event(&mut state, &Event::Backspace, Instant::now()).is_empty());
        assert_eq!(state.last_search_query, "prev");
    }

    #[test]
    fn control_characters_are_ignored() {
        let mut state = AppState::default();
        assert!(handle_event(&mut state, &Event::Char('\u{7}'), Instant::now()).is_empty());
        assert!(state.input_buffer.is_empty());
    }

    #[test]
    fn enter_without_results_stays_in_search() {
        let mut state = AppState::default();
        handle_event(&mut state, &Event::Enter, Instant::now());
        assert_eq!(state.input_mode, InputMode::Search);
        assert_eq!(state.selected_index, None);
    }

    #[test]
    fn enter_with_results_selects_first_row() {
        let state = select_state(&["/a", "/b"]);
        assert_eq!(state.selected_index, Some(0));
    }

    #[test]
    fn select_navigation_is_clamped() {
        let mut state = select_state(&["/a", "/b"]);
        let now = Instant::now();
        for _ in 0..3 {
            handle_event(&mut state, &Event::Char('j'), now);
        }
        assert_eq!(state.selected_index, Some(1));
        for _ in 0..3 {
            handle_event(&mut state, &Event::Char('k'), now);
        }
        assert_eq!(state.selected_index, Some(0));
    }

    #[test]
    fn select_actions_target_selected_path() {
        let mut state = select_state(&["/a/one", "/b/two"]);
        let now = Instant::now();
        handle_event(&mut state, &Event::Char('j'), now);
        assert_eq!(
            handle_event(&mut state, &Event::Enter, now),
            vec![Action::Open { path: "/b/two".into() }]
        );
        assert_eq!(
            handle_event(&mut state, &Event::Char('c'), now),
            vec![Action::Copy { path: "/b/two".into() }]
        );
        assert_eq!(
            handle_event(&mut state, &Event::Char('o'), now),
            vec![Action::PromptOpenWith { path: "/b/two".into() }]
        );
        assert_eq!(handle_event(&mut state, &Event::Char('f'), now), vec![Action::PromptFilter]);
    }

    #[test]
    fn select_actions_need_a_selection() {
        let mut state = AppState::default();
        state.input_mode = InputMode::Select;
        let now = Instant::now();
        for c in ['c', 'o', 'b', 'u'] {
            assert!(handle_event(&mut state, &Event::Char(c), now).is_empty());
        }
        assert!(handle_event(&mut state, &Event::Enter, now).is_empty());
    }

    #[test]
    fn escape_from_select_clears_selection() {
        let mut state = select_state(&["/a"]);
        handle_event(&mut state, &Event::Escape, Instant::now());
        assert_eq!(state.input_mode, InputMode::Search);
        assert_eq!(state.selected_index, None);
    }

    #[test]
    fn blacklisting_selection_parent_then_refilter() {
        let mut state = select_state(&["/a/b", "/a/c", "/x/y"]);
        let actions = handle_event(&mut state, &Event::Char('b'), Instant::now());
        assert_eq!(actions, vec![Action::Refilter]);
        assert_eq!(state.blacklist, paths(&["/a"]));
        assert_eq!(state.undo_stack, paths(&["/a"]));
        state.refilter();
        assert_eq!(state.filtered_results, paths(&["/x/y"]));
        assert_eq!(state.selected_index, Some(0));
    }

    #[test]
    fn blacklisting_twice_does_not_duplicate() {
        let mut state = select_state(&["/a/b", "/a/c"]);
        let now = Instant::now();
        handle_event(&mut state, &Event::Char('b'), now);
        // Without a refilter the selection still points at /a/b.
        assert!(handle_event(&mut state, &Event::Char('b'), now).is_empty());
        assert_eq!(state.blacklist, paths(&["/a"]));
        assert_eq!(state.undo_stack, paths(&["/a"]));
    }

    #[test]
    fn undo_restores_blacklisted_results() {
        let mut state = select_state(&["/a/b", "/a/c", "/x/y"]);
        let now = Instant::now();
        state.blacklist.push("/keep".into());
        handle_event(&mut state, &Event::Char('b'), now);
        state.refilter();
        assert_eq!(handle_event(&mut state, &Event::Char('u'), now), vec![Action::Refilter]);
        assert_eq!(state.blacklist, paths(&["/keep"]));
        state.refilter();
        assert_eq!(state.filtered_results, paths(&["/a/b", "/a/c", "/x/y"]));
    }

    #[test]
    fn slash_enters_command_mode_from_search_and_select() {
        let mut state = AppState::default();
        handle_event(&mut state, &Event::Char('/'), Instant::now());
        assert_eq!(state.input_mode, InputMode::Command);
        assert_eq!(state.input_buffer, "/");

        let mut state = select_state(&["/a"]);
        handle_event(&mut state, &Event::Char('/'), Instant::now());
        assert_eq!(state.input_mode, InputMode::Command);
        assert_eq!(state.input_buffer, "/");
    }

    #[test]
    fn set_result_restores_previous_query() {
        let now = Instant::now();
        let mut state = AppState::default();
        type_str(&mut state, "foo", now);
        type_str(&mut state, "/set result=10", now);
        let actions = handle_event(&mut state, &Event::Enter, now);
        assert!(actions.is_empty());
        assert_eq!(state.result_limit, 10);
        assert_eq!(state.input_mode, InputMode::Search);
        assert_eq!(state.input_buffer, "foo");
    }

    #[test]
    fn invalid_setting_keeps_prior_value() {
        let now = Instant::now();
        let mut state = AppState::default();
        type_str(&mut state, "/set delay=soon", now);
        handle_event(&mut state, &Event::Enter, now);
        assert_eq!(state.search_delay_ms, 1000);
        assert_eq!(state.input_mode, InputMode::Search);
    }

    #[test]
    fn unrecognized_command_becomes_search() {
        let now = Instant::now();
        let mut state = AppState::default();
        type_str(&mut state, "/xyz", now);
        let actions = handle_event(&mut state, &Event::Enter, now);
        assert_eq!(actions, vec![Action::Search]);
        assert_eq!(state.input_mode, InputMode::Search);
        assert_eq!(state.last_search_query, "xyz");
        assert_eq!(state.input_buffer, "xyz");
    }

    #[test]
    fn unrecognized_command_search_bypasses_debounce() {
        let now = Instant::now();
        let mut state = AppState::default();
        state.result_limit = 5000;
        type_str(&mut state, "//etc", now);
        assert_eq!(handle_event(&mut state, &Event::Enter, now), vec![Action::Search]);
        assert_eq!(state.last_search_query, "etc");
    }

    #[test]
    fn dir_command_sets_and_clears_filter() {
        let now = Instant::now();
        let mut state = AppState::default();
        type_str(&mut state, "/dir /usr/lib/../share", now);
        assert_eq!(handle_event(&mut state, &Event::Enter, now), vec![Action::Refilter]);
        assert_eq!(state.filter_dir, "/usr/share");

        type_str(&mut state, "/dir ", now);
        assert_eq!(handle_event(&mut state, &Event::Enter, now), vec![Action::Refilter]);
        assert_eq!(state.filter_dir, "");
    }

    #[test]
    fn black_add_appends_once() {
        let now = Instant::now();
        let mut state = AppState::default();
        for _ in 0..2 {
            type_str(&mut state, "/black add /var/cache/", now);
            assert_eq!(handle_event(&mut state, &Event::Enter, now), vec![Action::Refilter]);
        }
        assert_eq!(state.blacklist, paths(&["/var/cache"]));
        assert!(state.undo_stack.is_empty());
    }

    #[test]
    fn black_list_opens_manager_then_refilters() {
        let now = Instant::now();
        let mut state = AppState::default();
        type_str(&mut state, "/black list", now);
        assert_eq!(
            handle_event(&mut state, &Event::Enter, now),
            vec![Action::ManageBlacklist, Action::Refilter]
        );
        assert_eq!(state.input_mode, InputMode::Search);
    }

    #[test]
    fn command_escape_and_backspace_abort() {
        let now = Instant::now();
        let mut state = AppState::default();
        type_str(&mut state, "q", now);
        type_str(&mut state, "/ab", now);
        handle_event(&mut state, &Event::Escape, now);
        assert_eq!(state.input_mode, InputMode::Search);
        assert_eq!(state.input_buffer, "q");

        type_str(&mut state, "/a", now);
        handle_event(&mut state, &Event::Backspace, now);
        assert_eq!(state.input_mode, InputMode::Command);
        assert_eq!(state.input_buffer, "/");
        handle_event(&mut state, &Event::Backspace, now);
        assert_eq!(state.input_mode, InputMode::Search);
        assert_eq!(state.input_buffer, "q");
    }
}
