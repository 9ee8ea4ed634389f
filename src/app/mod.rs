//! Application layer coordinating state, events, and actions.
//!
//! This module holds everything the interactive session decides, independent
//! of the terminal: the state aggregate, the per-mode key handlers, the result
//! filter, the debounce, and the projection into view models. External programs
//! are reached only through [`Gateway`](crate::gateway::Gateway) and modal input
//! only through [`Dialogs`].
//!
//! # Architecture
//!
//! ```text
//! key → Event → handle_event → AppState mutations + Actions
//!                                             ↓
//!                     Session::tick → Gateway / Dialogs → AppState
//!                                             ↓
//!                        compute_viewmodel → UIViewModel → renderer
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect requests emitted by the handlers
//! - [`command`]: Slash command parsing
//! - [`debounce`]: Keystroke debounce for expensive searches
//! - [`dialogs`]: Line prompt and Blacklist Manager state machines
//! - [`filter`]: Directory filter and blacklist
//! - [`handler`]: Per-mode key handling
//! - [`modes`]: Input mode type
//! - [`projection`]: Scroll window and view model computation
//! - [`session`]: One loop iteration over state, gateway and dialogs
//! - [`state`]: Central application state container
//!
//! # Example
//!
//! ```rust
//! use glocate::app::{handle_event, AppState, Event, InputMode};
//! use std::time::Instant;
//!
//! let mut state = AppState::default();
//! state.apply_search_results(vec!["/etc/hosts".into()]);
//! handle_event(&mut state, &Event::Enter, Instant::now());
//! assert_eq!(state.input_mode, InputMode::Select);
//! assert_eq!(state.selected_path(), Some("/etc/hosts"));
//! ```

pub mod actions;
pub mod command;
pub mod debounce;
pub mod dialogs;
pub mod filter;
pub mod handler;
pub mod modes;
pub mod projection;
pub mod session;
pub mod state;

pub use actions::Action;
pub use command::SlashCommand;
pub use debounce::Debounce;
pub use dialogs::{BlacklistEditor, Dialogs, LinePrompt, PromptOutcome};
pub use filter::filter_results;
pub use handler::{handle_event, Event};
pub use modes::InputMode;
pub use session::Session;
pub use state::{AppState, StatusMessage};
