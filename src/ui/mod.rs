//! User interface rendering layer with component-based architecture.
//!
//! This module turns view models into ANSI-styled frames and drives the
//! terminal. Rendering writes to any [`std::io::Write`], so frames can be
//! inspected in tests; [`terminal`] owns the real terminal via `crossterm`.
//!
//! # Architecture
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → render → ANSI Output
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types representing renderable UI state
//! - [`renderer`]: Top-level rendering coordinator
//! - [`components`]: Composable UI component renderers
//! - [`helpers`]: Shared rendering utilities (width, truncation, highlighting)
//! - [`theme`]: Color scheme definitions and ANSI escape sequence generation
//! - [`terminal`]: Raw-mode terminal session, key decoding, and modal dialogs

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod terminal;
pub mod theme;
pub mod viewmodel;

pub use renderer::{render, render_blacklist, render_prompt};
pub use terminal::{decode_key, Input, Terminal};
pub use theme::Theme;
pub use viewmodel::{
    BlacklistViewModel, CursorPosition, DisplayItem, InputBarInfo, StatusInfo, UIViewModel,
};
