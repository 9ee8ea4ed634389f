//! glocate: an interactive terminal front-end for `locate`.
//!
//! glocate wraps the system file index in a small modal interface:
//! - Incremental search that re-runs `locate` as you type, debounced for large
//!   result limits
//! - A VIM-like select mode for moving through results and acting on them
//! - A directory filter and a prefix blacklist with undo, applied locally
//! - Copy to clipboard, open, open with an arbitrary command, and one-shot
//!   narrowing through any shell pipeline
//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Binary (main.rs)                                   │  ← CLI + config
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  UI Layer (ui/)                                     │  ← Terminal loop
//! │  - Raw mode, key decoding, dialogs                  │
//! │  - Rendering and theming                            │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Mode handlers and slash commands                 │
//! │  - Result filter, debounce, projection              │
//! └─────────────────────────────────────────────────────┘
//!         │                                     │
//! ┌───────────────────┐             ┌───────────────────┐
//! │ Gateway (gateway/)│             │ Infrastructure    │
//! │ - locate, copy,   │             │ - Path resolution │
//! │   open, sh -c     │             │ - Platform dirs   │
//! └───────────────────┘             └───────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! │  - OpenTelemetry tracing, file-based OTLP export    │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Session state, mode handlers, filter, debounce and projection
//! - [`domain`]: Error types
//! - [`gateway`]: External program invocation behind a trait
//! - [`infrastructure`]: Path resolution and platform directories
//! - [`ui`]: Terminal runtime, rendering and themes
//! - `observability`: OpenTelemetry tracing (internal)
//!
//! # Configuration
//!
//! Settings come from built-in defaults, then an optional TOML file, then
//! command line flags:
//!
//! ```toml
//! # ~/.config/glocate/config.toml
//! result_limit = 200
//! delay_limit = 100
//! search_delay_ms = 500
//! dir = "~/src"
//! theme = "catppuccin-mocha"
//! copy_command = "xclip -selection clipboard"
//! ```
//!
//! Nothing is written back; `/set` commands only affect the running session.
//!
//! # Example
//!
//! ```rust
//! use glocate::{handle_event, initialize, Config, Event, InputMode};
//! use std::time::Instant;
//!
//! let config = Config {
//!     result_limit: 20,
//!     ..Config::default()
//! };
//! let mut state = initialize(&config);
//!
//! handle_event(&mut state, &Event::Char('/'), Instant::now());
//! assert_eq!(state.input_mode, InputMode::Command);
//! ```

#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod domain;
pub mod gateway;
pub mod infrastructure;
pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, AppState, Event, InputMode, Session};
pub use domain::{GlocateError, Result};
pub use gateway::{Gateway, ProcessGateway};
pub use ui::Theme;

use app::state::{DEFAULT_DELAY_LIMIT, DEFAULT_RESULT_LIMIT, DEFAULT_SEARCH_DELAY_MS};
use serde::Deserialize;
use std::path::Path;

/// Name of the configuration file inside the platform config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Startup configuration.
///
/// Every field has a default, so a config file only needs the keys it
/// changes. Unknown keys are rejected to catch typos.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Maximum number of results requested from the search program.
    pub result_limit: usize,

    /// Result limit above which typing is debounced instead of searching on
    /// every keystroke.
    pub delay_limit: usize,

    /// Quiet interval before a debounced search fires, in milliseconds.
    pub search_delay_ms: u64,

    /// Directory filter applied from the start, resolved like `/dir`.
    #[serde(rename = "dir")]
    pub initial_dir: Option<String>,

    /// Built-in theme name: `classic` or `catppuccin-mocha`.
    ///
    /// Ignored if `theme_file` is set.
    #[serde(rename = "theme")]
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file. See [`ui::theme`] for the format.
    pub theme_file: Option<String>,

    /// Tracing level: `trace`, `debug`, `info`, `warn`, `error` or `off`.
    pub trace_level: Option<String>,

    /// Search program, invoked as `<program> -l <limit> <query>`.
    pub search_program: String,

    /// Clipboard command; the text is written to its stdin.
    pub copy_command: String,

    /// Opener command; the path is appended as the last argument.
    pub open_command: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            result_limit: DEFAULT_RESULT_LIMIT,
            delay_limit: DEFAULT_DELAY_LIMIT,
            search_delay_ms: DEFAULT_SEARCH_DELAY_MS,
            initial_dir: None,
            theme_name: None,
            theme_file: None,
            trace_level: None,
            search_program: "locate".to_string(),
            copy_command: "wl-copy".to_string(),
            open_command: "xdg-open".to_string(),
        }
    }
}

impl Config {
    /// Loads configuration from `path`, or from the default location.
    ///
    /// With an explicit path the file must exist. Without one,
    /// `<config dir>/config.toml` is read if present and defaults are used
    /// otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`GlocateError::Config`] if the file cannot be read or parsed.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => match infrastructure::config_dir().map(|dir| dir.join(CONFIG_FILE_NAME)) {
                Some(default) if default.is_file() => default,
                _ => {
                    tracing::debug!("no config file found, using defaults");
                    return Ok(Self::default());
                }
            },
        };

        let content = std::fs::read_to_string(&path)
            .map_err(|e| GlocateError::Config(format!("failed to read {}: {e}", path.display())))?;
        tracing::debug!(path = %path.display(), "loading config file");
        toml::from_str(&content)
            .map_err(|e| GlocateError::Config(format!("{}: {}", path.display(), e.message())))
    }

    /// Parses configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`GlocateError::Config`] if the text is not valid configuration.
    ///
    /// # Example
    ///
    /// ```rust
    /// use glocate::Config;
    ///
    /// let config = Config::from_toml_str("result_limit = 500\ndelay_limit = 100").unwrap();
    /// assert_eq!(config.result_limit, 500);
    /// assert_eq!(config.search_program, "locate");
    /// ```
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| GlocateError::Config(e.message().to_string()))
    }
}

/// Builds the initial session state from configuration.
///
/// Resolves the theme (`theme_file` wins over `theme_name`, failures fall
/// back to the default theme), copies the numeric settings and sets the
/// initial directory filter. Zero values keep the defaults, like a rejected
/// `/set` command would.
///
/// # Example
///
/// ```rust
/// use glocate::{initialize, Config};
///
/// let config = Config {
///     initial_dir: Some("/usr/share/../lib".to_string()),
///     ..Config::default()
/// };
///
/// let state = initialize(&config);
/// assert_eq!(state.filter_dir, "/usr/lib");
/// ```
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!("initializing glocate session");

    let theme = config.theme_file.as_ref().map_or_else(
        || {
            config.theme_name.as_ref().map_or_else(
                Theme::default,
                |theme_name| {
                    Theme::from_name(theme_name).unwrap_or_else(|| {
                        tracing::debug!(theme_name = %theme_name, "unknown theme, using default");
                        Theme::default()
                    })
                },
            )
        },
        |theme_file| {
            Theme::from_file(theme_file).unwrap_or_else(|e| {
                tracing::debug!(theme_file = %theme_file, error = %e, "failed to load theme from file, using default");
                Theme::default()
            })
        },
    );

    let mut state = AppState::new(theme);
    if config.result_limit > 0 {
        state.result_limit = config.result_limit;
    }
    if config.delay_limit > 0 {
        state.delay_limit = config.delay_limit;
    }
    if config.search_delay_ms > 0 {
        state.search_delay_ms = config.search_delay_ms;
    }
    if let Some(dir) = config.initial_dir.as_deref().map(str::trim).filter(|dir| !dir.is_empty()) {
        state.filter_dir = infrastructure::resolve_path(dir);
    }

    tracing::debug!(
        result_limit = state.result_limit,
        delay_limit = state.delay_limit,
        search_delay_ms = state.search_delay_ms,
        filter_dir = %state.filter_dir,
        "session initialized"
    );
    state
}
