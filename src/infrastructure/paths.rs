//! Path manipulation utilities.
//!
//! Paths typed by the user (`/dir ~/src`, `/black add ../build`) are resolved with
//! plain string manipulation: a leading `~` is expanded to the home directory,
//! relative paths are joined onto the working directory, and `.`/`..` components
//! are collapsed. None of these functions touch the filesystem or fail; a path
//! that cannot be resolved further is returned as-is.
//!
//! The module also locates the platform configuration and data directories used
//! for the optional config file and trace output.

use directories::{BaseDirs, ProjectDirs};
use std::path::PathBuf;

/// Application name used for platform directory lookup.
const APP_NAME: &str = "glocate";

/// Resolves a user-typed path to an absolute, normalized path string.
///
/// Uses the current user's home directory for `~` expansion and the process
/// working directory for relative paths. Falls back to `/` when the working
/// directory is unavailable.
///
/// # Examples
///
/// ```
/// use glocate::infrastructure::resolve_path;
///
/// assert_eq!(resolve_path("/usr/lib/../share"), "/usr/share");
/// ```
#[must_use]
pub fn resolve_path(input: &str) -> String {
    let home = BaseDirs::new().map(|dirs| dirs.home_dir().to_string_lossy().into_owned());
    let cwd = std::env::current_dir()
        .map(|dir| dir.to_string_lossy().into_owned())
        .unwrap_or_else(|_| "/".to_string());
    resolve_path_from(input, home.as_deref(), &cwd)
}

/// Resolves `input` against an explicit home and working directory.
///
/// This is the pure core of [`resolve_path`].
///
/// # Examples
///
/// ```
/// use glocate::infrastructure::resolve_path_from;
///
/// assert_eq!(resolve_path_from("~/src", Some("/home/ann"), "/tmp"), "/home/ann/src");
/// assert_eq!(resolve_path_from("build/./out", None, "/work"), "/work/build/out");
/// assert_eq!(resolve_path_from("../..", None, "/a/b/c"), "/a");
/// ```
#[must_use]
pub fn resolve_path_from(input: &str, home: Option<&str>, cwd: &str) -> String {
    let expanded = expand_tilde(input, home);
    if expanded.starts_with('/') {
        normalize(&expanded)
    } else {
        normalize(&format!("{cwd}/{expanded}"))
    }
}

/// Expands a leading `~` or `~/` to `home`.
///
/// `~user` forms and paths without a leading tilde are returned unchanged, as is
/// everything when no home directory is known.
#[must_use]
pub fn expand_tilde(path: &str, home: Option<&str>) -> String {
    match home {
        Some(home) if path == "~" => home.to_string(),
        Some(home) if path.starts_with("~/") => {
            format!("{}/{}", home.trim_end_matches('/'), &path[2..])
        }
        _ => path.to_string(),
    }
}

/// Collapses `.`, `..` and repeated separators in an absolute path.
///
/// `..` at the root stays at the root. The result never carries a trailing
/// separator except for `/` itself.
#[must_use]
pub fn normalize(path: &str) -> String {
    let mut parts: Vec<&str> = Vec::new();
    for component in path.split('/') {
        match component {
            "" | "." => {}
            ".." => {
                parts.pop();
            }
            other => parts.push(other),
        }
    }
    format!("/{}", parts.join("/"))
}

/// Returns the directory portion of `path`.
///
/// Everything up to the last `/`, with trailing separators stripped unless the
/// directory is the root itself. A path without any `/` has an empty parent.
///
/// # Examples
///
/// ```
/// use glocate::infrastructure::parent_dir;
///
/// assert_eq!(parent_dir("/a/b/c.txt"), "/a/b");
/// assert_eq!(parent_dir("/c.txt"), "/");
/// assert_eq!(parent_dir("c.txt"), "");
/// ```
#[must_use]
pub fn parent_dir(path: &str) -> String {
    let Some(idx) = path.rfind('/') else {
        return String::new();
    };
    let head = &path[..=idx];
    if head.chars().all(|c| c == '/') {
        head.to_string()
    } else {
        head.trim_end_matches('/').to_string()
    }
}

/// Returns the final component of `path` (everything after the last `/`).
#[must_use]
pub fn file_name(path: &str) -> &str {
    path.rfind('/').map_or(path, |idx| &path[idx + 1..])
}

/// Returns the platform configuration directory for glocate, if one exists.
///
/// On Linux this is `$XDG_CONFIG_HOME/glocate` (usually `~/.config/glocate`).
#[must_use]
pub fn config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", APP_NAME).map(|dirs| dirs.config_dir().to_path_buf())
}

/// Returns the data directory used for trace output.
///
/// On Linux this is `$XDG_DATA_HOME/glocate` (usually `~/.local/share/glocate`).
/// Falls back to a directory under the system temp dir when no home is known.
#[must_use]
pub fn data_dir() -> PathBuf {
    ProjectDirs::from("", "", APP_NAME).map_or_else(
        || std::env::temp_dir().join(APP_NAME),
        |dirs| dirs.data_local_dir().to_path_buf(),
    )
}
