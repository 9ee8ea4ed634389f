//! Slash command parsing.
//!
//! Command mode collects a line beginning with `/`. On Enter the leading `/` is
//! stripped and the rest is matched against a small set of case-sensitive
//! prefixes. Anything that does not match is not an error: the handler treats
//! the text as a new search query instead.

/// A recognized command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlashCommand {
    /// `set result=<n>`. `None` when the value is not a positive integer.
    SetResultLimit(Option<usize>),

    /// `set delaylimit=<n>`.
    SetDelayLimit(Option<usize>),

    /// `set delay=<ms>`.
    SetSearchDelay(Option<u64>),

    /// `dir <path>`. An empty path clears the directory filter.
    Dir(String),

    /// `black list`: open the Blacklist Manager.
    BlacklistManage,

    /// `black add <path>`.
    BlacklistAdd(String),
}

impl SlashCommand {
    /// Parses a command line with its leading `/` already removed.
    ///
    /// Returns `None` for anything unrecognized.
    ///
    /// # Examples
    ///
    /// ```
    /// use glocate::app::SlashCommand;
    ///
    /// assert_eq!(SlashCommand::parse("set result=10"), Some(SlashCommand::SetResultLimit(Some(10))));
    /// assert_eq!(SlashCommand::parse("dir ~/src"), Some(SlashCommand::Dir("~/src".into())));
    /// assert_eq!(SlashCommand::parse("xyz"), None);
    /// ```
    #[must_use]
    pub fn parse(line: &str) -> Option<Self> {
        if let Some(value) = line.strip_prefix("set result=") {
            Some(Self::SetResultLimit(parse_setting(value)))
        } else if let Some(value) = line.strip_prefix("set delaylimit=") {
            Some(Self::SetDelayLimit(parse_setting(value)))
        } else if let Some(value) = line.strip_prefix("set delay=") {
            Some(Self::SetSearchDelay(parse_setting(value)))
        } else if let Some(path) = line.strip_prefix("dir ") {
            Some(Self::Dir(path.trim().to_string()))
        } else if line.starts_with("black list") {
            Some(Self::BlacklistManage)
        } else if let Some(path) = line.strip_prefix("black add ") {
            Some(Self::BlacklistAdd(path.trim().to_string()))
        } else {
            None
        }
    }
}

/// Parses a numeric setting value.
///
/// Only the text up to a further `=` counts. Zero, negative and non-numeric
/// values yield `None` so the previous setting is kept.
fn parse_setting<T>(value: &str) -> Option<T>
where
    T: std::str::FromStr + PartialOrd + Default,
{
    let value = value.split('=').next().unwrap_or_default().trim();
    value.parse::<T>().ok().filter(|n| *n > T::default())
}
