//! Result Filter.
//!
//! A pure function from raw search results to the filtered view: keep a path if
//! it lies under the directory filter (when one is set) and no blacklist entry is
//! a prefix of it. Order is preserved, so the output is always a subsequence of
//! the input, and filtering twice with the same settings changes nothing.
//!
//! Matching is plain string-prefix matching, exactly as the paths are reported by
//! the search tool.

/// Returns the paths of `raw` that pass the directory filter and the blacklist.
///
/// An empty `filter_dir` disables the directory filter.
///
/// # Examples
///
/// ```
/// use glocate::app::filter_results;
///
/// let raw = vec!["/a/b".to_string(), "/a/c".to_string(), "/x/y".to_string()];
/// let out = filter_results(&raw, "", &["/a".to_string()]);
/// assert_eq!(out, vec!["/x/y".to_string()]);
/// ```
#[must_use]
pub fn filter_results(raw: &[String], filter_dir: &str, blacklist: &[String]) -> Vec<String> {
    raw.iter()
        .filter(|path| filter_dir.is_empty() || path.starts_with(filter_dir))
        .filter(|path| !blacklist.iter().any(|prefix| path.starts_with(prefix.as_str())))
        .cloned()
        .collect()
}
