//! Prefix matching shared by the project and branch filters.

/// Returns true if any pattern is a prefix of `value`.
///
/// An absent pattern set never matches. An empty set also never matches, which is
/// what makes an explicit empty inclusion list select nothing.
/// Comparison is case-sensitive with no normalization.
///
/// # Examples
/// ```
/// use gitlab_debranch::filter::matches;
///
/// let patterns = vec!["feature/".to_string()];
/// assert!(matches("feature/login", Some(patterns.as_slice())));
/// assert!(!matches("bugfix/login", Some(patterns.as_slice())));
/// assert!(!matches("feature/login", None));
/// ```
pub fn matches(value: &str, patterns: Option<&[String]>) -> bool {
    patterns.is_some_and(|patterns| patterns.iter().any(|p| value.starts_with(p.as_str())))
}
