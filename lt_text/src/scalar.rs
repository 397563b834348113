//! ABOUTME: Precedence resolution and pluralization helpers
//! ABOUTME: Small enough to live together, shared by config and report code

/// Last `Some` wins: resolve default < configured < runtime < override
///
/// # Examples
///
/// ```
/// use lt_text::override_chain;
/// let (default_value, value, command_line_value) = (Some(1), Some(2), Some(3));
/// assert_eq!(override_chain([default_value, value, command_line_value]), Some(3));
/// assert_eq!(override_chain([Some(1), Some(2), None]), Some(2));
/// ```
pub fn override_chain<T, I>(values: I) -> Option<T>
where
    I: IntoIterator<Item = Option<T>>,
    I::IntoIter: DoubleEndedIterator,
{
    values.into_iter().rev().flatten().next()
}

/// `x` when `y` is set, otherwise nothing
pub fn optional<T, U>(x: T, y: Option<U>) -> Option<T> {
    y.map(|_| x)
}

/// `word` with an `s` when there is more than one
pub fn plural(word: &str, count: i64) -> String {
    plural_with(word, count, "s")
}

/// `word` with `suffix` when `count > 1`; zero counts as singular
pub fn plural_with(word: &str, count: i64, suffix: &str) -> String {
    if count > 1 {
        format!("{}{}", word, suffix)
    } else {
        word.to_string()
    }
}
