//! ABOUTME: Fixed-precision rendering of token amounts with a unit symbol

pub const DEFAULT_DIGITS: usize = 4;
pub const DEFAULT_SYMBOL: &str = "SYS";

/// `amount` with exactly `n_digits` decimals, a space, then `symbol`
///
/// # Examples
///
/// ```
/// use lt_text::format_tokens;
/// assert_eq!(format_tokens(37.5e6, 4, "SYS"), "37500000.0000 SYS");
/// assert_eq!(format_tokens(1.0, 3, "ABC"), "1.000 ABC");
/// ```
pub fn format_tokens(amount: f64, n_digits: usize, symbol: &str) -> String {
    format!("{:.*} {}", n_digits, amount, symbol)
}
