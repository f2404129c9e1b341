//! Token classification.

/// The conventional end-of-options separator.
pub const DOUBLE_DASH: &str = "--";

/// Whether `token` looks like an option: at least two characters, a leading
/// `-`, and not exactly `--`.
///
/// A lone `-` (commonly "stdin") is a positional argument.
#[must_use]
pub fn is_option(token: &str) -> bool {
    token.starts_with('-') && token.chars().nth(1).is_some() && token != DOUBLE_DASH
}
