/// Matching switches for [`ArgsReader`](super::ArgsReader).
use serde::{Deserialize, Serialize};

/// How option names are matched and how `--` is treated.
///
/// Everything defaults to exact, case-sensitive matching with `--` read as an
/// ordinary positional argument.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReaderOptions {
    /// `-x` also matches `-X`.
    pub short_option_ignore_case: bool,
    /// `--xyzzy` also matches `--XYZZY`.
    pub long_option_ignore_case: bool,
    /// `--xyz-zy` and `--xyzzy` name the same option.
    pub long_option_ignore_kebab_case: bool,
    /// After `--`, [`read_arguments`](super::ArgsReader::read_arguments) takes
    /// every token literally and drops the `--` itself.
    pub no_options_after_double_dash: bool,
}
