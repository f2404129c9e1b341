/// Errors raised while reading a command line.
use thiserror::Error;

/// Errors that can occur while reading arguments.
///
/// [`ArgsError::InvalidName`] is a usage error: the calling code passed a name
/// that can never match. Every other variant is a parse error caused by the
/// command line itself.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArgsError {
    /// A flag or option name (or one of its `|` aliases) was empty.
    #[error("invalid flag or option name '{name}': names and aliases must not be empty")]
    InvalidName {
        /// The name as passed by the caller.
        name: String,
    },

    /// An option was the last token, or was followed by another option.
    #[error("missing value after '{option}'")]
    MissingValue {
        /// The rendered option, e.g. `--name`.
        option: String,
    },

    /// An option-looking token was found where a positional argument was expected.
    #[error("unexpected option '{token}'")]
    UnexpectedOption {
        /// The offending token.
        token: String,
    },

    /// A positional argument was left unread.
    #[error("unexpected argument '{token}'")]
    UnexpectedArgument {
        /// The offending token.
        token: String,
    },
}

impl ArgsError {
    /// Whether this error points at a defect in the calling code.
    #[must_use]
    pub fn is_usage_error(&self) -> bool {
        matches!(self, Self::InvalidName { .. })
    }

    /// Whether this error was caused by the end-user command line.
    #[must_use]
    pub fn is_parse_error(&self) -> bool {
        !self.is_usage_error()
    }

    /// Return the conventional process exit code for this error.
    ///
    /// Parse errors map to `2` (bad command line); usage errors map to `64`.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidName { .. } => 64,
            Self::MissingValue { .. }
            | Self::UnexpectedOption { .. }
            | Self::UnexpectedArgument { .. } => 2,
        }
    }

    /// Machine-readable error code (`snake_case`).
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidName { .. } => "invalid_name",
            Self::MissingValue { .. } => "missing_value",
            Self::UnexpectedOption { .. } => "unexpected_option",
            Self::UnexpectedArgument { .. } => "unexpected_argument",
        }
    }
}
