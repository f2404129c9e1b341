/// Errors from the `argsreading` tool itself.
use argsreading::ArgsError;
use thiserror::Error;

/// Which command line an [`ArgsError`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    /// The tool's own options, before the first `--`.
    Tool,
    /// The target arguments, after the first `--`.
    Target,
}

impl Source {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Tool => "tool",
            Self::Target => "target",
        }
    }
}

/// Errors that end a run of the tool.
#[derive(Debug, Error)]
pub enum ToolError {
    /// Reading either command line failed.
    #[error("{error}")]
    Args {
        /// The command line that failed.
        source_kind: Source,
        /// The underlying reader error.
        #[source]
        error: ArgsError,
    },

    /// `--output` named an unknown format.
    #[error("invalid output format '{value}' (expected auto, json, compact or table)")]
    InvalidFormat {
        /// The value given.
        value: String,
    },
}

impl ToolError {
    #[must_use]
    pub fn tool(error: ArgsError) -> Self {
        Self::Args {
            source_kind: Source::Tool,
            error,
        }
    }

    #[must_use]
    pub fn target(error: ArgsError) -> Self {
        Self::Args {
            source_kind: Source::Target,
            error,
        }
    }

    /// Return the process exit code for this error.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Args { error, .. } => error.exit_code(),
            Self::InvalidFormat { .. } => 2,
        }
    }

    /// Machine-readable error code (`snake_case`).
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Args { error, .. } => error.code(),
            Self::InvalidFormat { .. } => "invalid_format",
        }
    }

    /// The command line at fault.
    #[must_use]
    pub fn source_kind(&self) -> Source {
        match self {
            Self::Args { source_kind, .. } => *source_kind,
            Self::InvalidFormat { .. } => Source::Tool,
        }
    }
}
