/// Serializable output types.
///
/// These are what gets written to stdout (or stderr, for errors): either as
/// JSON or rendered as a table.
use argsreading::ReaderOptions;
use serde::{Deserialize, Serialize};

use crate::errors::ToolError;

/// A declared flag and whether it was present.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FlagOutput {
    /// The name as declared, aliases included (e.g. "v|verbose").
    pub name: String,
    /// Whether any alias was found.
    pub present: bool,
}

/// A declared option and its value, if given.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OptionOutput {
    /// The name as declared.
    pub name: String,
    /// The value that followed the option, or null.
    pub value: Option<String>,
}

/// Result of applying the declared flags and options to the target arguments.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct InspectOutput {
    /// Always `true`.
    pub ok: bool,
    /// Matching options the target reader ran with.
    pub reader: ReaderOptions,
    /// Declared flags, in declaration order.
    pub flags: Vec<FlagOutput>,
    /// Declared options, in declaration order.
    pub options: Vec<OptionOutput>,
    /// Positional arguments left after flags and options were read.
    pub arguments: Vec<String>,
}

/// A structured error envelope for JSON error output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorOutput {
    /// Always `false`.
    pub ok: bool,
    /// Error details.
    pub error: ErrorDetail,
}

/// Error detail in the JSON error envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// Machine-readable error code (`snake_case`).
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// "tool" or "target"; absent for internal failures.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

impl ErrorOutput {
    /// Construct from a `ToolError`.
    #[must_use]
    pub fn from_tool_error(err: &ToolError) -> Self {
        Self::new(
            err.code(),
            err.to_string(),
            Some(err.source_kind().as_str().to_owned()),
        )
    }

    /// Construct from any other failure (I/O, serialization).
    #[must_use]
    pub fn internal(err: &anyhow::Error) -> Self {
        Self::new("internal", format!("{err:#}"), None)
    }

    fn new(code: &str, message: String, source: Option<String>) -> Self {
        Self {
            ok: false,
            error: ErrorDetail {
                code: code.to_owned(),
                message,
                source,
            },
        }
    }
}
