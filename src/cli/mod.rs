/// CLI layer: the tool's own argument parsing and output formatting.
pub mod args;
pub mod output;

pub use args::{Cli, HELP, Invocation, error_format, parse};
pub use output::{OutputCtx, write_error, write_inspect};
