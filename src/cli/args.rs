/// The tool's own command line, read with `ArgsReader`.
use std::str::FromStr;

use argsreading::{ArgsError, ArgsReader, ReaderOptions};

use crate::errors::ToolError;

pub const HELP: &str = "\
argsreading: apply declared flags and options to a command line and report what was read

Usage: argsreading [OPTIONS] -- [TARGET_ARGS...]

Options:
  -f, --flag <NAME>                 Declare a flag; repeatable, aliases separated by '|'
  -o, --option <NAME>               Declare an option that takes a value; repeatable
      --short-ignore-case           Match short target options case-insensitively
      --long-ignore-case            Match long target options case-insensitively
      --long-ignore-kebab-case      Treat --foo-bar and --foobar as the same target option
      --no-options-after-double-dash
                                    Take target arguments after '--' literally
      --output <FORMAT>             auto, json, compact or table [default: auto]
      --json                        Shorthand for --output json
      --no-header                   Omit table headers
      --debug                       Log reader activity and timing to stderr
  -h, --help                        Print help
  -V, --version                     Print version

Target options are read first, then target flags, then positional arguments.
Anything left over is reported as an error.
";

/// Output format variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Auto-detect: table when stdout is a TTY, json when piped.
    #[default]
    Auto,
    /// Pretty-printed JSON.
    Json,
    /// Compact single-line JSON.
    Compact,
    /// Aligned table (human-readable).
    Table,
}

impl FromStr for OutputFormat {
    type Err = ToolError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "json" => Ok(Self::Json),
            "compact" => Ok(Self::Compact),
            "table" => Ok(Self::Table),
            _ => Err(ToolError::InvalidFormat {
                value: value.to_owned(),
            }),
        }
    }
}

/// A parsed `argsreading` invocation.
#[derive(Debug, PartialEq, Eq)]
pub enum Invocation {
    Help,
    Version,
    Inspect(Cli),
}

/// Everything needed to inspect the target arguments.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Cli {
    /// Declared flag names, in order.
    pub flags: Vec<String>,
    /// Declared option names, in order.
    pub options: Vec<String>,
    /// Matching options for the target reader.
    pub reader: ReaderOptions,
    pub output: OutputFormat,
    pub json: bool,
    pub no_header: bool,
    pub debug: bool,
    /// Tokens after the first `--`.
    pub target: Vec<String>,
}

/// Parse the tool's command line (without the program name).
///
/// # Errors
///
/// Returns `ToolError` if the tool's own options are malformed or unknown.
pub fn parse(args: Vec<String>) -> Result<Invocation, ToolError> {
    let (own, target) = split_at_double_dash(args);

    let mut reader = ArgsReader::with_options(own, own_options());

    let (invocation, output) = read_own(&mut reader, target).map_err(ToolError::tool)?;
    match (invocation, output) {
        (Invocation::Inspect(mut cli), Some(value)) => {
            cli.output = value.parse()?;
            Ok(Invocation::Inspect(cli))
        }
        (invocation, _) => Ok(invocation),
    }
}

/// Format for reporting a failed [`parse`] of `args`.
///
/// Reads `--json` and `--output` from the tokens before the first `--`,
/// ignoring anything malformed. Without either, errors are plain text.
#[must_use]
pub fn error_format(args: &[String]) -> (OutputFormat, bool) {
    let own = args.iter().take_while(|arg| arg.as_str() != "--");
    let mut reader = ArgsReader::with_options(own.cloned(), own_options());
    let json = reader.read_flag("json").unwrap_or(false);
    let output = reader
        .read_option("output")
        .ok()
        .flatten()
        .and_then(|value| value.parse().ok())
        .unwrap_or(OutputFormat::Table);
    (output, json)
}

/// The tool's own long options ignore case and kebab separators.
fn own_options() -> ReaderOptions {
    ReaderOptions {
        long_option_ignore_case: true,
        long_option_ignore_kebab_case: true,
        ..ReaderOptions::default()
    }
}

fn read_own(
    reader: &mut ArgsReader,
    target: Vec<String>,
) -> Result<(Invocation, Option<String>), ArgsError> {
    if reader.read_flag("h|?|help")? {
        return Ok((Invocation::Help, None));
    }
    if reader.read_flag("V|version")? {
        return Ok((Invocation::Version, None));
    }

    let flags = reader.read_options("f|flag")?;
    let options = reader.read_options("o|option")?;
    let output = reader.read_option("output")?;

    let cli = Cli {
        flags,
        options,
        reader: ReaderOptions {
            short_option_ignore_case: reader.read_flag("short-ignore-case")?,
            long_option_ignore_case: reader.read_flag("long-ignore-case")?,
            long_option_ignore_kebab_case: reader.read_flag("long-ignore-kebab-case")?,
            no_options_after_double_dash: reader.read_flag("no-options-after-double-dash")?,
        },
        output: OutputFormat::Auto,
        json: reader.read_flag("json")?,
        no_header: reader.read_flag("no-header")?,
        debug: reader.read_flag("debug")?,
        target,
    };

    reader.verify_complete()?;
    Ok((Invocation::Inspect(cli), output))
}

/// Split at the first `--`, which is dropped.
fn split_at_double_dash(mut args: Vec<String>) -> (Vec<String>, Vec<String>) {
    match args.iter().position(|arg| arg == "--") {
        Some(index) => {
            let target = args.split_off(index + 1);
            args.pop();
            (args, target)
        }
        None => (args, Vec::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_strs(args: &[&str]) -> Result<Invocation, ToolError> {
        parse(args.iter().map(|s| (*s).to_owned()).collect())
    }

    fn inspect(args: &[&str]) -> Cli {
        match parse_strs(args) {
            Ok(Invocation::Inspect(cli)) => cli,
            other => panic!("expected inspect, got {other:?}"),
        }
    }

    #[test]
    fn test_split_at_double_dash() {
        let args = vec!["-f".to_owned(), "v".to_owned(), "--".to_owned(), "--".to_owned()];
        let (own, target) = split_at_double_dash(args);
        assert_eq!(own, ["-f", "v"]);
        assert_eq!(target, ["--"]);
    }

    #[test]
    fn test_declarations_and_target() {
        let cli = inspect(&["-f", "v|verbose", "--option", "n|name", "-f", "q", "--", "-v", "x"]);
        assert_eq!(cli.flags, ["v|verbose", "q"]);
        assert_eq!(cli.options, ["n|name"]);
        assert_eq!(cli.target, ["-v", "x"]);
        assert_eq!(cli.reader, ReaderOptions::default());
        assert_eq!(cli.output, OutputFormat::Auto);
    }

    #[test]
    fn test_reader_switches() {
        let cli = inspect(&[
            "--short-ignore-case",
            "--long-ignore-case",
            "--LongIgnoreKebabCase",
            "--no-options-after-double-dash",
        ]);
        assert!(cli.reader.short_option_ignore_case);
        assert!(cli.reader.long_option_ignore_case);
        assert!(cli.reader.long_option_ignore_kebab_case);
        assert!(cli.reader.no_options_after_double_dash);
        assert!(cli.target.is_empty());
    }

    #[test]
    fn test_output_format() {
        let cli = inspect(&["--output", "table", "--no-header", "--json", "--debug"]);
        assert_eq!(cli.output, OutputFormat::Table);
        assert!(cli.json);
        assert!(cli.no_header);
        assert!(cli.debug);

        assert!(matches!(
            parse_strs(&["--output", "yaml"]),
            Err(ToolError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn test_help_and_version() {
        assert_eq!(parse_strs(&["--help", "--bogus"]).unwrap(), Invocation::Help);
        assert_eq!(parse_strs(&["-?"]).unwrap(), Invocation::Help);
        assert_eq!(parse_strs(&["-V"]).unwrap(), Invocation::Version);
    }

    #[test]
    fn test_error_format() {
        let owned = |args: &[&str]| -> Vec<String> {
            args.iter().map(|s| (*s).to_owned()).collect()
        };
        assert_eq!(
            error_format(&owned(&["--json", "--bogus"])),
            (OutputFormat::Table, true)
        );
        assert_eq!(
            error_format(&owned(&["--bogus", "--output", "compact"])),
            (OutputFormat::Compact, false)
        );
        assert_eq!(
            error_format(&owned(&["--output", "yaml"])),
            (OutputFormat::Table, false)
        );
        assert_eq!(
            error_format(&owned(&["--output"])),
            (OutputFormat::Table, false)
        );
        assert_eq!(
            error_format(&owned(&["--bogus", "--", "--json"])),
            (OutputFormat::Table, false)
        );
    }

    #[test]
    fn test_unknown_tool_option() {
        let err = parse_strs(&["--bogus", "--", "x"]).unwrap_err();
        assert_eq!(err.to_string(), "unexpected option '--bogus'");
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_target_without_double_dash_is_rejected() {
        let err = parse_strs(&["-f", "v", "stray"]).unwrap_err();
        assert_eq!(err.to_string(), "unexpected argument 'stray'");
    }

    #[test]
    fn test_declaration_missing_value() {
        let err = parse_strs(&["--flag"]).unwrap_err();
        assert_eq!(err.to_string(), "missing value after '--flag'");
    }
}
