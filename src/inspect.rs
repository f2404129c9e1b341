/// Apply the declared flags and options to the target arguments.
use argsreading::{ArgsError, ArgsReader};
use tracing::debug;

use crate::cli::Cli;
use crate::types::{FlagOutput, InspectOutput, OptionOutput};

/// Read the target arguments the way a program declaring `cli.flags` and
/// `cli.options` would: options first, then flags, then positional
/// arguments, then verify nothing is left.
///
/// # Errors
///
/// Returns the first `ArgsError` raised by the target reader.
pub fn inspect(cli: &Cli) -> Result<InspectOutput, ArgsError> {
    let mut reader = ArgsReader::with_options(cli.target.iter().cloned(), cli.reader);
    debug!(tokens = reader.len(), options = ?cli.reader, "inspecting target arguments");

    let mut options = Vec::with_capacity(cli.options.len());
    for name in &cli.options {
        let value = reader.read_option(name)?;
        options.push(OptionOutput {
            name: name.clone(),
            value,
        });
    }

    let mut flags = Vec::with_capacity(cli.flags.len());
    for name in &cli.flags {
        let present = reader.read_flag(name)?;
        flags.push(FlagOutput {
            name: name.clone(),
            present,
        });
    }

    let arguments = reader.read_arguments()?;
    reader.verify_complete()?;

    Ok(InspectOutput {
        ok: true,
        reader: cli.reader,
        flags,
        options,
        arguments,
    })
}

#[cfg(test)]
mod tests {
    use argsreading::ReaderOptions;

    use super::*;

    fn owned(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| (*s).to_owned()).collect()
    }

    fn cli(flags: &[&str], options: &[&str], target: &[&str]) -> Cli {
        Cli {
            flags: owned(flags),
            options: owned(options),
            target: owned(target),
            ..Cli::default()
        }
    }

    #[test]
    fn test_end_to_end() {
        let result = inspect(&cli(&["b"], &["c"], &["a", "-b", "-c", "d", "e"])).unwrap();
        assert_eq!(
            result.flags,
            [FlagOutput {
                name: "b".to_owned(),
                present: true
            }]
        );
        assert_eq!(
            result.options,
            [OptionOutput {
                name: "c".to_owned(),
                value: Some("d".to_owned())
            }]
        );
        assert_eq!(result.arguments, ["a", "e"]);
    }

    #[test]
    fn test_absent_declarations() {
        let result = inspect(&cli(&["v"], &["n|name"], &["x"])).unwrap();
        assert!(!result.flags[0].present);
        assert_eq!(result.options[0].value, None);
        assert_eq!(result.arguments, ["x"]);
    }

    #[test]
    fn test_undeclared_option_fails() {
        let err = inspect(&cli(&[], &[], &["x", "-q"])).unwrap_err();
        assert_eq!(
            err,
            ArgsError::UnexpectedOption {
                token: "-q".to_owned()
            }
        );
    }

    #[test]
    fn test_double_dash_literal() {
        let mut cli = cli(&[], &[], &["a", "--", "-q"]);
        cli.reader = ReaderOptions {
            no_options_after_double_dash: true,
            ..ReaderOptions::default()
        };
        assert_eq!(inspect(&cli).unwrap().arguments, ["a", "-q"]);
    }

    #[test]
    fn test_invalid_declaration() {
        let err = inspect(&cli(&["v|"], &[], &[])).unwrap_err();
        assert!(err.is_usage_error());
    }
}
