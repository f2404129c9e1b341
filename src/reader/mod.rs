//! The argument reader: a mutable list of remaining tokens that flags,
//! options and positional arguments are pulled out of.
pub mod errors;
pub mod name;
pub mod options;
pub mod token;

pub use errors::ArgsError;
pub use name::render_option;
pub use options::ReaderOptions;
pub use token::is_option;

use std::ffi::OsStr;

use tracing::{debug, trace};

use name::Alias;
use token::DOUBLE_DASH;

/// Helps process command-line arguments.
///
/// Read the supported flags and options first, then the positional
/// arguments, then call [`verify_complete`](Self::verify_complete) to reject
/// anything that was not read. Every successful read removes the tokens it
/// matched, so the remaining list only ever shrinks.
///
/// Names passed to [`read_flag`](Self::read_flag) and
/// [`read_option`](Self::read_option) may list several aliases separated by
/// `|`, e.g. `h|?|help`. Single-character aliases are matched as `-h`, longer
/// ones as `--help`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgsReader {
    args: Vec<String>,
    options: ReaderOptions,
}

impl ArgsReader {
    /// Create a reader over a copy of `args`.
    #[must_use]
    pub fn new<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_options(args, ReaderOptions::default())
    }

    /// Create a reader over a copy of `args` with the given matching options.
    #[must_use]
    pub fn with_options<I, S>(args: I, options: ReaderOptions) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            args: args.into_iter().map(Into::into).collect(),
            options,
        }
    }

    /// Create a reader over the current process arguments, minus the program name.
    ///
    /// Arguments that are not valid Unicode are converted lossily.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_os_args(std::env::args_os().skip(1))
    }

    /// Create a reader over OS strings, replacing invalid Unicode with `U+FFFD`.
    #[must_use]
    pub fn from_os_args<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        Self::new(
            args.into_iter()
                .map(|arg| arg.as_ref().to_string_lossy().into_owned()),
        )
    }

    /// The current matching options.
    #[must_use]
    pub fn options(&self) -> ReaderOptions {
        self.options
    }

    /// Mutable access to the matching options; changes apply to later reads.
    pub fn options_mut(&mut self) -> &mut ReaderOptions {
        &mut self.options
    }

    /// Match short options (`-x`) case-insensitively.
    pub fn set_short_option_ignore_case(&mut self, value: bool) {
        self.options.short_option_ignore_case = value;
    }

    /// Match long options (`--xyzzy`) case-insensitively.
    pub fn set_long_option_ignore_case(&mut self, value: bool) {
        self.options.long_option_ignore_case = value;
    }

    /// Treat `--xyz-zy` and `--xyzzy` as the same long option.
    pub fn set_long_option_ignore_kebab_case(&mut self, value: bool) {
        self.options.long_option_ignore_kebab_case = value;
    }

    /// Make [`read_arguments`](Self::read_arguments) take everything after `--` literally.
    pub fn set_no_options_after_double_dash(&mut self, value: bool) {
        self.options.no_options_after_double_dash = value;
    }

    /// The tokens not yet read, in command-line order.
    #[must_use]
    pub fn remaining(&self) -> &[String] {
        &self.args
    }

    /// Number of tokens not yet read.
    #[must_use]
    pub fn len(&self) -> usize {
        self.args.len()
    }

    /// Whether every token has been read.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }

    /// Give up on verification and take the unread tokens.
    #[must_use]
    pub fn into_remaining(self) -> Vec<String> {
        self.args
    }

    /// Read the specified flag, returning `true` if it was found.
    ///
    /// A found flag is removed, so reading the same name again returns `false`
    /// unless the flag was given more than once. With several aliases, they
    /// are tried in order and only the first match is consumed.
    ///
    /// # Errors
    ///
    /// Returns [`ArgsError::InvalidName`] if `name` or one of its aliases is empty.
    pub fn read_flag(&mut self, name: &str) -> Result<bool, ArgsError> {
        for alias in name::parse(name)? {
            if let Some(index) = self.position(alias) {
                let token = self.args.remove(index);
                trace!(%token, index, "read flag");
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Read the value of the specified option, if any.
    ///
    /// A found option is removed together with the value that follows it.
    /// With several aliases, they are tried in order and the first value found
    /// is returned.
    ///
    /// # Errors
    ///
    /// Returns [`ArgsError::InvalidName`] if `name` or one of its aliases is
    /// empty, or [`ArgsError::MissingValue`] if the option is the last token or
    /// is followed by another option. Nothing is removed on error.
    pub fn read_option(&mut self, name: &str) -> Result<Option<String>, ArgsError> {
        for alias in name::parse(name)? {
            if let Some(index) = self.position(alias) {
                return self.take_option(alias, index).map(Some);
            }
        }
        Ok(None)
    }

    /// Read every value of a repeatable option, in command-line order.
    ///
    /// Unlike [`read_option`](Self::read_option), occurrences of all aliases
    /// are interleaved by position, so `-I a --include b -I c` yields
    /// `a, b, c`.
    ///
    /// # Errors
    ///
    /// Same as [`read_option`](Self::read_option). Values read before the
    /// failing occurrence have already been removed.
    pub fn read_options(&mut self, name: &str) -> Result<Vec<String>, ArgsError> {
        let aliases = name::parse(name)?;
        let mut values = Vec::new();
        while let Some((index, alias)) = self.find(&aliases) {
            values.push(self.take_option(alias, index)?);
        }
        Ok(values)
    }

    /// Read the next positional argument, or `None` when no tokens remain.
    ///
    /// Read all options before positional arguments: this never skips over an
    /// option.
    ///
    /// # Errors
    ///
    /// Returns [`ArgsError::UnexpectedOption`] if the next token looks like an
    /// option.
    pub fn read_argument(&mut self) -> Result<Option<String>, ArgsError> {
        let Some(first) = self.args.first() else {
            return Ok(None);
        };
        if is_option(first) {
            let err = ArgsError::UnexpectedOption {
                token: first.clone(),
            };
            debug!(%err, "read argument failed");
            return Err(err);
        }
        let value = self.args.remove(0);
        trace!(%value, "read argument");
        Ok(Some(value))
    }

    /// Read all remaining positional arguments.
    ///
    /// `--` is an ordinary argument unless
    /// [`no_options_after_double_dash`](ReaderOptions::no_options_after_double_dash)
    /// is set, in which case the first `--` is dropped and every token after it
    /// is returned verbatim, even ones that look like options.
    ///
    /// # Errors
    ///
    /// Returns [`ArgsError::UnexpectedOption`] on the first option-looking token
    /// that is not protected by `--`.
    pub fn read_arguments(&mut self) -> Result<Vec<String>, ArgsError> {
        let mut values = Vec::new();
        loop {
            if self.options.no_options_after_double_dash
                && self.args.first().is_some_and(|token| token == DOUBLE_DASH)
            {
                self.args.remove(0);
                trace!(count = self.args.len(), "read literal arguments after '--'");
                values.append(&mut self.args);
                break;
            }
            match self.read_argument()? {
                Some(value) => values.push(value),
                None => break,
            }
        }
        Ok(values)
    }

    /// Confirm that every token was read.
    ///
    /// # Errors
    ///
    /// Returns [`ArgsError::UnexpectedOption`] or
    /// [`ArgsError::UnexpectedArgument`] naming the first unread token.
    pub fn verify_complete(&self) -> Result<(), ArgsError> {
        let Some(first) = self.args.first() else {
            return Ok(());
        };
        let token = first.clone();
        let err = if is_option(first) {
            ArgsError::UnexpectedOption { token }
        } else {
            ArgsError::UnexpectedArgument { token }
        };
        debug!(%err, remaining = self.args.len(), "verify complete failed");
        Err(err)
    }

    /// First token matching any of `aliases`, with the alias that matched.
    fn find<'a>(&self, aliases: &[Alias<'a>]) -> Option<(usize, Alias<'a>)> {
        self.args.iter().enumerate().find_map(|(index, token)| {
            aliases
                .iter()
                .find(|alias| alias.matches(token, self.options))
                .map(|alias| (index, *alias))
        })
    }

    fn position(&self, alias: Alias<'_>) -> Option<usize> {
        self.find(&[alias]).map(|(index, _)| index)
    }

    /// Remove the option at `index` and its value.
    fn take_option(&mut self, alias: Alias<'_>, index: usize) -> Result<String, ArgsError> {
        match self.args.get(index + 1) {
            Some(value) if !is_option(value) => {}
            _ => {
                let err = ArgsError::MissingValue {
                    option: alias.render(),
                };
                debug!(%err, index, "read option failed");
                return Err(err);
            }
        }
        let token = self.args.remove(index);
        let value = self.args.remove(index);
        trace!(%token, %value, index, "read option");
        Ok(value)
    }
}
