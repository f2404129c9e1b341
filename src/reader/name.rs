/// Option names: `|`-separated aliases, their command-line rendering, and
/// matching against tokens under the configured normalization.
use std::borrow::Cow;

use super::{ArgsError, ReaderOptions};

/// Alias separator inside a caller-supplied name, as in `h|help`.
const ALIAS_SEPARATOR: char = '|';

/// One alias of a caller-supplied name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Alias<'a> {
    /// Exactly one character, rendered `-x`.
    Short(&'a str),
    /// Anything longer, rendered `--xyzzy`.
    Long(&'a str),
}

impl<'a> Alias<'a> {
    fn new(alias: &'a str) -> Self {
        let mut chars = alias.chars();
        match (chars.next(), chars.next()) {
            (Some(_), None) => Self::Short(alias),
            _ => Self::Long(alias),
        }
    }

    /// The alias as it appears on the command line.
    pub(crate) fn render(self) -> String {
        match self {
            Self::Short(name) => format!("-{name}"),
            Self::Long(name) => format!("--{name}"),
        }
    }

    /// Whether `token` is this alias under `opts`.
    pub(crate) fn matches(self, token: &str, opts: ReaderOptions) -> bool {
        match self {
            Self::Short(name) => match token.strip_prefix('-') {
                Some(rest) if opts.short_option_ignore_case => {
                    rest.to_lowercase() == name.to_lowercase()
                }
                Some(rest) => rest == name,
                None => false,
            },
            Self::Long(name) => match token.strip_prefix("--") {
                Some(rest) => normalize_long(rest, opts) == normalize_long(name, opts),
                None => false,
            },
        }
    }
}

/// Case folding first, then kebab separators removed.
///
/// Only hyphens between words are separators; leading and trailing ones are
/// kept, so `---xyzzy` never matches `xyzzy`.
fn normalize_long<'s>(name: &'s str, opts: ReaderOptions) -> Cow<'s, str> {
    let mut name = Cow::Borrowed(name);
    if opts.long_option_ignore_case {
        name = Cow::Owned(name.to_lowercase());
    }
    if opts.long_option_ignore_kebab_case {
        let inner = name.trim_matches('-');
        if inner.contains('-') {
            let start = name.len() - name.trim_start_matches('-').len();
            let end = start + inner.len();
            name = Cow::Owned(format!(
                "{}{}{}",
                &name[..start],
                inner.replace('-', ""),
                &name[end..]
            ));
        }
    }
    name
}

/// Split `name` into its aliases, rejecting empty ones.
///
/// All aliases are validated before any is used, so an invalid name never
/// consumes a token.
pub(crate) fn parse(name: &str) -> Result<Vec<Alias<'_>>, ArgsError> {
    name.split(ALIAS_SEPARATOR)
        .map(|alias| {
            if alias.is_empty() {
                Err(ArgsError::InvalidName {
                    name: name.to_owned(),
                })
            } else {
                Ok(Alias::new(alias))
            }
        })
        .collect()
}

/// Render a single alias the way it is written on the command line:
/// `-x` for one character, `--xyzzy` otherwise.
#[must_use]
pub fn render_option(alias: &str) -> String {
    Alias::new(alias).render()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts(short_case: bool, long_case: bool, kebab: bool) -> ReaderOptions {
        ReaderOptions {
            short_option_ignore_case: short_case,
            long_option_ignore_case: long_case,
            long_option_ignore_kebab_case: kebab,
            no_options_after_double_dash: false,
        }
    }

    #[test]
    fn test_render() {
        assert_eq!(render_option("x"), "-x");
        assert_eq!(render_option("xyzzy"), "--xyzzy");
        assert_eq!(render_option("é"), "-é");
        assert_eq!(render_option("?"), "-?");
    }

    #[test]
    fn test_parse_aliases() {
        let aliases = parse("h|?|help").unwrap();
        assert_eq!(
            aliases,
            vec![Alias::Short("h"), Alias::Short("?"), Alias::Long("help")]
        );
    }

    #[test]
    fn test_parse_rejects_empty() {
        for name in ["", "|", "x|", "|x", "x||y"] {
            assert_eq!(
                parse(name),
                Err(ArgsError::InvalidName {
                    name: name.to_owned()
                }),
                "{name:?}"
            );
        }
    }

    #[test]
    fn test_short_match() {
        let strict = ReaderOptions::default();
        assert!(Alias::Short("x").matches("-x", strict));
        assert!(!Alias::Short("x").matches("-X", strict));
        assert!(!Alias::Short("x").matches("--x", strict));
        assert!(!Alias::Short("x").matches("x", strict));
        assert!(Alias::Short("x").matches("-X", opts(true, false, false)));
        assert!(!Alias::Short("x").matches("-X", opts(false, true, true)));
    }

    #[test]
    fn test_long_match() {
        let strict = ReaderOptions::default();
        assert!(Alias::Long("xyzzy").matches("--xyzzy", strict));
        assert!(!Alias::Long("xyzzy").matches("-xyzzy", strict));
        assert!(!Alias::Long("xyzzy").matches("--Xyzzy", strict));
        assert!(Alias::Long("xyzzY").matches("--Xyzzy", opts(false, true, false)));
        assert!(!Alias::Long("xyzzY").matches("--Xyzzy", opts(true, false, true)));
    }

    #[test]
    fn test_long_kebab_match() {
        let kebab = opts(false, false, true);
        assert!(Alias::Long("xyz-zy").matches("--xyzzy", kebab));
        assert!(Alias::Long("xyzzy").matches("--xyz-zy", kebab));
        assert!(!Alias::Long("xyz-zy").matches("--xyzzy", ReaderOptions::default()));
        assert!(!Alias::Long("xyz-zy").matches("--XYZZY", kebab));
    }

    #[test]
    fn test_kebab_keeps_outer_hyphens() {
        let kebab = opts(false, false, true);
        assert!(!Alias::Long("xyzzy").matches("---xyzzy", kebab));
        assert!(!Alias::Long("xyzzy").matches("--xyzzy-", kebab));
        assert!(Alias::Long("xyzzy").matches("--x-y-z-z-y", kebab));
        assert!(Alias::Long("-xyz-zy").matches("---xyzzy", kebab));
        assert_eq!(normalize_long("-a-b-", kebab), "-ab-");
        assert_eq!(normalize_long("---", kebab), "---");
    }

    #[test]
    fn test_case_and_kebab_compose() {
        let both = opts(false, true, true);
        assert!(Alias::Long("xyz-zy").matches("--XYZZY", both));
        assert!(Alias::Long("xyzzy").matches("--XYZ-Zy", both));
    }
}
