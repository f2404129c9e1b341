#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! argsreading: pull flags, options and positional arguments out of a
//! command line, in any order.
//!
//! Construct an [`ArgsReader`] from the process arguments, read the supported
//! options one at a time with [`ArgsReader::read_flag`] and
//! [`ArgsReader::read_option`], read positional arguments with
//! [`ArgsReader::read_argument`] or [`ArgsReader::read_arguments`], and finish
//! with [`ArgsReader::verify_complete`], which fails if anything was left
//! unread.
//!
//! ```
//! use argsreading::ArgsReader;
//!
//! let mut args = ArgsReader::new(["input.txt", "-v", "--level", "3"]);
//! let verbose = args.read_flag("v|verbose")?;
//! let level = args.read_option("l|level")?;
//! let input = args.read_argument()?;
//! args.verify_complete()?;
//!
//! assert!(verbose);
//! assert_eq!(level.as_deref(), Some("3"));
//! assert_eq!(input.as_deref(), Some("input.txt"));
//! # Ok::<(), argsreading::ArgsError>(())
//! ```

pub mod reader;

pub use reader::{ArgsError, ArgsReader, ReaderOptions, is_option, render_option};
