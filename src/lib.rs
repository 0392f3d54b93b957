//! # ArgComb - Command-Line Token Combinators
//!
//! A declarative combinator library for parsing command-line-style token
//! sequences into a key/value mapping.
//!
//! Small parsers are composed into a tree once and then run against the full
//! token sequence. Every parser consumes a prefix of its input and returns the
//! mapping it produced together with the remaining tokens:
//!
//! - **Primitives**: [`Exact`] literals, [`Converter`]s (string, integer,
//!   existing path, or any function) and the [`NoMoreArgs`] terminator
//! - **Combinators**: sequencing with `+` ([`Chain`]), ordered alternation with
//!   backtracking ([`OneOf`]), [`Optional`] and [`Flag`]
//! - **Errors**: a single [`ParseError`] type; only alternation recovers from failure
//!
//! ```
//! use argcomb::{help, Converter, Exact, NoMoreArgs, ParserExt};
//!
//! let install = Exact::new("cmd", "install") + Converter::string("target") + NoMoreArgs;
//! let cli = help().or(install);
//!
//! let (remaining, args) = cli.run(&["install", "pkgA"]).unwrap();
//! assert!(remaining.is_empty());
//! assert_eq!(args["cmd"].as_str(), Some("install"));
//! assert_eq!(args["target"].as_str(), Some("pkgA"));
//!
//! let (_, args) = cli.run(&["--help"]).unwrap();
//! assert_eq!(args["help"].as_str(), Some("--help"));
//!
//! assert!(cli.run(&["install", "pkgA", "extra"]).is_err());
//! ```

pub mod chain;
pub mod converter;
pub mod cursor;
pub mod error;
pub mod exact;
pub mod flag;
pub mod help;
pub mod no_more_args;
pub mod one_of;
pub mod optional;
pub mod parser;
pub mod value;

pub use chain::{Chain, ChainExt};
pub use converter::{ConvertFn, Converter};
pub use cursor::TokenCursor;
pub use error::{BoxError, ParseError};
pub use exact::{Exact, exact};
pub use flag::{Flag, flag};
pub use help::help;
pub use no_more_args::{NoMoreArgs, no_more_args};
pub use one_of::{OneOf, OrExt, one_of};
pub use optional::{Optional, optional};
pub use parser::{BoxedParser, ParseResult, Parser, ParserExt};
pub use value::{Args, Value};
