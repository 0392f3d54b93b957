use crate::cursor::TokenCursor;
use crate::parser::{ParseResult, Parser};
use crate::value::{Args, Value};
use log::trace;

/// Parser that consumes what its sub-parser consumes but reports a fixed pair
///
/// The sub-parser's mapping is discarded and replaced by `{key: value}`.
#[derive(Debug, Clone)]
pub struct Flag<P> {
    key: String,
    value: Value,
    parser: P,
}

impl<P> Flag<P> {
    pub fn new(key: impl Into<String>, value: impl Into<Value>, parser: P) -> Self {
        Flag {
            key: key.into(),
            value: value.into(),
            parser,
        }
    }
}

impl<P: Parser> Parser for Flag<P> {
    fn parse<'t>(&self, cursor: TokenCursor<'t>) -> ParseResult<'t> {
        let (_, cursor) = self.parser.parse(cursor)?;
        trace!("flag `{}` set to {}", self.key, self.value);

        let mut args = Args::new();
        args.insert(self.key.clone(), self.value.clone());
        Ok((args, cursor))
    }
}

/// Convenience function to create a Flag parser
pub fn flag<P: Parser>(key: impl Into<String>, value: impl Into<Value>, parser: P) -> Flag<P> {
    Flag::new(key, value, parser)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParseError;
    use crate::exact::exact;
    use crate::one_of::OrExt;
    use crate::parser::ParserExt;

    #[test]
    fn test_flag_replaces_sub_parser_output() {
        let force = flag("force", "yes", exact("raw", "-f"));

        let (remaining, args) = force.run(&["-f", "pkg"]).unwrap();
        assert_eq!(remaining, vec!["pkg"]);
        assert_eq!(args.len(), 1);
        assert_eq!(args["force"].as_str(), Some("yes"));
        assert!(!args.contains_key("raw"));
    }

    #[test]
    fn test_flag_with_integer_value() {
        let verbosity = flag("level", 2i64, exact("v", "-vv").or(exact("v", "--very-verbose")));

        let (_, args) = verbosity.run(&["--very-verbose"]).unwrap();
        assert_eq!(args["level"].as_int(), Some(2));
    }

    #[test]
    fn test_flag_propagates_failure() {
        let error = flag("force", "yes", exact("raw", "-f")).run(&["-x"]).unwrap_err();
        assert!(matches!(error, ParseError::Mismatch { .. }));
    }
}
