use crate::cursor::TokenCursor;
use crate::error::ParseError;
use crate::parser::{ParseResult, Parser};
use crate::value::Args;

/// Parser that succeeds only at the end of input
///
/// Placed last in a chain to reject unrecognized trailing tokens.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoMoreArgs;

impl Parser for NoMoreArgs {
    fn parse<'t>(&self, cursor: TokenCursor<'t>) -> ParseResult<'t> {
        if cursor.is_end() {
            return Ok((Args::new(), cursor));
        }
        let leftover = cursor.remaining().iter().map(|t| t.to_string()).collect();
        Err(ParseError::TrailingArguments(leftover))
    }
}

/// Convenience function to create a NoMoreArgs parser
pub fn no_more_args() -> NoMoreArgs {
    NoMoreArgs
}
