use crate::cursor::TokenCursor;
use crate::parser::{ParseResult, Parser};
use crate::value::Args;

/// Parser that may be skipped when the input has run out
///
/// Only the absence of any remaining input is tolerated. If tokens remain, the
/// wrapped parser runs and its failure, if any, propagates unchanged.
#[derive(Debug, Clone)]
pub struct Optional<P> {
    parser: P,
}

impl<P> Optional<P> {
    pub fn new(parser: P) -> Self {
        Optional { parser }
    }
}

impl<P: Parser> Parser for Optional<P> {
    fn parse<'t>(&self, cursor: TokenCursor<'t>) -> ParseResult<'t> {
        if cursor.is_end() {
            return Ok((Args::new(), cursor));
        }
        self.parser.parse(cursor)
    }
}

/// Convenience function to create an Optional parser
pub fn optional<P: Parser>(parser: P) -> Optional<P> {
    Optional::new(parser)
}
