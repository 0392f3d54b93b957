use crate::cursor::TokenCursor;
use crate::error::ParseError;
use crate::value::Args;
use std::sync::Arc;

/// Outcome of a single parse step: the mapping produced and where the input now stands
pub type ParseResult<'t> = Result<(Args, TokenCursor<'t>), ParseError>;

/// A parser stored behind a trait object, as held by [`Chain`](crate::Chain) and
/// [`OneOf`](crate::OneOf)
pub type BoxedParser = Box<dyn Parser + Send + Sync>;

/// Core parser trait for token-sequence combinators
pub trait Parser {
    /// Attempt to parse from the given cursor position
    ///
    /// Returns the produced mapping and the cursor past everything consumed on
    /// success. A failure carries no partial result.
    fn parse<'t>(&self, cursor: TokenCursor<'t>) -> ParseResult<'t>;
}

impl<P: Parser + ?Sized> Parser for Box<P> {
    fn parse<'t>(&self, cursor: TokenCursor<'t>) -> ParseResult<'t> {
        (**self).parse(cursor)
    }
}

impl<P: Parser + ?Sized> Parser for &P {
    fn parse<'t>(&self, cursor: TokenCursor<'t>) -> ParseResult<'t> {
        (**self).parse(cursor)
    }
}

impl<P: Parser + ?Sized> Parser for Arc<P> {
    fn parse<'t>(&self, cursor: TokenCursor<'t>) -> ParseResult<'t> {
        (**self).parse(cursor)
    }
}

/// Extension trait with the invocation entry point and boxing helper
pub trait ParserExt: Parser {
    /// Parse a complete token sequence
    ///
    /// Returns the unconsumed trailing tokens and the result mapping.
    fn run<S: AsRef<str>>(&self, tokens: &[S]) -> Result<(Vec<String>, Args), ParseError> {
        let tokens: Vec<&str> = tokens.iter().map(|t| t.as_ref()).collect();
        let (args, cursor) = self.parse(TokenCursor::new(&tokens))?;
        let remaining = cursor.remaining().iter().map(|t| t.to_string()).collect();
        Ok((remaining, args))
    }

    fn boxed(self) -> BoxedParser
    where
        Self: Sized + Send + Sync + 'static,
    {
        Box::new(self)
    }
}

/// Implement ParserExt for all parsers
impl<P: Parser + ?Sized> ParserExt for P {}
