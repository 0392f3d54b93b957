use crate::cursor::TokenCursor;
use crate::error::ParseError;
use crate::parser::{BoxedParser, ParseResult, Parser, ParserExt};
use log::debug;
use std::fmt;

/// Parser combinator that tries each candidate in order against the same input
///
/// The first candidate to succeed wins, even if a later one would have consumed
/// more. A failed candidate leaves no trace: the next one starts again from the
/// original cursor. Candidate-specific messages are dropped when every candidate
/// fails, except for [`ParseError::Conversion`], which is returned immediately.
#[derive(Default)]
pub struct OneOf {
    candidates: Vec<BoxedParser>,
}

impl OneOf {
    pub fn new(candidates: Vec<BoxedParser>) -> Self {
        OneOf { candidates }
    }

    /// Append another candidate, tried after all existing ones
    pub fn or<P>(mut self, candidate: P) -> Self
    where
        P: Parser + Send + Sync + 'static,
    {
        self.candidates.push(candidate.boxed());
        self
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}

impl fmt::Debug for OneOf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OneOf")
            .field("candidates", &self.candidates.len())
            .finish()
    }
}

impl Parser for OneOf {
    fn parse<'t>(&self, cursor: TokenCursor<'t>) -> ParseResult<'t> {
        for (index, candidate) in self.candidates.iter().enumerate() {
            match candidate.parse(cursor) {
                Ok(result) => return Ok(result),
                Err(e) if e.is_backtrackable() => {
                    debug!("candidate {} rejected at token {}: {}", index, cursor.position(), e);
                }
                Err(e) => return Err(e),
            }
        }
        debug!(
            "all {} candidates rejected at token {}",
            self.candidates.len(),
            cursor.position()
        );
        Err(ParseError::NoAlternative)
    }
}

/// Extension trait to add .or() method support for parsers
pub trait OrExt: Parser + Sized + Send + Sync + 'static {
    fn or<P>(self, other: P) -> OneOf
    where
        P: Parser + Send + Sync + 'static,
    {
        OneOf::new(vec![self.boxed(), other.boxed()])
    }
}

/// Implement OrExt for all parsers
impl<P> OrExt for P where P: Parser + Send + Sync + 'static {}

/// Convenience function to create a OneOf parser
pub fn one_of(candidates: Vec<BoxedParser>) -> OneOf {
    OneOf::new(candidates)
}
