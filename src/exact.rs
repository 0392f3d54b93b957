use crate::cursor::TokenCursor;
use crate::error::ParseError;
use crate::parser::{ParseResult, Parser};
use crate::value::{Args, Value};
use log::trace;

/// Parser that matches one literal token and records it under `key`
///
/// An empty expected literal also matches the end of input without consuming
/// anything, which lets `Exact::new(key, "")` act as an implicit default.
#[derive(Debug, Clone)]
pub struct Exact {
    key: String,
    expected: String,
}

impl Exact {
    pub fn new(key: impl Into<String>, expected: impl Into<String>) -> Self {
        Exact {
            key: key.into(),
            expected: expected.into(),
        }
    }

    fn matched(&self) -> Args {
        let mut args = Args::new();
        args.insert(self.key.clone(), Value::from(self.expected.as_str()));
        args
    }
}

impl Parser for Exact {
    fn parse<'t>(&self, cursor: TokenCursor<'t>) -> ParseResult<'t> {
        match cursor.value() {
            Some(token) if token == self.expected => {
                trace!("`{}` matched literal `{}`", self.key, token);
                Ok((self.matched(), cursor.next()))
            }
            Some(token) => Err(ParseError::Mismatch {
                expected: self.expected.clone(),
                found: token.to_string(),
            }),
            None if self.expected.is_empty() => Ok((self.matched(), cursor)),
            None => Err(ParseError::missing(&self.key)),
        }
    }
}

/// Convenience function to create an Exact parser
pub fn exact(key: impl Into<String>, expected: impl Into<String>) -> Exact {
    Exact::new(key, expected)
}
