use crate::cursor::TokenCursor;
use crate::error::{BoxError, ParseError};
use crate::parser::{ParseResult, Parser};
use crate::value::{Args, Value};
use log::trace;
use std::fmt;
use std::path::{Path, PathBuf};

/// Signature of the built-in conversion functions
pub type ConvertFn = fn(&str) -> Result<Value, BoxError>;

/// Parser that consumes exactly one token and stores its converted value under `key`
///
/// The conversion function may fail with a [`ParseError`], which is passed on
/// unchanged, or with any other error, which is reported as
/// [`ParseError::Conversion`].
pub struct Converter<F = ConvertFn> {
    key: String,
    convert: F,
}

impl<F> Converter<F>
where
    F: Fn(&str) -> Result<Value, BoxError>,
{
    pub fn new(key: impl Into<String>, convert: F) -> Self {
        Converter {
            key: key.into(),
            convert,
        }
    }
}

impl Converter {
    /// Keeps the token as a string
    pub fn string(key: impl Into<String>) -> Self {
        Self::new(key, keep_string)
    }

    /// Parses the token as a signed 64-bit integer
    pub fn integer(key: impl Into<String>) -> Self {
        Self::new(key, to_integer)
    }

    /// Resolves the token to an absolute path that must exist on disk
    pub fn existing_path(key: impl Into<String>) -> Self {
        Self::new(key, to_existing_path)
    }
}

impl<F> fmt::Debug for Converter<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Converter")
            .field("key", &self.key)
            .field("convert", &"<function>")
            .finish()
    }
}

impl<F> Parser for Converter<F>
where
    F: Fn(&str) -> Result<Value, BoxError>,
{
    fn parse<'t>(&self, cursor: TokenCursor<'t>) -> ParseResult<'t> {
        let token = cursor
            .value()
            .ok_or_else(|| ParseError::missing(&self.key))?;
        let value = (self.convert)(token)
            .map_err(|e| ParseError::from_conversion(&self.key, token, e))?;
        trace!("`{}` converted `{}` to {:?}", self.key, token, value);

        let mut args = Args::new();
        args.insert(self.key.clone(), value);
        Ok((args, cursor.next()))
    }
}

fn keep_string(token: &str) -> Result<Value, BoxError> {
    Ok(Value::from(token))
}

fn to_integer(token: &str) -> Result<Value, BoxError> {
    Ok(Value::Int(token.parse::<i64>()?))
}

fn to_existing_path(token: &str) -> Result<Value, BoxError> {
    let path = Path::new(token);
    if !path.exists() {
        return Err(Box::new(ParseError::PathNotFound(path.to_path_buf())));
    }
    let absolute: PathBuf = std::path::absolute(path)?;
    Ok(Value::Path(absolute))
}
