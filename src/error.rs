use std::path::PathBuf;
use thiserror::Error;

/// Boxed error returned by caller-supplied conversion functions
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// The single failure kind produced by every parser in this crate
#[derive(Debug, Error)]
pub enum ParseError {
    /// Input ran out before a required token was read
    #[error("missing argument for `{key}`")]
    MissingArgument { key: String },

    /// A literal matcher saw a different token than it expected
    #[error("expected `{expected}` but got `{found}`")]
    Mismatch { expected: String, found: String },

    /// Every candidate of an alternation failed
    #[error("none of the alternatives were suitable")]
    NoAlternative,

    /// Tokens were left over where the input should have ended
    #[error("expected no more arguments but received: {}", .0.join(" "))]
    TrailingArguments(Vec<String>),

    #[error("path {} does not exist", .0.display())]
    PathNotFound(PathBuf),

    /// A conversion function failed with an error that is not a `ParseError`.
    ///
    /// This is the only kind alternation does not recover from.
    #[error("cannot convert `{token}` for `{key}`: {source}")]
    Conversion {
        key: String,
        token: String,
        #[source]
        source: BoxError,
    },
}

impl ParseError {
    pub fn missing(key: impl Into<String>) -> Self {
        ParseError::MissingArgument { key: key.into() }
    }

    /// Whether an alternation may discard this error and try its next candidate
    pub fn is_backtrackable(&self) -> bool {
        !matches!(self, ParseError::Conversion { .. })
    }

    /// Normalize an error raised by a conversion function.
    ///
    /// A `ParseError` raised inside the function passes through untouched, anything
    /// else becomes [`ParseError::Conversion`].
    pub(crate) fn from_conversion(key: &str, token: &str, error: BoxError) -> Self {
        match error.downcast::<ParseError>() {
            Ok(parse_error) => *parse_error,
            Err(source) => ParseError::Conversion {
                key: key.to_string(),
                token: token.to_string(),
                source,
            },
        }
    }
}
