/// A position in a borrowed token sequence
///
/// Cursors are `Copy`, so a parser can hold on to the cursor it was given and
/// retry from it after a failed attempt. Advancing only ever drops tokens from the
/// front, which keeps every remaining view a suffix of the original input.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TokenCursor<'t> {
    Valid {
        tokens: &'t [&'t str],
        position: usize,
    },
    End {
        tokens: &'t [&'t str],
    },
}

impl<'t> TokenCursor<'t> {
    pub fn new(tokens: &'t [&'t str]) -> Self {
        if tokens.is_empty() {
            return TokenCursor::End { tokens };
        }
        TokenCursor::Valid {
            tokens,
            position: 0,
        }
    }

    /// The token under the cursor, or `None` once the input is exhausted
    pub fn value(&self) -> Option<&'t str> {
        match self {
            TokenCursor::Valid { tokens, position } => Some(tokens[*position]),
            TokenCursor::End { .. } => None,
        }
    }

    /// Advance past the current token. Stays put at the end.
    pub fn next(self) -> Self {
        match self {
            TokenCursor::Valid { tokens, position } => {
                if position + 1 >= tokens.len() {
                    TokenCursor::End { tokens }
                } else {
                    TokenCursor::Valid {
                        tokens,
                        position: position + 1,
                    }
                }
            }
            TokenCursor::End { tokens } => TokenCursor::End { tokens },
        }
    }

    pub fn position(&self) -> usize {
        match self {
            TokenCursor::Valid { position, .. } => *position,
            TokenCursor::End { tokens } => tokens.len(),
        }
    }

    pub fn is_end(&self) -> bool {
        matches!(self, TokenCursor::End { .. })
    }

    /// The full sequence this cursor walks over
    pub fn source(&self) -> &'t [&'t str] {
        match self {
            TokenCursor::Valid { tokens, .. } => tokens,
            TokenCursor::End { tokens } => tokens,
        }
    }

    /// Tokens not yet consumed
    pub fn remaining(&self) -> &'t [&'t str] {
        &self.source()[self.position()..]
    }
}
