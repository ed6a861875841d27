use crate::error::{SyntaxError, SyntaxErrorKind};
use crate::lexer::Token;

/// Position into an immutable token slice.
///
/// The index only moves forward, except for [`Cursor::retreat`], which steps
/// back exactly one token after a production has read past its own end.
/// The index stays within `0..=len`; reading at `len` yields `None`.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Cursor { tokens, pos: 0 }
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn is_at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    pub fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    pub fn peek_is(&self, literal: &str) -> bool {
        self.peek().is_some_and(|t| t.is(literal))
    }

    pub fn advance(&mut self) -> Option<&'a Token> {
        let token = self.tokens.get(self.pos)?;
        self.pos += 1;
        Some(token)
    }

    /// Advance, treating end of input as an error that names what the
    /// production was looking for.
    pub fn next_token(&mut self, expected: &str) -> Result<&'a Token, SyntaxError> {
        match self.advance() {
            Some(token) => Ok(token),
            None => Err(self.eof(expected)),
        }
    }

    /// Consume `literal` or fail without moving.
    pub fn expect(&mut self, literal: &str) -> Result<&'a Token, SyntaxError> {
        match self.peek() {
            Some(token) if token.is(literal) => {
                self.pos += 1;
                Ok(token)
            }
            Some(token) => Err(SyntaxError::at(
                token,
                SyntaxErrorKind::Expected {
                    expected: literal.to_owned(),
                    found: token.text.clone(),
                },
            )),
            None => Err(self.eof(&format!("'{}'", literal))),
        }
    }

    /// Consume whichever of `literals` is next.
    pub fn expect_one_of(&mut self, literals: &[&str]) -> Result<&'a Token, SyntaxError> {
        match self.peek() {
            Some(token) if literals.iter().any(|l| token.is(l)) => {
                self.pos += 1;
                Ok(token)
            }
            Some(token) => Err(SyntaxError::at(
                token,
                SyntaxErrorKind::Expected {
                    expected: literals.join(" | "),
                    found: token.text.clone(),
                },
            )),
            None => Err(self.eof(&format!("'{}'", literals.join(" | ")))),
        }
    }

    /// Step back one token. Saturates at the start of the stream.
    pub fn retreat(&mut self) {
        self.pos = self.pos.saturating_sub(1);
    }

    /// End-of-input error, reported on the last line that produced a token.
    pub fn eof(&self, expected: &str) -> SyntaxError {
        let line = self.tokens.last().map_or(1, |t| t.line);
        SyntaxError::new(
            SyntaxErrorKind::UnexpectedEof {
                expected: expected.to_owned(),
            },
            line,
        )
    }
}
