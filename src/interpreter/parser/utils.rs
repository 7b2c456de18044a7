use std::iter::Peekable;

use crate::{
    error::ParseError,
    interpreter::{lexer::{Position, Token}, parser::core::ParseResult},
};

/// Nesting state threaded through the recursive descent.
///
/// Each `(` and `'` enters a new level. The parser recurses once per level,
/// so capping the depth caps the stack the parser, the evaluator and the
/// printer can use on a single value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseScope {
    depth: usize,
    limit: usize,
    end:   Position,
}

impl ParseScope {
    /// Creates the top-level scope.
    ///
    /// # Parameters
    /// - `limit`: The deepest nesting allowed.
    /// - `end`: The position reported when input runs out.
    #[must_use]
    pub const fn new(limit: usize, end: Position) -> Self {
        Self { depth: 0,
               limit,
               end }
    }

    /// Enters one nesting level opened at `position`.
    ///
    /// # Errors
    /// Returns `NestingTooDeep` if the new level would exceed the limit.
    pub fn enter(self, position: Position) -> ParseResult<Self> {
        if self.depth >= self.limit {
            return Err(ParseError::NestingTooDeep { limit: self.limit,
                                                    position });
        }

        Ok(Self { depth: self.depth + 1,
                  ..self })
    }

    /// The position just past the end of the input.
    #[must_use]
    pub const fn end(self) -> Position {
        self.end
    }
}

/// Skips a whitespace token if one is next.
pub(in crate::interpreter::parser) fn skip_whitespace<'a, I>(tokens: &mut Peekable<I>)
    where I: Iterator<Item = &'a (Token, Position)>
{
    tokens.next_if(|(token, _)| *token == Token::Whitespace);
}

/// Consumes the whitespace that separates list elements.
///
/// # Errors
/// Returns a `ParseError` if the next token is not whitespace or the input
/// ends.
pub(in crate::interpreter::parser) fn expect_whitespace<'a, I>(tokens: &mut Peekable<I>,
                                                               scope: ParseScope)
                                                               -> ParseResult<()>
    where I: Iterator<Item = &'a (Token, Position)>
{
    match tokens.next() {
        Some((Token::Whitespace, _)) => Ok(()),
        Some((token, position)) => {
            Err(ParseError::UnexpectedToken { token:    format!("Expected whitespace, found {token}"),
                                              position: *position, })
        },
        None => Err(ParseError::UnexpectedEndOfInput { position: scope.end() }),
    }
}

/// Consumes the `)` that closes a list.
///
/// # Errors
/// Returns a `ParseError` if the next token is not `)` or the input ends.
pub(in crate::interpreter::parser) fn expect_closing_paren<'a, I>(tokens: &mut Peekable<I>,
                                                                  scope: ParseScope)
                                                                  -> ParseResult<()>
    where I: Iterator<Item = &'a (Token, Position)>
{
    match tokens.next() {
        Some((Token::RParen, _)) => Ok(()),
        Some((token, position)) => {
            Err(ParseError::UnexpectedToken { token:    format!("Expected ')', found {token}"),
                                              position: *position, })
        },
        None => Err(ParseError::UnexpectedEndOfInput { position: scope.end() }),
    }
}
