use std::iter::Peekable;

use crate::{
    error::ParseError,
    interpreter::{
        lexer::{Position, Token},
        parser::{
            core::{ParseResult, parse_expression},
            utils::{ParseScope, expect_closing_paren, expect_whitespace},
        },
        value::core::Value,
    },
};

/// Parses the expression after a `'` and wraps it in `(quote ...)`.
///
/// The expression must follow the quote directly; `' x` is an error.
///
/// # Parameters
/// - `tokens`: Token iterator positioned after the `'`.
/// - `scope`: Nesting state for the quoted expression.
pub(in crate::interpreter::parser) fn parse_quoted<'a, I>(tokens: &mut Peekable<I>,
                                                          scope: ParseScope)
                                                          -> ParseResult<Value>
    where I: Iterator<Item = &'a (Token, Position)>
{
    Ok(parse_expression(tokens, scope)?.quoted())
}

/// Parses the body of a parenthesized form, up to and including its `)`.
///
/// Proper and dotted lists share their prefix: expressions separated by
/// whitespace. The body is read as a proper list until a `.` shows up where
/// the next element should be. At that point the elements read so far become
/// the head of a dotted list and only the tail remains to be parsed, so the
/// shared prefix is scanned once and parsing stays linear in the input.
///
/// Grammar:
/// ```text
///     list   := (expression (whitespace expression)*)? ")"
///     dotted := (expression whitespace)* "." whitespace expression ")"
/// ```
///
/// Whitespace is a separator only, so `( 1)` and `(1 )` are both rejected.
///
/// # Parameters
/// - `tokens`: Token iterator positioned after the `(`.
/// - `scope`: Nesting state for the list elements.
///
/// # Returns
/// A `Value::List` or `Value::DottedList`.
pub(in crate::interpreter::parser) fn parse_parenthesized<'a, I>(tokens: &mut Peekable<I>,
                                                                 scope: ParseScope)
                                                                 -> ParseResult<Value>
    where I: Iterator<Item = &'a (Token, Position)>
{
    let mut elements = Vec::new();

    if tokens.next_if(|(token, _)| *token == Token::RParen).is_some() {
        return Ok(Value::List(elements));
    }

    loop {
        if tokens.next_if(|(token, _)| *token == Token::Dot).is_some() {
            tracing::trace!(head = elements.len(), "dot in element position, reading dotted tail");
            return parse_dotted_tail(tokens, scope, elements);
        }

        elements.push(parse_expression(tokens, scope)?);

        match tokens.next() {
            Some((Token::RParen, _)) => return Ok(Value::List(elements)),
            Some((Token::Whitespace, _)) => {},
            Some((token, position)) => {
                return Err(ParseError::UnexpectedToken { token:    format!("Expected whitespace or ')', found {token}"),
                                                         position: *position, });
            },
            None => return Err(ParseError::UnexpectedEndOfInput { position: scope.end() }),
        }
    }
}

/// Parses what follows the `.` of a dotted list: whitespace, exactly one
/// tail expression and the closing `)`.
///
/// # Parameters
/// - `tokens`: Token iterator positioned after the `.`.
/// - `scope`: Nesting state for the tail.
/// - `head`: The elements before the dot, possibly none.
fn parse_dotted_tail<'a, I>(tokens: &mut Peekable<I>,
                            scope: ParseScope,
                            head: Vec<Value>)
                            -> ParseResult<Value>
    where I: Iterator<Item = &'a (Token, Position)>
{
    expect_whitespace(tokens, scope)?;
    let tail = parse_expression(tokens, scope)?;
    expect_closing_paren(tokens, scope)?;

    Ok(Value::DottedList(head, Box::new(tail)))
}
