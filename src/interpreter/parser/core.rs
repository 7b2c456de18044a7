use std::iter::Peekable;

use crate::{
    error::ParseError,
    interpreter::{
        lexer::{Position, Token, tokenize},
        parser::{
            list::{parse_parenthesized, parse_quoted},
            utils::{ParseScope, skip_whitespace},
        },
        value::core::Value,
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Default limit on how deeply lists and quotes may nest.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Settings that control parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserConfig {
    /// Maximum nesting of parentheses and quotes. Deeper input is rejected
    /// with [`ParseError::NestingTooDeep`].
    pub max_depth: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self { max_depth: DEFAULT_MAX_DEPTH }
    }
}

/// Parses a source string containing exactly one expression.
///
/// Whitespace before and after the expression is allowed; anything else
/// after it is an error.
///
/// # Errors
/// Returns a `ParseError` if the source cannot be tokenized, does not form an
/// expression, or has trailing input.
///
/// # Example
/// ```
/// use lisper::interpreter::{
///     parser::core::{ParserConfig, parse_source},
///     value::core::Value,
/// };
///
/// let value = parse_source(" (1 2 . 3) ", &ParserConfig::default()).unwrap();
/// assert_eq!(value, Value::DottedList(vec![1.into(), 2.into()], Box::new(3.into())));
///
/// assert!(parse_source("(1 2", &ParserConfig::default()).is_err());
/// ```
pub fn parse_source(source: &str, config: &ParserConfig) -> ParseResult<Value> {
    let tokens = tokenize(source)?;
    let scope = ParseScope::new(config.max_depth, tokens.end);
    let mut iter = tokens.items.iter().peekable();

    skip_whitespace(&mut iter);
    let value = parse_expression(&mut iter, scope)?;
    skip_whitespace(&mut iter);

    if let Some((token, position)) = iter.next() {
        return Err(ParseError::UnexpectedTrailingTokens { token:    token.to_string(),
                                                          position: *position, });
    }

    tracing::trace!(%value, "parsed expression");

    Ok(value)
}

/// Parses a single expression.
///
/// The leading token selects the alternative:
/// - a symbol becomes an atom, except that `#t` and `#f` become booleans,
/// - a string or number token becomes the matching literal,
/// - `'` reads the next expression as `(quote expression)`,
/// - `(` starts a proper or dotted list.
///
/// Grammar:
/// ```text
///     expression := atom | string | number | "'" expression
///                 | "(" list ")" | "(" dotted ")"
/// ```
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the expression.
/// - `scope`: The current nesting state.
///
/// # Errors
/// - `UnexpectedToken` if the next token cannot start an expression.
/// - `UnexpectedEndOfInput` if there is no next token.
/// - Propagates errors from nested lists and quotes.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>, scope: ParseScope) -> ParseResult<Value>
    where I: Iterator<Item = &'a (Token, Position)>
{
    match tokens.next() {
        Some((Token::Symbol(name), _)) => Ok(parse_atom(name)),
        Some((Token::Str(s), _)) => Ok(Value::String(s.clone())),
        Some((Token::Number(n), _)) => Ok(Value::Number(n.clone())),
        Some((Token::Quote, position)) => parse_quoted(tokens, scope.enter(*position)?),
        Some((Token::LParen, position)) => parse_parenthesized(tokens, scope.enter(*position)?),
        Some((token, position)) => {
            Err(ParseError::UnexpectedToken { token:    format!("Expected an expression, found {token}"),
                                              position: *position, })
        },
        None => Err(ParseError::UnexpectedEndOfInput { position: scope.end() }),
    }
}

/// Turns a scanned symbol into a value.
///
/// The check runs on the complete symbol, so `#t` is a boolean while `#true`
/// stays an atom.
fn parse_atom(name: &str) -> Value {
    match name {
        "#t" => Value::Bool(true),
        "#f" => Value::Bool(false),
        _ => Value::atom(name),
    }
}
