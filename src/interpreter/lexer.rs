use logos::Logos;
use num_bigint::BigInt;

use crate::{error::ParseError, interpreter::parser::core::ParseResult};

/// Represents a lexical token in the source input.
///
/// Whitespace is kept as a token rather than skipped, because the grammar
/// uses it as the separator between list elements.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
#[logos(extras = LexerExtras)]
pub enum Token {
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `'`
    #[token("'")]
    Quote,
    /// `.`
    #[token(".")]
    Dot,
    /// Unsigned integer literal tokens, such as `42`.
    #[regex(r"[0-9]+", parse_number)]
    Number(BigInt),
    /// String literal tokens with their escapes already decoded.
    #[regex(r#""([^"\\]|\\[\\"nrt ])*""#, parse_string)]
    Str(String),
    /// Symbol tokens, such as `+`, `string=?` or `#t`.
    ///
    /// Letters are any Unicode letters; digits are ASCII only.
    #[regex(r"[\p{L}!$%&|*+\-:/<=>?@^_~#][\p{L}0-9!$%&|*+\-:/<=>?@^_~#]*",
            |lex| lex.slice().to_string())]
    Symbol(String),
    /// A run of spaces, tabs and line breaks.
    #[regex(r"[ \t\r\n]+", |lex| {
        track_newlines(lex);
        Token::Whitespace
    })]
    Whitespace,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LParen => write!(f, "'('"),
            Self::RParen => write!(f, "')'"),
            Self::Quote => write!(f, "'''"),
            Self::Dot => write!(f, "'.'"),
            Self::Number(n) => write!(f, "number {n}"),
            Self::Str(s) => write!(f, "string \"{s}\""),
            Self::Symbol(name) => write!(f, "symbol {name}"),
            Self::Whitespace => write!(f, "whitespace"),
        }
    }
}

/// A line and column in the source, both starting at 1.
///
/// Columns count characters, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    /// The line number.
    pub line:   usize,
    /// The column number.
    pub column: usize,
}

impl Default for Position {
    fn default() -> Self {
        Self { line:   1,
               column: 1, }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line and the byte offset where it starts, so that token
/// positions can be reported as line and column.
#[derive(Debug, Clone, Copy)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line:       usize,
    /// Byte offset of the first character of the current line.
    pub line_start: usize,
}

impl Default for LexerExtras {
    fn default() -> Self {
        Self { line:       1,
               line_start: 0, }
    }
}

/// Turns byte offsets into positions while the lexer moves forward.
///
/// Only the characters between the previous offset and the requested one are
/// counted, so assigning positions to every token stays linear in the size
/// of the source. Offsets must not decrease.
#[derive(Debug, Clone, Copy)]
struct ColumnCursor {
    line_start: usize,
    offset:     usize,
    column:     usize,
}

impl Default for ColumnCursor {
    fn default() -> Self {
        Self { line_start: 0,
               offset:     0,
               column:     1, }
    }
}

impl ColumnCursor {
    /// Converts `offset`, which lies on the line described by `extras`, to a
    /// [`Position`].
    fn position(&mut self, source: &str, extras: LexerExtras, offset: usize) -> Position {
        if extras.line_start != self.line_start {
            *self = Self { line_start: extras.line_start,
                           offset:     extras.line_start,
                           column:     1, };
        }

        self.column += source.get(self.offset..offset)
                             .map_or(0, |skipped| skipped.chars().count());
        self.offset = offset;

        Position { line:   extras.line,
                   column: self.column, }
    }
}

/// The tokens of a source string, each with the position it starts at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tokens {
    /// Tokens in source order.
    pub items: Vec<(Token, Position)>,
    /// The position just past the last character.
    pub end:   Position,
}

/// Splits `source` into positioned tokens.
///
/// # Errors
/// Returns a `ParseError` for the first character sequence that does not
/// form a token: an unknown character, an unterminated string literal or an
/// unknown escape inside a string.
///
/// # Example
/// ```
/// use lisper::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("(+ 1)").unwrap();
/// let kinds: Vec<_> = tokens.items.iter().map(|(token, _)| token.clone()).collect();
///
/// assert_eq!(kinds,
///            vec![Token::LParen,
///                 Token::Symbol("+".to_string()),
///                 Token::Whitespace,
///                 Token::Number(1.into()),
///                 Token::RParen]);
/// ```
pub fn tokenize(source: &str) -> ParseResult<Tokens> {
    let mut items = Vec::new();
    let mut lexer = Token::lexer(source);
    let mut cursor = ColumnCursor::default();

    loop {
        let start = lexer.extras;
        let Some(token) = lexer.next() else {
            break;
        };
        let position = cursor.position(source, start, lexer.span().start);

        match token {
            Ok(tok) => items.push((tok, position)),
            Err(()) => return Err(lexical_error(source, lexer.span().start, position)),
        }
    }

    let end = cursor.position(source, lexer.extras, source.len());

    Ok(Tokens { items, end })
}

/// Builds the error for input the lexer could not match at `offset`.
fn lexical_error(source: &str, offset: usize, position: Position) -> ParseError {
    let rest = source.get(offset..).unwrap_or_default();

    if rest.starts_with('"') {
        return string_error(rest, position);
    }

    let text = rest.chars().next().map(String::from).unwrap_or_default();
    ParseError::InvalidCharacter { text, position }
}

/// Finds what is wrong with a string literal the lexer rejected.
///
/// `literal` starts at the opening quote and runs to the end of the source.
fn string_error(literal: &str, start: Position) -> ParseError {
    let mut position = start;
    let mut chars = literal.chars().skip(1);
    position.column += 1;

    while let Some(c) = chars.next() {
        match c {
            '"' => break,
            '\\' => match chars.next() {
                Some('\\' | '"' | 'n' | 'r' | 't' | ' ') => position.column += 2,
                Some(escape) => return ParseError::InvalidEscape { escape, position },
                None => break,
            },
            '\n' => {
                position.line += 1;
                position.column = 1;
            },
            _ => position.column += 1,
        }
    }

    ParseError::UnterminatedString { position: start }
}

/// Advances the line counter past any line breaks in the current token.
fn track_newlines(lex: &mut logos::Lexer<Token>) {
    let span_start = lex.span().start;
    for (index, _) in lex.slice().match_indices('\n') {
        lex.extras.line += 1;
        lex.extras.line_start = span_start + index + 1;
    }
}

/// Parses an integer literal from the current token slice.
///
/// # Returns
/// - `Some(BigInt)`: The parsed value.
/// - `None`: If the slice is not a decimal integer.
fn parse_number(lex: &logos::Lexer<Token>) -> Option<BigInt> {
    BigInt::parse_bytes(lex.slice().as_bytes(), 10)
}

/// Decodes a string literal from the current token slice.
///
/// The surrounding quotes are removed and the escapes `\\`, `\"`, `\n`, `\r`,
/// `\t` and `\ ` are replaced by the characters they stand for.
fn parse_string(lex: &mut logos::Lexer<Token>) -> Option<String> {
    track_newlines(lex);

    let body = lex.slice().strip_prefix('"')?.strip_suffix('"')?;
    let mut decoded = String::with_capacity(body.len());
    let mut chars = body.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            decoded.push(c);
            continue;
        }

        match chars.next()? {
            'n' => decoded.push('\n'),
            'r' => decoded.push('\r'),
            't' => decoded.push('\t'),
            escaped => decoded.push(escaped),
        }
    }

    Some(decoded)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<Token> {
        tokenize(source).unwrap()
                        .items
                        .into_iter()
                        .map(|(token, _)| token)
                        .collect()
    }

    #[test]
    fn symbols_include_hash_and_operator_characters() {
        assert_eq!(kinds("#t"), vec![Token::Symbol("#t".to_string())]);
        assert_eq!(kinds("string<=?"), vec![Token::Symbol("string<=?".to_string())]);
        assert_eq!(kinds("-5"), vec![Token::Symbol("-5".to_string())]);
    }

    #[test]
    fn symbols_accept_unicode_letters() {
        assert_eq!(kinds("café"), vec![Token::Symbol("café".to_string())]);
        assert_eq!(kinds("λx2"), vec![Token::Symbol("λx2".to_string())]);
    }

    #[test]
    fn digits_then_letters_are_two_tokens() {
        assert_eq!(kinds("12ab"),
                   vec![Token::Number(12.into()), Token::Symbol("ab".to_string())]);
    }

    #[test]
    fn whitespace_runs_collapse() {
        assert_eq!(kinds("a \t\n b"),
                   vec![Token::Symbol("a".to_string()),
                        Token::Whitespace,
                        Token::Symbol("b".to_string())]);
    }

    #[test]
    fn string_escapes_are_decoded() {
        assert_eq!(kinds(r#""a\"b\\c\nd\te\ f\rg""#),
                   vec![Token::Str("a\"b\\c\nd\te f\rg".to_string())]);
    }

    #[test]
    fn positions_track_lines_and_columns() {
        let tokens = tokenize("(a\n  \"x\ny\" b)").unwrap();
        let positions: Vec<_> = tokens.items.iter().map(|(_, p)| (p.line, p.column)).collect();

        assert_eq!(positions, vec![(1, 1), (1, 2), (1, 3), (2, 3), (3, 3), (3, 4), (3, 5)]);
        assert_eq!(tokens.end, Position { line: 3, column: 6 });
    }

    #[test]
    fn columns_on_a_long_line() {
        let count = 200_000;
        let source = format!("(+{})", " é".repeat(count));
        let tokens = tokenize(&source).unwrap();

        assert_eq!(tokens.items.len(), 2 * count + 3);
        let (last, position) = tokens.items.last().unwrap();
        assert_eq!(*last, Token::RParen);
        assert_eq!(*position, Position { line:   1,
                                         column: 2 * count + 3, });
        assert_eq!(tokens.end, Position { line:   1,
                                          column: 2 * count + 4, });
    }

    #[test]
    fn columns_restart_after_multi_line_string() {
        let tokens = tokenize("\"é\né\" ab").unwrap();
        let positions: Vec<_> = tokens.items.iter().map(|(_, p)| (p.line, p.column)).collect();

        assert_eq!(positions, vec![(1, 1), (2, 3), (2, 4)]);
        assert_eq!(tokens.end, Position { line:   2,
                                          column: 6, });
    }

    #[test]
    fn invalid_escape_is_reported_at_backslash() {
        assert_eq!(tokenize(r#"  "ab\q""#),
                   Err(ParseError::InvalidEscape { escape:   'q',
                                                   position: Position { line:   1,
                                                                        column: 6, }, }));
    }

    #[test]
    fn unterminated_string_is_reported_at_opening_quote() {
        assert_eq!(tokenize("(a \"bc"),
                   Err(ParseError::UnterminatedString { position: Position { line:   1,
                                                                             column: 4, }, }));
    }

    #[test]
    fn stray_character_is_rejected() {
        assert_eq!(tokenize("(a [b])"),
                   Err(ParseError::InvalidCharacter { text:     "[".to_string(),
                                                      position: Position { line:   1,
                                                                           column: 4, }, }));
    }
}
