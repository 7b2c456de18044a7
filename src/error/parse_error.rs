use crate::interpreter::lexer::Position;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during lexing or parsing.
pub enum ParseError {
    /// Found a token that does not fit the grammar at this point.
    UnexpectedToken {
        /// Description of what was expected and what was found.
        token:    String,
        /// Where the offending token starts.
        position: Position,
    },
    /// Reached the end of input while an expression was still open.
    UnexpectedEndOfInput {
        /// The position just past the last character.
        position: Position,
    },
    /// A character that cannot start any token.
    InvalidCharacter {
        /// The rejected source text.
        text:     String,
        /// Where the character was found.
        position: Position,
    },
    /// A string literal without its closing `"`.
    UnterminatedString {
        /// Where the opening quote is.
        position: Position,
    },
    /// A backslash followed by a character that is not a known escape.
    InvalidEscape {
        /// The character after the backslash.
        escape:   char,
        /// Where the backslash is.
        position: Position,
    },
    /// A complete expression was followed by more input.
    UnexpectedTrailingTokens {
        /// The first extra token.
        token:    String,
        /// Where the extra input starts.
        position: Position,
    },
    /// Lists and quotes were nested deeper than the parser allows.
    NestingTooDeep {
        /// The configured nesting limit.
        limit:    usize,
        /// Where the limit was exceeded.
        position: Position,
    },
}

impl ParseError {
    /// Returns the source position the error refers to.
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::UnexpectedToken { position, .. }
            | Self::UnexpectedEndOfInput { position }
            | Self::InvalidCharacter { position, .. }
            | Self::UnterminatedString { position }
            | Self::InvalidEscape { position, .. }
            | Self::UnexpectedTrailingTokens { position, .. }
            | Self::NestingTooDeep { position, .. } => *position,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Parse error at {}: ", self.position())?;

        match self {
            Self::UnexpectedToken { token, .. } => write!(f, "Unexpected token: {token}."),

            Self::UnexpectedEndOfInput { .. } => write!(f, "Unexpected end of input."),

            Self::InvalidCharacter { text, .. } => write!(f, "Invalid character '{text}'."),

            Self::UnterminatedString { .. } => {
                write!(f, "String literal is missing its closing '\"'.")
            },

            Self::InvalidEscape { escape, .. } => {
                write!(f, "Unknown escape sequence '\\{escape}'.")
            },

            Self::UnexpectedTrailingTokens { token, .. } => write!(f,
                                                                   "Extra input after expression. Check your input: {token}"),

            Self::NestingTooDeep { limit, .. } => {
                write!(f, "Expression is nested deeper than {limit} levels.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
