/// Parsing errors.
///
/// Defines all error types that can occur while tokenizing and parsing an
/// expression. Parse errors include stray characters, malformed string
/// literals, unbalanced parentheses and trailing input.
pub mod parse_error;
/// Evaluation errors.
///
/// Contains all error types that can be raised while evaluating a parsed
/// value: arity failures, type mismatches, unknown primitives and malformed
/// special forms. Parse failures are lifted into this type so that callers
/// only have to deal with a single error channel.
pub mod eval_error;

pub use eval_error::EvalError;
pub use parse_error::ParseError;
