use crate::{error::ParseError, interpreter::value::core::Value};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while evaluating an expression.
///
/// Every variant is built where the failure is detected and handed back to
/// the caller untouched; nothing is wrapped or chained on the way up.
pub enum EvalError {
    /// A primitive received the wrong number of arguments.
    NumArgs {
        /// The number of arguments the primitive wants.
        expected: usize,
        /// The evaluated arguments that were actually supplied.
        found:    Vec<Value>,
    },
    /// A value could not be coerced to the kind an operation needs.
    TypeMismatch {
        /// The kind that was required, such as `number` or `boolean`.
        expected: String,
        /// The offending value.
        found:    Value,
    },
    /// The source text did not parse.
    ParseFailure(ParseError),
    /// A value that is neither self-evaluating nor a valid application.
    BadSpecialForm {
        /// Description of the failure.
        message: String,
        /// The form that could not be evaluated.
        form:    Value,
    },
    /// An application named a primitive that does not exist.
    UnknownFunction {
        /// Description of the failure.
        message: String,
        /// The name in function position.
        name:    String,
    },
    /// A symbol was looked up that has no binding.
    ///
    /// The language has no variables, so the evaluator never produces this.
    UnboundVariable {
        /// Description of the failure.
        message: String,
        /// The unbound name.
        name:    String,
    },
    /// An integer division variant was given a zero divisor.
    DivisionByZero {
        /// The primitive that divided.
        operator: String,
    },
    /// Any other failure, with a custom message.
    Other(String),
}

impl From<ParseError> for EvalError {
    fn from(error: ParseError) -> Self {
        Self::ParseFailure(error)
    }
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NumArgs { expected, found } => {
                write!(f, "Expected {expected} args; found values")?;
                for value in found {
                    write!(f, " {value}")?;
                }
                Ok(())
            },

            Self::TypeMismatch { expected, found } => {
                write!(f, "Invalid type: expected {expected}, found {found}")
            },

            Self::ParseFailure(error) => write!(f, "{error}"),

            Self::BadSpecialForm { message, form } => write!(f, "{message}: {form}"),

            Self::UnknownFunction { message, name } | Self::UnboundVariable { message, name } => {
                write!(f, "{message}: {name}")
            },

            Self::DivisionByZero { operator } => write!(f, "Division by zero in {operator}"),

            Self::Other(message) => write!(f, "{message}"),
        }
    }
}

impl std::error::Error for EvalError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ParseFailure(error) => Some(error),
            _ => None,
        }
    }
}
