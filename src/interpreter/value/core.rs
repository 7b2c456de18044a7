use num_bigint::BigInt;

use crate::{error::EvalError, interpreter::evaluator::core::EvalResult, util::num::parse_integer_prefix};

/// The symbol that suppresses evaluation of its single argument.
pub const QUOTE: &str = "quote";

/// Represents a value in the interpreter.
///
/// The same type is produced by the parser and consumed and produced by the
/// evaluator. Values form a tree: every element of a list is owned by that
/// list, and nothing is mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// A bare symbol, such as `+` or `foo`.
    Atom(String),
    /// A proper list, such as `(1 2 3)`.
    List(Vec<Self>),
    /// An improper list, such as `(1 2 . 3)`.
    ///
    /// The first field holds the elements before the dot, the second the tail
    /// after it.
    DottedList(Vec<Self>, Box<Self>),
    /// A non-negative literal or the result of integer arithmetic.
    Number(BigInt),
    /// A string literal, already unescaped.
    String(String),
    /// A boolean, written `#t` or `#f` in source.
    Bool(bool),
}

impl From<BigInt> for Value {
    fn from(n: BigInt) -> Self {
        Self::Number(n)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Number(BigInt::from(n))
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl Value {
    /// Builds an atom from anything string-like.
    pub fn atom(name: impl Into<String>) -> Self {
        Self::Atom(name.into())
    }

    /// Wraps a value in `(quote ...)`, which is what `'x` reads as.
    #[must_use]
    pub fn quoted(self) -> Self {
        Self::List(vec![Self::atom(QUOTE), self])
    }

    /// Coerces the value to an integer for numeric primitives.
    ///
    /// - `Number` is returned as is.
    /// - `String` is read for a leading integer; anything after the digits is
    ///   ignored, but at least one digit is required.
    /// - A one-element `List` is unwrapped and its element coerced.
    ///
    /// # Returns
    /// - `Ok(BigInt)`: The coerced integer.
    /// - `Err(EvalError::TypeMismatch)`: If no integer can be read.
    ///
    /// # Example
    /// ```
    /// use lisper::interpreter::value::core::Value;
    /// use num_bigint::BigInt;
    ///
    /// assert_eq!(Value::from("42abc").as_number().unwrap(), BigInt::from(42));
    /// assert_eq!(Value::List(vec![7.into()]).as_number().unwrap(), BigInt::from(7));
    /// assert!(Value::Bool(true).as_number().is_err());
    /// ```
    pub fn as_number(&self) -> EvalResult<BigInt> {
        match self {
            Self::Number(n) => Ok(n.clone()),
            Self::String(s) => parse_integer_prefix(s).ok_or_else(|| self.mismatch("number")),
            Self::List(items) => match items.as_slice() {
                [single] => single.as_number(),
                _ => Err(self.mismatch("number")),
            },
            _ => Err(self.mismatch("number")),
        }
    }

    /// Coerces the value to a boolean for logical primitives.
    ///
    /// Only `Bool` is accepted; there is no notion of truthiness.
    pub fn as_bool(&self) -> EvalResult<bool> {
        match self {
            Self::Bool(b) => Ok(*b),
            _ => Err(self.mismatch("boolean")),
        }
    }

    /// Coerces the value to a string for string primitives.
    ///
    /// Numbers and booleans are converted to their printed form, so `#t`
    /// becomes `"True"`.
    pub fn as_string(&self) -> EvalResult<String> {
        match self {
            Self::String(s) => Ok(s.clone()),
            Self::Number(n) => Ok(n.to_string()),
            Self::Bool(_) => Ok(self.to_string()),
            _ => Err(self.mismatch("string")),
        }
    }

    fn mismatch(&self, expected: &str) -> EvalError {
        EvalError::TypeMismatch { expected: expected.to_string(),
                                  found:    self.clone(), }
    }

    /// Returns `true` if the value evaluates to itself.
    #[must_use]
    pub const fn is_self_evaluating(&self) -> bool {
        matches!(self, Self::Number(..) | Self::String(..) | Self::Bool(..))
    }
}

/// Writes values separated by single spaces.
fn write_spaced(f: &mut std::fmt::Formatter<'_>, values: &[Value]) -> std::fmt::Result {
    for (index, value) in values.iter().enumerate() {
        if index > 0 {
            write!(f, " ")?;
        }

        write!(f, "{value}")?;
    }

    Ok(())
}

/// Renders a value in its canonical textual form.
///
/// Parsing the output gives the value back for atoms, numbers, plain strings
/// and lists of them, with two exceptions: booleans print as `True` and
/// `False`, which read back as atoms, and a dotted list without elements
/// before the dot, as read from `(. x)`, prints as `( . x)`, which the
/// reader rejects.
impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Atom(name) => write!(f, "{name}"),
            // Contents are printed verbatim; escapes are not restored.
            Self::String(s) => write!(f, "\"{s}\""),
            Self::Number(n) => write!(f, "{n}"),
            Self::Bool(true) => write!(f, "True"),
            Self::Bool(false) => write!(f, "False"),
            Self::List(items) => {
                write!(f, "(")?;
                write_spaced(f, items)?;
                write!(f, ")")
            },
            Self::DottedList(head, tail) => {
                write!(f, "(")?;
                write_spaced(f, head)?;
                write!(f, " . {tail})")
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_every_variant() {
        assert_eq!(Value::atom("foo").to_string(), "foo");
        assert_eq!(Value::from("a b").to_string(), "\"a b\"");
        assert_eq!(Value::from(12).to_string(), "12");
        assert_eq!(Value::Bool(true).to_string(), "True");
        assert_eq!(Value::Bool(false).to_string(), "False");
        assert_eq!(Value::List(vec![]).to_string(), "()");
        assert_eq!(Value::List(vec![Value::atom("+"), 1.into(), 2.into()]).to_string(),
                   "(+ 1 2)");
        assert_eq!(Value::DottedList(vec![1.into(), 2.into()], Box::new(3.into())).to_string(),
                   "(1 2 . 3)");
    }

    #[test]
    fn strings_are_printed_without_escaping() {
        assert_eq!(Value::from("say \"hi\"\n").to_string(), "\"say \"hi\"\n\"");
    }

    #[test]
    fn quoted_wraps_in_quote_form() {
        assert_eq!(Value::atom("x").quoted().to_string(), "(quote x)");
    }

    #[test]
    fn dotted_list_without_head_keeps_leading_space() {
        let value = Value::DottedList(vec![], Box::new(1.into()));
        assert_eq!(value.to_string(), "( . 1)");
    }

    #[test]
    fn only_literals_are_self_evaluating() {
        assert!(Value::from(1).is_self_evaluating());
        assert!(Value::from("s").is_self_evaluating());
        assert!(Value::Bool(false).is_self_evaluating());
        assert!(!Value::atom("s").is_self_evaluating());
        assert!(!Value::List(vec![]).is_self_evaluating());
    }

    #[test]
    fn number_coercion_accepts_prefixes_and_singletons() {
        assert_eq!(Value::from("  -12 apples").as_number(), Ok(BigInt::from(-12)));
        assert_eq!(Value::List(vec![Value::List(vec![5.into()])]).as_number(),
                   Ok(BigInt::from(5)));
        assert_eq!(Value::from("apples").as_number(),
                   Err(EvalError::TypeMismatch { expected: "number".to_string(),
                                                 found:    Value::from("apples"), }));
        assert!(Value::List(vec![1.into(), 2.into()]).as_number().is_err());
        assert!(Value::atom("x").as_number().is_err());
    }

    #[test]
    fn bool_coercion_is_strict() {
        assert_eq!(Value::Bool(false).as_bool(), Ok(false));
        assert_eq!(Value::from(0).as_bool(),
                   Err(EvalError::TypeMismatch { expected: "boolean".to_string(),
                                                 found:    Value::from(0), }));
    }

    #[test]
    fn string_coercion_stringifies_scalars() {
        assert_eq!(Value::from("s").as_string(), Ok("s".to_string()));
        assert_eq!(Value::from(42).as_string(), Ok("42".to_string()));
        assert_eq!(Value::Bool(true).as_string(), Ok("True".to_string()));
        assert!(Value::atom("s").as_string().is_err());
    }
}
