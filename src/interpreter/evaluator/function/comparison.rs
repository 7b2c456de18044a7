use std::cmp::Ordering;

use crate::interpreter::{
    evaluator::{core::EvalResult, function::core::binary_operands},
    value::core::Value,
};

/// The relations shared by the numeric and string comparison primitives.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Comparison {
    Equal,
    NotEqual,
    Less,
    Greater,
    LessEqual,
    GreaterEqual,
}

impl Comparison {
    /// Tests whether an ordering between two operands satisfies the relation.
    #[must_use]
    pub const fn holds(self, ordering: Ordering) -> bool {
        match self {
            Self::Equal => ordering.is_eq(),
            Self::NotEqual => ordering.is_ne(),
            Self::Less => ordering.is_lt(),
            Self::Greater => ordering.is_gt(),
            Self::LessEqual => ordering.is_le(),
            Self::GreaterEqual => ordering.is_ge(),
        }
    }
}

/// Compares two arguments as integers.
///
/// Arguments go through the same coercion as arithmetic, so `(< "1" 2)` is
/// `True`.
///
/// # Example
/// ```
/// use lisper::interpreter::{
///     evaluator::function::comparison::{Comparison, numeric},
///     value::core::Value,
/// };
///
/// let args = [Value::from(1), Value::from(2)];
/// assert_eq!(numeric(Comparison::Less, &args).unwrap(), Value::Bool(true));
/// ```
pub fn numeric(op: Comparison, args: &[Value]) -> EvalResult<Value> {
    let (left, right) = binary_operands(args, Value::as_number)?;

    Ok(Value::Bool(op.holds(left.cmp(&right))))
}

/// Compares two arguments as strings, byte by byte.
///
/// Numbers and booleans are compared by their printed form.
pub fn string(op: Comparison, args: &[Value]) -> EvalResult<Value> {
    let (left, right) = binary_operands(args, Value::as_string)?;

    Ok(Value::Bool(op.holds(left.cmp(&right))))
}
