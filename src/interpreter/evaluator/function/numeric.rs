use num_bigint::BigInt;

use crate::{
    error::EvalError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
    util::num::{floor_div, floor_mod, trunc_div, trunc_rem},
};

/// The integer operations the arithmetic primitives fold with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NumericOp {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`, rounding toward negative infinity.
    Div,
    /// `mod`, taking the sign of the divisor.
    Mod,
    /// `quotient`, rounding toward zero.
    Quotient,
    /// `remainder`, taking the sign of the dividend.
    Remainder,
}

impl NumericOp {
    /// The primitive name, used in error messages.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "mod",
            Self::Quotient => "quotient",
            Self::Remainder => "remainder",
        }
    }

    /// Combines the accumulator with the next operand.
    ///
    /// # Errors
    /// Returns `DivisionByZero` if a division variant gets a zero divisor.
    pub fn apply(self, left: &BigInt, right: &BigInt) -> EvalResult<BigInt> {
        let divided = match self {
            Self::Add => return Ok(left + right),
            Self::Sub => return Ok(left - right),
            Self::Mul => return Ok(left * right),
            Self::Div => floor_div(left, right),
            Self::Mod => floor_mod(left, right),
            Self::Quotient => trunc_div(left, right),
            Self::Remainder => trunc_rem(left, right),
        };

        divided.ok_or_else(|| EvalError::DivisionByZero { operator: self.name().to_string() })
    }
}

/// Folds an arithmetic operation over its arguments from the left.
///
/// Every argument is coerced to an integer before any arithmetic happens, so a
/// type error anywhere in the list is reported ahead of a division by zero.
///
/// # Parameters
/// - `op`: The operation to fold with.
/// - `args`: The evaluated arguments; the caller guarantees at least two.
///
/// # Returns
/// `Value::Number` holding `((a op b) op c) ...`.
///
/// # Example
/// ```
/// use lisper::interpreter::{
///     evaluator::function::numeric::{NumericOp, fold},
///     value::core::Value,
/// };
///
/// let args = [Value::from(10), Value::from(3), Value::from(2)];
/// assert_eq!(fold(NumericOp::Sub, &args).unwrap(), Value::from(5));
/// ```
pub fn fold(op: NumericOp, args: &[Value]) -> EvalResult<Value> {
    let numbers = args.iter().map(Value::as_number).collect::<EvalResult<Vec<_>>>()?;

    let Some((first, rest)) = numbers.split_first() else {
        return Err(EvalError::NumArgs { expected: 2,
                                        found:    args.to_vec(), });
    };

    let mut result = first.clone();
    for operand in rest {
        result = op.apply(&result, operand)?;
    }

    Ok(Value::Number(result))
}
