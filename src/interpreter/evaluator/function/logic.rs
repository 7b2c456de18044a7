use crate::interpreter::{
    evaluator::{core::EvalResult, function::core::binary_operands},
    value::core::Value,
};

/// The boolean connectives.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogicOp {
    /// `&&`
    And,
    /// `||`
    Or,
}

/// Evaluates a logical operation between two boolean values.
///
/// Both operands must be booleans, left checked first. There is no
/// short-circuiting: arguments are already evaluated by the time a primitive
/// runs.
///
/// # Example
/// ```
/// use lisper::interpreter::{
///     evaluator::function::logic::{LogicOp, logic},
///     value::core::Value,
/// };
///
/// let args = [Value::Bool(true), Value::Bool(false)];
/// assert_eq!(logic(LogicOp::Or, &args).unwrap(), Value::Bool(true));
/// ```
pub fn logic(op: LogicOp, args: &[Value]) -> EvalResult<Value> {
    let (left, right) = binary_operands(args, Value::as_bool)?;

    Ok(Value::Bool(match op {
                       LogicOp::And => left && right,
                       LogicOp::Or => left || right,
                   }))
}
