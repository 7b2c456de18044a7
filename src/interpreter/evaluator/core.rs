use crate::{
    error::EvalError,
    interpreter::{
        evaluator::function::core::apply,
        value::core::{QUOTE, Value},
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// Evaluates a value and returns the result.
///
/// The shape of the value decides what happens, checked in this order:
/// 1. Strings, numbers and booleans evaluate to themselves.
/// 2. `(quote x)` evaluates to `x`, which is not evaluated further.
/// 3. `(name args...)` evaluates every argument from left to right and then
///    applies the primitive called `name` to the results. The first failing
///    argument aborts the whole application.
/// 4. Anything else, such as a bare atom, a dotted list or a list that does
///    not start with an atom, is a `BadSpecialForm`.
///
/// Evaluation is pure: the input is never modified, and the same input always
/// produces the same result.
///
/// # Errors
/// Returns the first `EvalError` raised anywhere in the tree.
///
/// # Example
/// ```
/// use lisper::interpreter::{evaluator::core::eval, value::core::Value};
///
/// let sum = Value::List(vec![Value::atom("+"), 1.into(), 2.into()]);
/// assert_eq!(eval(&sum).unwrap(), Value::from(3));
///
/// let quoted = sum.clone().quoted();
/// assert_eq!(eval(&quoted).unwrap(), sum);
/// ```
pub fn eval(value: &Value) -> EvalResult<Value> {
    if value.is_self_evaluating() {
        return Ok(value.clone());
    }

    let Value::List(items) = value else {
        return Err(bad_special_form(value));
    };

    match items.as_slice() {
        [Value::Atom(head), quoted] if head == QUOTE => Ok(quoted.clone()),
        [Value::Atom(name), args @ ..] => {
            let arg_vals = args.iter().map(eval).collect::<EvalResult<Vec<_>>>()?;
            apply(name, &arg_vals)
        },
        _ => Err(bad_special_form(value)),
    }
}

fn bad_special_form(form: &Value) -> EvalError {
    EvalError::BadSpecialForm { message: "Unrecognized special form".to_string(),
                                form:    form.clone(), }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(items: Vec<Value>) -> Value {
        Value::List(items)
    }

    #[test]
    fn literals_evaluate_to_themselves() {
        for value in [Value::from("s"), Value::from(9), Value::Bool(false)] {
            assert_eq!(eval(&value), Ok(value.clone()));
        }
    }

    #[test]
    fn quote_suppresses_evaluation() {
        let sum = list(vec![Value::atom("+"), 1.into(), 2.into()]);
        assert_eq!(eval(&sum.clone().quoted()), Ok(sum));

        let atom = Value::atom("anything");
        assert_eq!(eval(&atom.clone().quoted()), Ok(atom));
    }

    #[test]
    fn quote_with_wrong_arity_is_an_application() {
        let form = list(vec![Value::atom("quote"), 1.into(), 2.into()]);
        assert!(matches!(eval(&form),
                         Err(EvalError::UnknownFunction { name, .. }) if name == "quote"));
    }

    #[test]
    fn arguments_are_evaluated_before_application() {
        let nested = list(vec![Value::atom("*"),
                               list(vec![Value::atom("+"), 1.into(), 2.into()]),
                               list(vec![Value::atom("-"), 10.into(), 4.into()])]);
        assert_eq!(eval(&nested), Ok(Value::from(18)));
    }

    #[test]
    fn argument_errors_win_over_unknown_function() {
        let form = list(vec![Value::atom("nope"),
                             list(vec![Value::atom("+"), 1.into()])]);
        assert_eq!(eval(&form),
                   Err(EvalError::NumArgs { expected: 2,
                                            found:    vec![1.into()], }));
    }

    #[test]
    fn first_failing_argument_aborts() {
        let form = list(vec![Value::atom("+"),
                             list(vec![Value::atom("&&"), 1.into(), Value::Bool(true)]),
                             Value::atom("bare")]);
        assert_eq!(eval(&form),
                   Err(EvalError::TypeMismatch { expected: "boolean".to_string(),
                                                 found:    1.into(), }));
    }

    #[test]
    fn unevaluable_shapes_are_bad_special_forms() {
        let shapes = [Value::atom("x"),
                      list(vec![]),
                      list(vec![1.into(), 2.into()]),
                      Value::DottedList(vec![Value::atom("+")], Box::new(1.into()))];

        for form in shapes {
            assert_eq!(eval(&form),
                       Err(EvalError::BadSpecialForm { message: "Unrecognized special form".to_string(),
                                                       form:    form.clone(), }));
        }
    }
}
