use crate::{
    error::EvalError,
    interpreter::{
        evaluator::{
            core::EvalResult,
            function::{
                comparison::{self, Comparison},
                logic::{self, LogicOp},
                numeric::{self, NumericOp},
            },
        },
        value::core::Value,
    },
};

/// Type alias for primitive handlers.
///
/// A primitive receives the already evaluated arguments, whose count has been
/// checked against its arity.
type PrimitiveFn = fn(&[Value]) -> EvalResult<Value>;

/// Specifies the allowed number of arguments for a primitive.
///
/// - `Exact(n)` means the primitive must receive exactly `n` arguments.
/// - `AtLeast(n)` means the primitive folds over `n` or more arguments.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Arity {
    Exact(usize),
    AtLeast(usize),
}

impl Arity {
    /// Tests whether the given argument count satisfies this arity constraint.
    const fn check(self, n: usize) -> bool {
        match self {
            Self::Exact(m) => n == m,
            Self::AtLeast(m) => n >= m,
        }
    }

    /// The count reported in `NumArgs` when the check fails.
    const fn expected(self) -> usize {
        match self {
            Self::Exact(m) | Self::AtLeast(m) => m,
        }
    }
}

/// Defines primitives by generating a lookup table and a name list.
///
/// Each entry provides:
/// - a string name,
/// - an arity specification,
/// - a function pointer implementing the primitive.
///
/// The macro produces:
/// - `PrimitiveDef` (internal metadata),
/// - `PRIMITIVE_TABLE` (static table for lookup),
/// - `PRIMITIVE_FUNCTIONS` (public list of primitive names).
macro_rules! primitive_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        struct PrimitiveDef {
            name:  &'static str,
            arity: Arity,
            func:  PrimitiveFn,
        }
        static PRIMITIVE_TABLE: &[PrimitiveDef] = &[
            $(
                PrimitiveDef { name: $name, arity: $arity, func: $func },
            )*
        ];
        /// Names of all primitives, in table order.
        pub const PRIMITIVE_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

primitive_functions! {
    "+"         => { arity: Arity::AtLeast(2), func: |args| numeric::fold(NumericOp::Add, args) },
    "-"         => { arity: Arity::AtLeast(2), func: |args| numeric::fold(NumericOp::Sub, args) },
    "*"         => { arity: Arity::AtLeast(2), func: |args| numeric::fold(NumericOp::Mul, args) },
    "/"         => { arity: Arity::AtLeast(2), func: |args| numeric::fold(NumericOp::Div, args) },
    "mod"       => { arity: Arity::AtLeast(2), func: |args| numeric::fold(NumericOp::Mod, args) },
    "quotient"  => { arity: Arity::AtLeast(2), func: |args| numeric::fold(NumericOp::Quotient, args) },
    "remainder" => { arity: Arity::AtLeast(2), func: |args| numeric::fold(NumericOp::Remainder, args) },
    "="         => { arity: Arity::Exact(2), func: |args| comparison::numeric(Comparison::Equal, args) },
    "<"         => { arity: Arity::Exact(2), func: |args| comparison::numeric(Comparison::Less, args) },
    ">"         => { arity: Arity::Exact(2), func: |args| comparison::numeric(Comparison::Greater, args) },
    "/="        => { arity: Arity::Exact(2), func: |args| comparison::numeric(Comparison::NotEqual, args) },
    ">="        => { arity: Arity::Exact(2), func: |args| comparison::numeric(Comparison::GreaterEqual, args) },
    "<="        => { arity: Arity::Exact(2), func: |args| comparison::numeric(Comparison::LessEqual, args) },
    "&&"        => { arity: Arity::Exact(2), func: |args| logic::logic(LogicOp::And, args) },
    "||"        => { arity: Arity::Exact(2), func: |args| logic::logic(LogicOp::Or, args) },
    "string=?"  => { arity: Arity::Exact(2), func: |args| comparison::string(Comparison::Equal, args) },
    "string<?"  => { arity: Arity::Exact(2), func: |args| comparison::string(Comparison::Less, args) },
    "string>?"  => { arity: Arity::Exact(2), func: |args| comparison::string(Comparison::Greater, args) },
    "string<=?" => { arity: Arity::Exact(2), func: |args| comparison::string(Comparison::LessEqual, args) },
    "string>=?" => { arity: Arity::Exact(2), func: |args| comparison::string(Comparison::GreaterEqual, args) },
}

/// Finds the table entry for the primitive called `name`.
fn lookup(name: &str) -> Option<&'static PrimitiveDef> {
    PRIMITIVE_TABLE.iter().find(|p| p.name == name)
}

/// Applies the primitive called `name` to evaluated arguments.
///
/// The primitive is looked up by name, its arity is checked, and only then is
/// its handler called.
///
/// # Parameters
/// - `name`: The atom in function position.
/// - `arg_vals`: Evaluated argument values, in source order.
///
/// # Errors
/// - `UnknownFunction` if no primitive has this name.
/// - `NumArgs` if the argument count does not fit the arity.
/// - Any error raised by the primitive itself.
pub fn apply(name: &str, arg_vals: &[Value]) -> EvalResult<Value> {
    let Some(primitive) = lookup(name) else {
        tracing::trace!(name, "unknown primitive");
        return Err(EvalError::UnknownFunction { message: "Unrecognized primitive function args".to_string(),
                                                name:    name.to_string(), });
    };

    tracing::trace!(name, args = arg_vals.len(), "applying primitive");

    if !primitive.arity.check(arg_vals.len()) {
        return Err(EvalError::NumArgs { expected: primitive.arity.expected(),
                                        found:    arg_vals.to_vec(), });
    }

    (primitive.func)(arg_vals)
}

/// Coerces the two arguments of a binary primitive, left first.
///
/// # Errors
/// - `NumArgs` if there are not exactly two arguments.
/// - Whatever `unpack` returns for the first operand it rejects.
pub(in crate::interpreter::evaluator) fn binary_operands<T>(args: &[Value],
                                                            unpack: impl Fn(&Value) -> EvalResult<T>)
                                                            -> EvalResult<(T, T)> {
    match args {
        [left, right] => Ok((unpack(left)?, unpack(right)?)),
        _ => Err(EvalError::NumArgs { expected: 2,
                                      found:    args.to_vec(), }),
    }
}
