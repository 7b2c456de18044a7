/// Primitive table and dispatch.
///
/// Maps primitive names to their arity and handler and applies them to
/// evaluated arguments.
pub mod core;
/// Integer arithmetic primitives.
///
/// Left folds of `+`, `-`, `*` and the four integer division variants.
pub mod numeric;
/// Comparison primitives.
///
/// Numeric comparisons and string comparisons, both producing booleans.
pub mod comparison;
/// Boolean primitives.
///
/// `&&` and `||` over strictly boolean operands.
pub mod logic;
