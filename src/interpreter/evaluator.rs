/// Core evaluation logic.
///
/// Contains the tree-walking evaluator: self-evaluating literals, quoting,
/// application and error propagation.
pub mod core;

/// Primitive functions.
///
/// Holds the primitive table and the numeric, comparison and logical
/// operators it dispatches to.
pub mod function;
