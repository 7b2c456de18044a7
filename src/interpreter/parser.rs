/// Core parsing logic.
///
/// Contains the parser entry points, the single-expression dispatcher and the
/// parser configuration.
pub mod core;

/// List parsing.
///
/// Handles quoted expressions and parenthesized forms, including the
/// choice between proper and dotted lists.
pub mod list;

/// Utility functions for the parser.
///
/// Provides the nesting guard and helpers for expecting separators and
/// closing parentheses.
pub mod utils;
