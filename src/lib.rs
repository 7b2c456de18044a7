//! # lisper
//!
//! lisper is a small interpreter for a Lisp-family expression language.
//! It reads exactly one s-expression, parses it into a `Value` tree and
//! evaluates that tree against a fixed table of integer, comparison, boolean
//! and string primitives.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::EvalError,
    interpreter::{
        evaluator::{core::EvalResult, function::core::PRIMITIVE_FUNCTIONS},
        parser::core::{ParseResult, ParserConfig, parse_source},
        value::core::Value,
    },
};

/// Provides unified error types for parsing and evaluation.
///
/// This module defines every error the interpreter can report. Parse errors
/// carry the line and column they were detected at; evaluation errors carry
/// the values involved. Both render as human-readable messages.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Lifts parse errors into evaluation errors so callers see one channel.
/// - Implements `Display` and `std::error::Error` for reporting.
pub mod error;
/// Orchestrates the entire process of reading and evaluating an expression.
///
/// This module ties together lexing, parsing, evaluation and the value model.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and value
///   types.
/// - Provides the lower-level entry points used by the functions below.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General utilities for arbitrary-precision integers.
///
/// # Responsibilities
/// - Read integer prefixes out of strings.
/// - Provide floor and truncating division that report zero divisors.
pub mod util;

/// Parses a source string holding exactly one expression, with the default
/// [`ParserConfig`].
///
/// # Example
/// ```
/// use lisper::parse;
///
/// assert_eq!(parse("'x").unwrap().to_string(), "(quote x)");
/// assert!(parse("(1 2").is_err());
/// ```
pub fn parse(source: &str) -> ParseResult<Value> {
    parse_with(source, &ParserConfig::default())
}

/// Parses a source string holding exactly one expression.
pub fn parse_with(source: &str, config: &ParserConfig) -> ParseResult<Value> {
    let _span = tracing::debug_span!("parse", len = source.len()).entered();
    parse_source(source, config)
}

/// Evaluates an already parsed value.
pub fn eval(value: &Value) -> EvalResult<Value> {
    let _span = tracing::debug_span!("eval").entered();
    interpreter::evaluator::core::eval(value)
}

/// Parses and evaluates a source string.
///
/// Parse failures are returned as [`EvalError::ParseFailure`], so a single
/// error type covers both phases.
///
/// # Errors
/// Returns an error if parsing or evaluation fails.
///
/// # Examples
/// ```
/// use lisper::{error::EvalError, get_result, interpreter::value::core::Value};
///
/// assert_eq!(get_result("(+ 1 2 3)").unwrap(), Value::from(6));
///
/// // Unknown primitive.
/// assert!(matches!(get_result("(foo 1 2)"), Err(EvalError::UnknownFunction { .. })));
///
/// // Unterminated list.
/// assert!(matches!(get_result("(1 2"), Err(EvalError::ParseFailure(_))));
/// ```
pub fn get_result(source: &str) -> EvalResult<Value> {
    get_result_with(source, &ParserConfig::default())
}

/// Parses and evaluates a source string with an explicit parser configuration.
pub fn get_result_with(source: &str, config: &ParserConfig) -> EvalResult<Value> {
    let value = parse_with(source, config)?;
    let result = eval(&value);

    match &result {
        Ok(value) => tracing::debug!(%value, "evaluated"),
        Err(error) => tracing::debug!(%error, "evaluation failed"),
    }

    result
}

/// Parses and evaluates a source string and renders the outcome as text.
///
/// On success this is the printed result value; on failure it is the error
/// message. Callers that need to tell the two apart should use
/// [`get_result`].
///
/// # Example
/// ```
/// use lisper::render_result;
///
/// assert_eq!(render_result("(< 1 2)"), "True");
/// assert_eq!(render_result("(+ 1)"), "Expected 2 args; found values 1");
/// ```
#[must_use]
pub fn render_result(source: &str) -> String {
    get_result(source).map_or_else(|error: EvalError| error.to_string(), |value| value.to_string())
}

/// Names of all primitives the evaluator knows.
///
/// # Example
/// ```
/// let names = lisper::primitive_names();
///
/// assert!(names.contains(&"+"));
/// assert!(names.contains(&"string>=?"));
/// assert_eq!(names.len(), 20);
/// ```
#[must_use]
pub const fn primitive_names() -> &'static [&'static str] {
    PRIMITIVE_FUNCTIONS
}
