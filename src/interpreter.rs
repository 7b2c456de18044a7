/// The evaluator module reduces parsed values to results.
///
/// The evaluator walks a `Value` tree, resolves quoting, evaluates the
/// arguments of an application and dispatches to the primitive table. It is
/// stateless: every call depends only on the value it is given.
///
/// # Responsibilities
/// - Returns self-evaluating literals unchanged.
/// - Applies primitives to their evaluated arguments.
/// - Reports evaluation errors such as arity or type mismatches.
pub mod evaluator;
/// The lexer module tokenizes source text for the parser.
///
/// The lexer reads the raw input and produces a stream of tokens for
/// parentheses, quotes, dots, numbers, strings, symbols and whitespace runs,
/// each tagged with the line and column it starts at.
///
/// # Responsibilities
/// - Converts the input character stream into positioned tokens.
/// - Decodes string escapes and arbitrary-precision number literals.
/// - Reports lexical errors such as stray characters and unterminated strings.
pub mod lexer;
/// The parser module builds a `Value` tree from tokens.
///
/// The parser is a recursive-descent reader for s-expressions. It handles
/// atoms, literals, quoting, proper lists and dotted lists, and rejects any
/// input that is not exactly one expression.
///
/// # Responsibilities
/// - Converts tokens into `Value` nodes.
/// - Tells proper and dotted lists apart with one token of lookahead.
/// - Bounds nesting depth so that hostile input cannot exhaust the stack.
pub mod parser;
/// The value module defines the data flowing through the interpreter.
///
/// A single recursive `Value` type serves as syntax tree, evaluation input and
/// evaluation result. This module also provides its printed form and the
/// coercions primitives use to read their arguments.
///
/// # Responsibilities
/// - Defines the `Value` enum and its variants.
/// - Renders values in their canonical textual form.
/// - Coerces values to numbers, booleans and strings for primitives.
pub mod value;
