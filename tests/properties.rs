//! Property-based tests for the reader and the evaluator.
//!
//! These tests generate random values and check that:
//! 1. Rendering a value and parsing the text gives the value back.
//! 2. Literals evaluate to themselves and quoting returns its argument.
//! 3. Arithmetic on generated numbers agrees with `BigInt` arithmetic.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use lisper::{eval, get_result, interpreter::value::core::Value, parse};
use num_bigint::BigInt;
use proptest::prelude::*;

// -- Value Generation Strategies --

/// Generate an atom that the reader reads back as the same atom.
///
/// `#` is left out so that `#t` and `#f` never come up.
fn atom_strategy() -> impl Strategy<Value = Value> {
    prop::string::string_regex("[a-z+*<>=!?_~-][a-z0-9+*<>=!?_~-]{0,8}").expect("valid regex")
                                                                         .prop_map(Value::Atom)
}

/// Generate string contents that need no escaping.
fn plain_string_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z0-9 !?.,:;()']{0,12}").expect("valid regex")
}

fn number_strategy() -> impl Strategy<Value = Value> {
    any::<u64>().prop_map(|n| Value::Number(BigInt::from(n)))
}

/// Generate a tree of values whose printed form parses back to the same tree.
///
/// Booleans print as `True` and `False`, which read back as atoms, so they
/// are not part of the tree.
fn readable_value_strategy() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![atom_strategy(),
                           number_strategy(),
                           plain_string_strategy().prop_map(Value::String),];

    leaf.prop_recursive(4, 32, 5, |inner| {
            prop_oneof![prop::collection::vec(inner.clone(), 0..5).prop_map(Value::List),
                        (prop::collection::vec(inner.clone(), 1..4), inner).prop_map(|(head, tail)| {
                                                                                Value::DottedList(head,
                                                                                                  Box::new(tail))
                                                                            }),
                        inner_quote(),]
        })
}

/// Generate a quoted atom, which reads back from its `'x` shorthand too.
fn inner_quote() -> impl Strategy<Value = Value> {
    atom_strategy().prop_map(Value::quoted)
}

fn literal_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![number_strategy(),
                plain_string_strategy().prop_map(Value::String),
                any::<bool>().prop_map(Value::Bool),]
}

// -- Properties --

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn rendered_values_parse_back(value in readable_value_strategy()) {
        let rendered = value.to_string();
        prop_assert_eq!(parse(&rendered), Ok(value), "rendered as {}", rendered);
    }

    #[test]
    fn literals_evaluate_to_themselves(value in literal_strategy()) {
        prop_assert_eq!(eval(&value), Ok(value.clone()));
    }

    #[test]
    fn quote_returns_its_argument(value in readable_value_strategy()) {
        prop_assert_eq!(eval(&value.clone().quoted()), Ok(value));
    }

    #[test]
    fn addition_matches_bigint(a in any::<u64>(), b in any::<u64>(), c in any::<u64>()) {
        let expected = BigInt::from(a) + BigInt::from(b) + BigInt::from(c);
        prop_assert_eq!(get_result(&format!("(+ {a} {b} {c})")), Ok(Value::Number(expected)));
    }

    #[test]
    fn floor_division_and_mod_recombine(a in any::<u32>(), b in 1..u32::MAX) {
        let quotient = get_result(&format!("(/ (- 0 {a}) {b})")).unwrap().as_number().unwrap();
        let modulus = get_result(&format!("(mod (- 0 {a}) {b})")).unwrap().as_number().unwrap();

        prop_assert_eq!(quotient * BigInt::from(b) + modulus.clone(), -BigInt::from(a));
        prop_assert!(modulus >= BigInt::from(0) && modulus < BigInt::from(b));
    }

    #[test]
    fn parsing_never_panics(source in "\\PC{0,40}") {
        let _ = parse(&source);
    }
}
