//! Property-based tests for statement splitting and classification.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use bot_parse::{classify, get_args, normalize_whitespace, parse, TokenClass};
use proptest::prelude::*;

/// A call whose argument text may contain any whitespace but no parentheses.
fn flat_call() -> impl Strategy<Value = String> {
    (
        prop::string::string_regex("[a-z][a-z0-9]{0,6}").expect("valid regex"),
        prop::string::string_regex("[a-z0-9 \t\n,]{0,12}").expect("valid regex"),
    )
        .prop_map(|(name, inner)| format!("{name}({inner})"))
}

/// A call nesting `flat_call`s inside its arguments.
fn nested_call() -> impl Strategy<Value = String> {
    (
        prop::string::string_regex("[a-z]{1,6}").expect("valid regex"),
        prop::collection::vec(flat_call(), 1..4),
    )
        .prop_map(|(name, args)| format!("{name}({})", args.join(",\n  ")))
}

fn statement() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::string::string_regex("[a-z][a-z0-9]{0,6}").expect("valid regex"),
        flat_call(),
        nested_call(),
    ]
}

fn separator() -> impl Strategy<Value = String> {
    prop::string::string_regex("[ \t\n]{1,4}").expect("valid regex")
}

proptest! {
    #[test]
    fn parse_recovers_statements(
        statements in prop::collection::vec(statement(), 0..6),
        sep in separator(),
        lead in separator(),
    ) {
        let text = format!("{lead}{}{sep}", statements.join(&sep));
        let expected: Vec<String> = statements.iter().map(|s| normalize_whitespace(s)).collect();
        prop_assert_eq!(parse(&text), expected);
    }

    #[test]
    fn parse_never_yields_blank_tokens(text in "[a-z0-9() \t\n,]{0,40}") {
        for token in parse(&text) {
            prop_assert!(!token.is_empty());
            prop_assert_eq!(token.trim(), token.as_str());
        }
    }

    #[test]
    fn finite_literals_classify_as_numbers(n in prop::num::f64::NORMAL | prop::num::f64::ZERO) {
        prop_assert_eq!(classify(&n.to_string()).unwrap(), TokenClass::Number);
        prop_assert_eq!(classify(&format!("{n:e}")).unwrap(), TokenClass::Number);
    }

    #[test]
    fn integer_literals_classify_as_numbers(n in any::<i64>()) {
        prop_assert_eq!(classify(&n.to_string()).unwrap(), TokenClass::Number);
    }

    #[test]
    fn flat_calls_split_on_every_comma(call in flat_call()) {
        let inner = &call[call.find('(').unwrap() + 1..call.len() - 1];
        match get_args(&call) {
            Ok(args) => prop_assert_eq!(args.join(","), inner),
            // Blank pieces between commas are rejected rather than split.
            Err(_) => prop_assert!(inner.split(',').any(|a| a.trim().is_empty())),
        }
    }
}
