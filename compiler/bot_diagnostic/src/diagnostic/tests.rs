use super::*;
use pretty_assertions::assert_eq;

#[test]
fn builder_collects_context() {
    let diag = Diagnostic::error(ErrorCode::E2001)
        .with_message("unknown command `atack`")
        .with_origin("red.bot")
        .with_note("commands are resolved when the script is loaded")
        .with_suggestion("did you mean `attack`?");

    assert!(diag.is_error());
    assert_eq!(diag.origin.as_deref(), Some("red.bot"));
    assert_eq!(diag.notes.len(), 1);
    assert_eq!(diag.suggestions, vec!["did you mean `attack`?".to_string()]);
}

#[test]
fn first_origin_wins() {
    let diag = Diagnostic::error(ErrorCode::E1001)
        .with_origin("inner")
        .with_origin("outer");
    assert_eq!(diag.origin.as_deref(), Some("inner"));
}

#[test]
fn display_format() {
    let diag = Diagnostic::error(ErrorCode::E1002)
        .with_message("unclosed parentheses in `mul(2, 8`")
        .with_origin("player 1")
        .with_suggestion("add the missing `)`");

    assert_eq!(
        diag.to_string(),
        "error [E1002]: unclosed parentheses in `mul(2, 8`\n  --> player 1\n  = help: add the missing `)`"
    );
}

#[test]
fn warning_is_not_error() {
    let diag = Diagnostic::warning(ErrorCode::W1001).with_message("script has no statements");
    assert!(!diag.is_error());
    assert_eq!(diag.to_string(), "warning [W1001]: script has no statements");
}
