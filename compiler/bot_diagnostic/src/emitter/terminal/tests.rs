use super::*;
use crate::ErrorCode;

fn sample_diagnostic() -> Diagnostic {
    Diagnostic::error(ErrorCode::E2002)
        .with_message("`add` takes 2 arguments, found 3")
        .with_origin("scripts/red.bot")
        .with_note("in `add(1, 2, 3)`")
        .with_suggestion("remove the extra argument")
}

fn render(mode: ColorMode, is_tty: bool, diag: &Diagnostic) -> String {
    let mut output = Vec::new();
    let mut emitter = TerminalEmitter::with_color_mode(&mut output, mode, is_tty);
    emitter.emit(diag);
    emitter.flush();
    String::from_utf8(output).unwrap()
}

#[test]
fn plain_output() {
    let text = render(ColorMode::Never, false, &sample_diagnostic());
    assert!(text.starts_with("error[E2002]: `add` takes 2 arguments, found 3\n"));
    assert!(text.contains("  --> scripts/red.bot\n"));
    assert!(text.contains("  = note: in `add(1, 2, 3)`\n"));
    assert!(text.contains("  = help: remove the extra argument\n"));
    assert!(!text.contains("\x1b["));
}

#[test]
fn colored_output() {
    let text = render(ColorMode::Always, false, &sample_diagnostic());
    assert!(text.contains("\x1b[1;31merror"));
    assert!(text.contains("E2002"));
}

#[test]
fn auto_mode_follows_tty() {
    assert!(render(ColorMode::Auto, true, &sample_diagnostic()).contains("\x1b["));
    assert!(!render(ColorMode::Auto, false, &sample_diagnostic()).contains("\x1b["));
}

#[test]
fn emit_all_writes_each() {
    let mut output = Vec::new();
    let mut emitter = TerminalEmitter::with_color_mode(&mut output, ColorMode::Never, false);
    emitter.emit_all(&[
        Diagnostic::error(ErrorCode::E1001).with_message("first"),
        Diagnostic::warning(ErrorCode::W1001).with_message("second"),
    ]);
    emitter.flush();

    let text = String::from_utf8(output).unwrap();
    assert!(text.contains("error[E1001]: first"));
    assert!(text.contains("warning[W1001]: second"));
}

#[test]
fn summary_counts() {
    let mut output = Vec::new();
    let mut emitter = TerminalEmitter::with_color_mode(&mut output, ColorMode::Never, false);
    emitter.emit_summary(2, 1);
    emitter.emit_summary(1, 0);
    emitter.emit_summary(0, 3);
    emitter.emit_summary(0, 0);

    let text = String::from_utf8(output).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(
        lines,
        [
            "error: could not load scripts due to 2 previous errors; 1 warning emitted",
            "error: could not load scripts due to previous error",
            "warning: 3 warnings emitted",
        ]
    );
}

#[test]
fn color_mode_default_is_auto() {
    assert_eq!(ColorMode::default(), ColorMode::Auto);
    assert!(ColorMode::Always.should_use_colors(false));
    assert!(!ColorMode::Never.should_use_colors(true));
}
