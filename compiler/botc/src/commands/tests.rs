use super::*;
use bot_diagnostic::ErrorCode;
use pretty_assertions::assert_eq;
use std::io::Write;

#[test]
fn read_scripts_keeps_paths_as_origins() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "wait()\nmove()").unwrap();
    let path = file.path().to_string_lossy().into_owned();

    let sources = read_scripts(std::slice::from_ref(&path)).unwrap();
    assert_eq!(sources.len(), 1);
    assert_eq!(sources[0].origin, path);
    assert_eq!(sources[0].text, "wait()\nmove()");
}

#[test]
fn read_scripts_reports_missing_files() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.bot").to_string_lossy().into_owned();
    let err = read_scripts(&[missing.clone()]).unwrap_err();
    assert!(err.starts_with(&format!("cannot read script '{missing}'")));
}

#[test]
fn report_counts_errors_and_summarizes() {
    let diagnostics = [
        Diagnostic::error(ErrorCode::E2001)
            .with_message("unknown command `atack`")
            .with_origin("a.bot"),
        Diagnostic::warning(ErrorCode::W1001)
            .with_message("script has no statements")
            .with_origin("b.bot"),
    ];

    let mut out = Vec::new();
    let errors = {
        let mut emitter = TerminalEmitter::with_color_mode(&mut out, ColorMode::Never, false);
        report(&mut emitter, &diagnostics)
    };
    assert_eq!(errors, 1);

    let text = String::from_utf8(out).unwrap();
    assert!(text.starts_with("error[E2001]: unknown command `atack`\n  --> a.bot\n"));
    assert!(text.contains("warning[W1001]: script has no statements\n  --> b.bot\n"));
    assert!(text.contains("could not load scripts due to previous error; 1 warning emitted"));
}

#[test]
fn report_is_silent_without_diagnostics() {
    let mut out = Vec::new();
    let errors = {
        let mut emitter = TerminalEmitter::with_color_mode(&mut out, ColorMode::Never, false);
        report(&mut emitter, &[])
    };
    assert_eq!(errors, 0);
    assert!(out.is_empty());
}
