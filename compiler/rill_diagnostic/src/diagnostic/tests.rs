use pretty_assertions::assert_eq;
use rill_ir::Span;

use super::{Diagnostic, Severity};
use crate::ErrorCode;

#[test]
fn builder_accumulates_labels_and_notes() {
    let diag = Diagnostic::error(ErrorCode::E2001)
        .with_message("operands have different types: bit<8> and bit<16>")
        .with_label(Span::new(4, 9), "here")
        .with_secondary_label(Span::new(0, 3), "left operand")
        .with_note("width and signedness must match");
    assert_eq!(diag.severity, Severity::Error);
    assert!(diag.is_error());
    assert_eq!(diag.labels.len(), 2);
    assert_eq!(diag.notes.len(), 1);
    assert_eq!(diag.primary_span(), Some(Span::new(4, 9)));
}

#[test]
fn warnings_are_not_errors() {
    let diag = Diagnostic::warning(ErrorCode::W4002).with_message("unreachable case");
    assert_eq!(diag.severity, Severity::Warning);
    assert!(!diag.is_error());
}

#[test]
fn display_includes_code_and_labels() {
    let diag = Diagnostic::error(ErrorCode::E4001)
        .with_message("division by zero")
        .with_label(Span::new(2, 7), "in this expression")
        .with_note("the result folds to 0");
    let rendered = diag.to_string();
    assert_eq!(
        rendered,
        "error [E4001]: division by zero\n  --> 2..7: in this expression\n  = note: the result folds to 0"
    );
}

#[test]
fn error_code_metadata() {
    assert_eq!(ErrorCode::E4001.as_str(), "E4001");
    assert_eq!(ErrorCode::E4001.description(), "division by zero");
    assert_eq!(ErrorCode::W4003.to_string(), "W4003");
}
