use pretty_assertions::assert_eq;
use rill_ir::Span;

use super::DiagnosticSink;
use crate::{reports, ErrorCode};

#[test]
fn counts_errors_and_warnings_separately() {
    let mut sink = DiagnosticSink::new();
    sink.emit(reports::division_by_zero(Span::new(0, 5)));
    sink.emit(reports::unreachable_case(Span::new(6, 9)));
    sink.emit(reports::expected_integer(Span::new(10, 12)));
    assert_eq!(sink.error_count(), 2);
    assert_eq!(sink.warning_count(), 1);
    assert!(sink.has_errors());
}

#[test]
fn preserves_emission_order() {
    let mut sink = DiagnosticSink::new();
    sink.emit(reports::expected_integer(Span::new(0, 1)));
    sink.emit(reports::expected_boolean(Span::new(2, 3)));
    let codes: Vec<_> = sink.diagnostics().iter().map(|d| d.code).collect();
    assert_eq!(codes, vec![ErrorCode::E2002, ErrorCode::E2003]);
}

#[test]
fn drain_resets_the_sink() {
    let mut sink = DiagnosticSink::new();
    sink.emit(reports::modulo_by_zero(Span::new(0, 4)));
    let drained = sink.drain();
    assert_eq!(drained.len(), 1);
    assert!(!sink.has_errors());
    assert!(sink.diagnostics().is_empty());
}
