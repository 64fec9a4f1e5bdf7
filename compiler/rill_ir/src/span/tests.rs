use super::Span;
use pretty_assertions::assert_eq;

#[test]
fn new_and_len() {
    let span = Span::new(3, 10);
    assert_eq!(span.start, 3);
    assert_eq!(span.end, 10);
    assert_eq!(span.len(), 7);
    assert!(!span.is_empty());
}

#[test]
fn dummy_is_empty() {
    assert!(Span::DUMMY.is_empty());
    assert_eq!(Span::DUMMY.len(), 0);
}

#[test]
fn debug_renders_as_range() {
    assert_eq!(format!("{:?}", Span::new(5, 9)), "5..9");
}
