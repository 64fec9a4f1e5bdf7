use super::StringInterner;
use crate::Name;
use pretty_assertions::assert_eq;

#[test]
fn intern_resolve_round_trip() {
    let interner = StringInterner::new();
    let name = interner.intern("payload");
    assert_eq!(interner.resolve(name), "payload");
}

#[test]
fn same_content_same_handle() {
    let interner = StringInterner::new();
    let a = interner.intern("hdr");
    let b = interner.intern("hdr");
    assert_eq!(a, b);
}

#[test]
fn distinct_content_distinct_handles() {
    let interner = StringInterner::new();
    let a = interner.intern("src");
    let b = interner.intern("dst");
    assert_ne!(a, b);
}

#[test]
fn empty_string_is_pre_interned() {
    let interner = StringInterner::new();
    assert_eq!(interner.intern(""), Name::EMPTY);
    assert_eq!(interner.resolve(Name::EMPTY), "");
    assert_eq!(interner.len(), 1);
}
