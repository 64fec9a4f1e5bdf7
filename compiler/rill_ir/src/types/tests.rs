use pretty_assertions::assert_eq;

use super::{StructField, Type, TypeId, TypePool};
use crate::StringInterner;

#[test]
fn seeded_types_match_constants() {
    let pool = TypePool::new();
    assert_eq!(pool.get(TypeId::BOOL), Type::Bool);
    assert_eq!(pool.get(TypeId::UNBOUNDED), Type::Unbounded);
    assert_eq!(pool.get(TypeId::ERROR), Type::Error);
}

#[test]
fn bits_types_are_interned_by_shape() {
    let mut pool = TypePool::new();
    let a = pool.bits(8, false);
    let b = pool.bits(8, false);
    let c = pool.bits(8, true);
    let d = pool.bits(16, false);
    assert_eq!(a, b);
    assert_ne!(a, c);
    assert_ne!(a, d);
}

#[test]
fn struct_fields_round_trip_in_order() {
    let interner = StringInterner::new();
    let mut pool = TypePool::new();
    let w8 = pool.bits(8, false);
    let w16 = pool.bits(16, false);
    let fields = [
        StructField {
            name: interner.intern("src"),
            ty: w16,
        },
        StructField {
            name: interner.intern("ttl"),
            ty: w8,
        },
    ];
    let st = pool.structure(interner.intern("Header"), &fields);
    let Type::Struct { fields: range, .. } = pool.get(st) else {
        panic!("expected a struct type");
    };
    let stored = pool.fields(range);
    assert_eq!(stored.len(), 2);
    assert_eq!(stored[0].name, interner.intern("src"));
    assert_eq!(stored[1].ty, w8);
}

#[test]
fn display_renders_source_syntax() {
    let interner = StringInterner::new();
    let mut pool = TypePool::new();
    let u8t = pool.bits(8, false);
    let i4t = pool.bits(4, true);
    let stack = pool.stack(u8t, 3);
    assert_eq!(pool.display(TypeId::BOOL, &interner), "bool");
    assert_eq!(pool.display(u8t, &interner), "bit<8>");
    assert_eq!(pool.display(i4t, &interner), "int<4>");
    assert_eq!(pool.display(TypeId::UNBOUNDED, &interner), "int");
    assert_eq!(pool.display(stack, &interner), "bit<8>[3]");
}
