use num_bigint::BigInt;
use pretty_assertions::assert_eq;

use super::ExprArena;
use crate::{ExprKind, ExprRange, SelectCase, Span, TypeId};

#[test]
fn push_assigns_sequential_ids() {
    let mut arena = ExprArena::new();
    let a = arena.push(ExprKind::Bool(true), Span::new(0, 4));
    let b = arena.push(ExprKind::Bool(false), Span::new(5, 10));
    assert_ne!(a, b);
    assert_eq!(*arena.kind(a), ExprKind::Bool(true));
    assert_eq!(*arena.kind(b), ExprKind::Bool(false));
    assert_eq!(arena.span(b), Span::new(5, 10));
    assert_eq!(arena.len(), 2);
}

#[test]
fn equal_values_share_a_pool_slot() {
    let mut arena = ExprArena::new();
    let a = arena.push_value(BigInt::from(42));
    let b = arena.push_value(BigInt::from(42));
    let c = arena.push_value(BigInt::from(43));
    assert_eq!(a, b);
    assert_ne!(a, c);
    assert_eq!(*arena.value(a), BigInt::from(42));
}

#[test]
fn new_constant_pools_value_and_tags_span() {
    let mut arena = ExprArena::new();
    let id = arena.new_constant(BigInt::from(300), TypeId::UNBOUNDED, 10, Span::new(1, 4));
    let ExprKind::Constant { value, ty, base } = *arena.kind(id) else {
        panic!("expected a constant node");
    };
    assert_eq!(*arena.value(value), BigInt::from(300));
    assert_eq!(ty, TypeId::UNBOUNDED);
    assert_eq!(base, 10);
    assert_eq!(arena.span(id), Span::new(1, 4));
}

#[test]
fn expr_lists_round_trip() {
    let mut arena = ExprArena::new();
    let a = arena.push(ExprKind::Bool(true), Span::DUMMY);
    let b = arena.push(ExprKind::Bool(false), Span::DUMMY);
    let range = arena.push_expr_list(&[a, b]);
    assert_eq!(arena.get_expr_list(range), &[a, b]);
}

#[test]
fn empty_expr_list_is_shared_sentinel() {
    let mut arena = ExprArena::new();
    let range = arena.push_expr_list(&[]);
    assert_eq!(range, ExprRange::EMPTY);
    assert!(arena.get_expr_list(range).is_empty());
}

#[test]
fn case_lists_round_trip() {
    let mut arena = ExprArena::new();
    let key = arena.push(ExprKind::Default, Span::DUMMY);
    let state = arena.push(ExprKind::Bool(true), Span::DUMMY);
    let range = arena.push_cases(&[SelectCase { keyset: key, state }]);
    assert_eq!(arena.get_cases(range).len(), 1);
    assert_eq!(arena.get_cases(range)[0].keyset, key);
}
