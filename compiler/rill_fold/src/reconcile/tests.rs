use pretty_assertions::assert_eq;
use rill_ir::{TypeId, TypePool};

use super::{reconcile, Reconciled, ReconcileError};

#[test]
fn identical_fixed_widths_pass_through() {
    let mut pool = TypePool::new();
    let u8t = pool.bits(8, false);
    assert_eq!(reconcile(&pool, u8t, u8t), Ok(Reconciled::Exact(u8t)));
}

#[test]
fn differing_widths_are_a_mismatch() {
    let mut pool = TypePool::new();
    let u8t = pool.bits(8, false);
    let u16t = pool.bits(16, false);
    assert_eq!(reconcile(&pool, u8t, u16t), Err(ReconcileError::Mismatch));
}

#[test]
fn differing_signedness_is_a_mismatch() {
    let mut pool = TypePool::new();
    let u8t = pool.bits(8, false);
    let i8t = pool.bits(8, true);
    assert_eq!(reconcile(&pool, u8t, i8t), Err(ReconcileError::Mismatch));
}

#[test]
fn both_unbounded_stays_unbounded() {
    let pool = TypePool::new();
    assert_eq!(
        reconcile(&pool, TypeId::UNBOUNDED, TypeId::UNBOUNDED),
        Ok(Reconciled::Unbounded(TypeId::UNBOUNDED))
    );
}

#[test]
fn unbounded_operand_widens_to_the_fixed_side() {
    let mut pool = TypePool::new();
    let i4t = pool.bits(4, true);
    assert_eq!(
        reconcile(&pool, TypeId::UNBOUNDED, i4t),
        Ok(Reconciled::Widened(i4t))
    );
    assert_eq!(
        reconcile(&pool, i4t, TypeId::UNBOUNDED),
        Ok(Reconciled::Widened(i4t))
    );
}

#[test]
fn non_integer_operands_are_rejected() {
    let mut pool = TypePool::new();
    let u8t = pool.bits(8, false);
    assert_eq!(
        reconcile(&pool, TypeId::BOOL, u8t),
        Err(ReconcileError::NotInteger)
    );
    assert_eq!(
        reconcile(&pool, u8t, TypeId::ERROR),
        Err(ReconcileError::NotInteger)
    );
}

#[test]
fn result_type_collapses_variants() {
    let mut pool = TypePool::new();
    let u8t = pool.bits(8, false);
    assert_eq!(Reconciled::Exact(u8t).result_type(), u8t);
    assert_eq!(Reconciled::Widened(u8t).result_type(), u8t);
    assert_eq!(
        Reconciled::Unbounded(TypeId::UNBOUNDED).result_type(),
        TypeId::UNBOUNDED
    );
}
