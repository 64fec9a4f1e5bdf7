//! Type reconciliation for binary operations.
//!
//! Given the types of two integer operands, derives the operation's result
//! type: identical fixed-width types pass through, two unbounded operands
//! stay unbounded, and a single unbounded operand is implicitly widened to
//! the other side's fixed width. Everything else is the caller's type error
//! to report.

use rill_ir::{Type, TypeId, TypePool};

/// Successful reconciliation of two operand types.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub(crate) enum Reconciled {
    /// Both operands have the same fixed-width type.
    Exact(TypeId),
    /// Both operands are unbounded; the result stays unbounded.
    Unbounded(TypeId),
    /// Exactly one operand was unbounded and takes the other's fixed width.
    Widened(TypeId),
}

impl Reconciled {
    /// The type the operation's result carries.
    pub(crate) fn result_type(self) -> TypeId {
        match self {
            Self::Exact(ty) | Self::Unbounded(ty) | Self::Widened(ty) => ty,
        }
    }
}

/// Why two operand types cannot be reconciled.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub(crate) enum ReconcileError {
    /// Both operands are fixed-width but differ in width or signedness.
    Mismatch,
    /// An operand is neither fixed-width nor unbounded.
    NotInteger,
}

/// Derive the result type for a binary operation over integer constants.
pub(crate) fn reconcile(
    pool: &TypePool,
    left: TypeId,
    right: TypeId,
) -> Result<Reconciled, ReconcileError> {
    match (pool.get(left), pool.get(right)) {
        (Type::Unbounded, Type::Unbounded) => Ok(Reconciled::Unbounded(left)),
        (Type::Bits { .. }, Type::Bits { .. }) => {
            // Fixed-width types are interned by shape, so ID equality is
            // width and signedness equality.
            if left == right {
                Ok(Reconciled::Exact(right))
            } else {
                Err(ReconcileError::Mismatch)
            }
        }
        (Type::Unbounded, Type::Bits { .. }) => Ok(Reconciled::Widened(right)),
        (Type::Bits { .. }, Type::Unbounded) => Ok(Reconciled::Widened(left)),
        _ => Err(ReconcileError::NotInteger),
    }
}

#[cfg(test)]
mod tests;
