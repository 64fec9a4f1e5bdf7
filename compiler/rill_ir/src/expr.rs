//! Expression node variants.
//!
//! All children are indices, not boxes: arbitrary-precision constant values
//! live in the arena's value pool ([`ValueId`]), tuple components and select
//! cases live in flat side arrays addressed by ranges. This keeps `ExprKind`
//! `Copy`, so rewriting passes can take node kinds by value without touching
//! the arena borrow.

use crate::ids::{CaseRange, ExprId, ExprRange, ValueId};
use crate::ops::{BinaryOp, UnaryOp};
use crate::types::TypeId;
use crate::Name;

/// Field name of the array-size pseudo-member on stack types.
pub const STACK_SIZE_FIELD: &str = "size";

/// Expression variants.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ExprKind {
    /// Integer constant. Carries its own type and the radix the literal was
    /// written in, so folded results display the way the source did.
    Constant {
        value: ValueId,
        ty: TypeId,
        base: u32,
    },

    /// Boolean literal: `true`, `false`.
    Bool(bool),

    /// Tuple/struct literal: an ordered list of component expressions.
    List(ExprRange),

    /// Reference to a declared name.
    Ref(Name),

    /// Unary operation: `-x`, `~x`, `!x`.
    Unary { op: UnaryOp, operand: ExprId },

    /// Binary operation, including comparisons, shifts, concatenation, and
    /// the short-circuit combinators.
    Binary {
        op: BinaryOp,
        left: ExprId,
        right: ExprId,
    },

    /// Bit slice: `base[msb:lsb]`.
    Slice {
        base: ExprId,
        msb: ExprId,
        lsb: ExprId,
    },

    /// Member projection: `base.field`.
    Member { base: ExprId, field: Name },

    /// Explicit cast: `(ty) expr`.
    Cast { ty: TypeId, expr: ExprId },

    /// Pattern-match dispatch over a selector.
    Select { selector: ExprId, cases: CaseRange },

    /// Inclusive keyset range: `lo .. hi`.
    Range { lo: ExprId, hi: ExprId },

    /// Masked keyset match: `value &&& mask`.
    Mask { value: ExprId, mask: ExprId },

    /// The `default` keyset, matching anything.
    Default,
}

/// One arm of a select expression: a keyset and the state it dispatches to.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct SelectCase {
    /// Pattern the selector is tested against.
    pub keyset: ExprId,
    /// Result state for a matching selector.
    pub state: ExprId,
}
