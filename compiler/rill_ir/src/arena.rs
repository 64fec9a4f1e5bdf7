//! Expression arena.
//!
//! Struct-of-arrays storage for expression nodes: parallel `kinds`/`spans`
//! vectors indexed by [`ExprId`], a value pool for arbitrary-precision
//! constants, and flat side arrays for tuple components and select cases.
//!
//! Allocation tags the source span; nodes are immutable once pushed.

use num_bigint::BigInt;
use rustc_hash::FxHashMap;

use crate::expr::{ExprKind, SelectCase};
use crate::ids::{CaseRange, ExprId, ExprRange, ValueId};
use crate::types::TypeId;
use crate::Span;

/// Convert a length to `u32`, panicking with context on overflow.
pub(crate) fn to_u32(value: usize, what: &str) -> u32 {
    u32::try_from(value).unwrap_or_else(|_| panic!("too many {what}: {value}"))
}

/// Convert a length to `u16`, panicking with context on overflow.
pub(crate) fn to_u16(value: usize, what: &str) -> u16 {
    u16::try_from(value).unwrap_or_else(|_| panic!("{what} too long: {value}"))
}

/// Arena for expression nodes.
///
/// # Index Spaces
///
/// - `kinds`/`spans`: parallel arrays indexed by [`ExprId`]
/// - `values`: interned `BigInt` pool indexed by [`ValueId`]
/// - `expr_lists`: flat `Vec<ExprId>` indexed by [`ExprRange`]
/// - `cases`: select cases indexed by [`CaseRange`]
#[derive(Debug, Default)]
pub struct ExprArena {
    kinds: Vec<ExprKind>,
    spans: Vec<Span>,
    values: Vec<BigInt>,
    value_index: FxHashMap<BigInt, ValueId>,
    expr_lists: Vec<ExprId>,
    cases: Vec<SelectCase>,
}

impl ExprArena {
    /// Create an empty arena.
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a node, returning its ID.
    pub fn push(&mut self, kind: ExprKind, span: Span) -> ExprId {
        let id = ExprId::new(to_u32(self.kinds.len(), "expressions"));
        self.kinds.push(kind);
        self.spans.push(span);
        id
    }

    /// Get the expression kind for a node.
    #[inline]
    pub fn kind(&self, id: ExprId) -> &ExprKind {
        &self.kinds[id.index()]
    }

    /// Get the source span for a node.
    #[inline]
    pub fn span(&self, id: ExprId) -> Span {
        self.spans[id.index()]
    }

    /// Number of allocated nodes.
    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    /// Returns `true` if no nodes have been allocated.
    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    /// Intern an arbitrary-precision value, returning its pool ID.
    ///
    /// Equal values share a single pool slot.
    pub fn push_value(&mut self, value: BigInt) -> ValueId {
        if let Some(&id) = self.value_index.get(&value) {
            return id;
        }
        let id = ValueId::new(to_u32(self.values.len(), "constant values"));
        self.values.push(value.clone());
        self.value_index.insert(value, id);
        id
    }

    /// Get a pooled value.
    #[inline]
    pub fn value(&self, id: ValueId) -> &BigInt {
        &self.values[id.index()]
    }

    /// Allocate an integer constant node: pools the value, pushes the node.
    pub fn new_constant(&mut self, value: BigInt, ty: TypeId, base: u32, span: Span) -> ExprId {
        let value = self.push_value(value);
        self.push(ExprKind::Constant { value, ty, base }, span)
    }

    /// Allocate a contiguous range of expression IDs (tuple components,
    /// selector lists).
    pub fn push_expr_list(&mut self, ids: &[ExprId]) -> ExprRange {
        if ids.is_empty() {
            return ExprRange::EMPTY;
        }
        let start = to_u32(self.expr_lists.len(), "expression lists");
        self.expr_lists.extend_from_slice(ids);
        ExprRange::new(start, to_u16(ids.len(), "expression list"))
    }

    /// Get expression IDs from a range.
    pub fn get_expr_list(&self, range: ExprRange) -> &[ExprId] {
        if range.is_empty() {
            return &[];
        }
        let start = range.start as usize;
        &self.expr_lists[start..start + range.len()]
    }

    /// Allocate a contiguous range of select cases.
    pub fn push_cases(&mut self, cases: &[SelectCase]) -> CaseRange {
        if cases.is_empty() {
            return CaseRange::EMPTY;
        }
        let start = to_u32(self.cases.len(), "select cases");
        self.cases.extend_from_slice(cases);
        CaseRange::new(start, to_u16(cases.len(), "select case list"))
    }

    /// Get select cases from a range.
    pub fn get_cases(&self, range: CaseRange) -> &[SelectCase] {
        if range.is_empty() {
            return &[];
        }
        let start = range.start as usize;
        &self.cases[start..start + range.len()]
    }
}

#[cfg(test)]
mod tests;
