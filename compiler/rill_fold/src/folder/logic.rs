//! Short-circuit boolean combinators and logical negation.

use rill_diagnostic::reports;
use rill_ir::{ExprId, ExprKind};

use crate::errors::Ice;

use super::ConstantFolder;

impl ConstantFolder<'_> {
    /// `&&` / `||`. Only the left operand is resolved eagerly. When the
    /// left value decides the result by short-circuit rules, the whole
    /// expression is that boolean; otherwise it folds to the right operand
    /// exactly as written — the right subtree is not resolved here, a later
    /// traversal folds it independently.
    pub(super) fn fold_short_circuit(
        &mut self,
        left: ExprId,
        right: ExprId,
        is_and: bool,
        id: ExprId,
        original: ExprId,
    ) -> Result<ExprId, Ice> {
        let Some(left_constant) = self.resolve_constant(left) else {
            return Ok(id);
        };
        let ExprKind::Bool(left_value) = *self.arena.kind(left_constant) else {
            let diag = reports::expected_boolean(self.arena.span(left_constant));
            self.emit(diag);
            return Ok(id);
        };
        if left_value == is_and {
            // `true && x` → x, `false || x` → x.
            self.set_constant(id, original, right);
            return Ok(right);
        }
        let span = self.arena.span(left_constant);
        let result = self.arena.push(ExprKind::Bool(left_value), span);
        self.set_constant(id, original, result);
        Ok(result)
    }

    /// Logical negation of a boolean constant.
    pub(super) fn fold_not(
        &mut self,
        operand: ExprId,
        id: ExprId,
        original: ExprId,
    ) -> Result<ExprId, Ice> {
        let Some(constant) = self.resolve_constant(operand) else {
            return Ok(id);
        };
        let ExprKind::Bool(value) = *self.arena.kind(constant) else {
            let diag = reports::expected_boolean(self.arena.span(constant));
            self.emit(diag);
            return Ok(id);
        };
        let span = self.arena.span(constant);
        let result = self.arena.push(ExprKind::Bool(!value), span);
        self.set_constant(id, original, result);
        Ok(result)
    }
}
