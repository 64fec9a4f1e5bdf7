//! Unary and binary numeric folding.
//!
//! All binary arithmetic, bitwise, and comparison operators route through
//! [`ConstantFolder::fold_binary`]: resolve both operands, reconcile their
//! types, apply the value function, build the result node. Comparison
//! operators produce a boolean literal; everything else produces an integer
//! constant carrying the reconciled type and the left operand's radix.

use num_bigint::BigInt;
use num_traits::{Signed, ToPrimitive, Zero};

use rill_diagnostic::{reports, DiagnosticSink};
use rill_ir::{ExprId, ExprKind, Span, Type};

use crate::arith::{self, ArithError};
use crate::errors::Ice;
use crate::reconcile::{reconcile, ReconcileError};

use super::ConstantFolder;

/// Result of applying a binary value function.
pub(super) enum Folded {
    Int(BigInt),
    Bool(bool),
}

/// Division with the report-then-fold-to-zero rule: an undefined division
/// emits an error diagnostic, and the expression still folds to `0`.
pub(super) fn eval_div(sink: &mut DiagnosticSink, a: &BigInt, b: &BigInt, span: Span) -> Folded {
    Folded::Int(match arith::checked_div(a, b) {
        Ok(value) => value,
        Err(error) => {
            sink.emit(match error {
                ArithError::NegativeOperand => reports::negative_division(span),
                ArithError::DivideByZero => reports::division_by_zero(span),
            });
            BigInt::zero()
        }
    })
}

/// Modulo with the same report-then-fold-to-zero rule as [`eval_div`].
pub(super) fn eval_mod(sink: &mut DiagnosticSink, a: &BigInt, b: &BigInt, span: Span) -> Folded {
    Folded::Int(match arith::checked_rem(a, b) {
        Ok(value) => value,
        Err(error) => {
            sink.emit(match error {
                ArithError::NegativeOperand => reports::negative_modulo(span),
                ArithError::DivideByZero => reports::modulo_by_zero(span),
            });
            BigInt::zero()
        }
    })
}

impl ConstantFolder<'_> {
    /// Arithmetic negation. Defined for fixed-width and unbounded operands,
    /// producing a result of the operand's type.
    pub(super) fn fold_neg(
        &mut self,
        operand: ExprId,
        id: ExprId,
        original: ExprId,
    ) -> Result<ExprId, Ice> {
        let Some(constant) = self.resolve_constant(operand) else {
            return Ok(id);
        };
        let Some((value, ty, base)) = self.int_parts(constant) else {
            let diag = reports::expected_integer(self.arena.span(constant));
            self.emit(diag);
            return Ok(id);
        };
        let span = self.arena.span(constant);
        match self.types.get(ty) {
            Type::Unbounded => {
                let negated = -self.arena.value(value).clone();
                // Not recorded in the memo table; a later visit recomputes.
                Ok(self.arena.new_constant(negated, ty, base, span))
            }
            Type::Bits { .. } => {
                let negated = -self.arena.value(value).clone();
                let result = self.arena.new_constant(negated, ty, base, span);
                self.set_constant(id, original, result);
                Ok(result)
            }
            _ => {
                if self.types_known() {
                    let diag = reports::integer_operands_required(self.arena.span(id));
                    self.emit(diag);
                }
                Ok(id)
            }
        }
    }

    /// Bitwise complement. Undefined without an explicit width, so an
    /// unbounded operand is a reported error.
    pub(super) fn fold_complement(
        &mut self,
        operand: ExprId,
        id: ExprId,
        original: ExprId,
    ) -> Result<ExprId, Ice> {
        let Some(constant) = self.resolve_constant(operand) else {
            return Ok(id);
        };
        let Some((value, ty, base)) = self.int_parts(constant) else {
            let diag = reports::expected_integer(self.arena.span(constant));
            self.emit(diag);
            return Ok(id);
        };
        match self.types.get(ty) {
            Type::Unbounded => {
                let diag = reports::explicit_width_required(self.arena.span(id));
                self.emit(diag);
                Ok(id)
            }
            Type::Bits { .. } => {
                let complemented = arith::complement(self.arena.value(value));
                let span = self.arena.span(constant);
                let result = self.arena.new_constant(complemented, ty, base, span);
                self.set_constant(id, original, result);
                Ok(result)
            }
            _ => {
                if self.types_known() {
                    let diag = reports::integer_operands_required(self.arena.span(id));
                    self.emit(diag);
                }
                Ok(id)
            }
        }
    }

    /// Shared binary folding: resolve both operands (left first), require
    /// integer constants, reconcile types, apply `eval`.
    pub(super) fn fold_binary(
        &mut self,
        left: ExprId,
        right: ExprId,
        id: ExprId,
        original: ExprId,
        eval: impl FnOnce(&mut DiagnosticSink, &BigInt, &BigInt, Span) -> Folded,
    ) -> Result<ExprId, Ice> {
        let Some(left_constant) = self.resolve_constant(left) else {
            return Ok(id);
        };
        let Some(right_constant) = self.resolve_constant(right) else {
            return Ok(id);
        };
        let Some((left_value, left_ty, left_base)) = self.int_parts(left_constant) else {
            let diag = reports::expected_integer(self.arena.span(left));
            self.emit(diag);
            return Ok(id);
        };
        let Some((right_value, right_ty, _)) = self.int_parts(right_constant) else {
            let diag = reports::expected_integer(self.arena.span(right));
            self.emit(diag);
            return Ok(id);
        };

        let result_ty = match reconcile(self.types, left_ty, right_ty) {
            Ok(reconciled) => reconciled.result_type(),
            Err(ReconcileError::Mismatch) => {
                let left_text = self.types.display(left_ty, self.interner);
                let right_text = self.types.display(right_ty, self.interner);
                let diag =
                    reports::width_mismatch(self.arena.span(id), &left_text, &right_text);
                self.emit(diag);
                return Ok(id);
            }
            Err(ReconcileError::NotInteger) => {
                if self.types_known() {
                    let diag = reports::integer_operands_required(self.arena.span(id));
                    self.emit(diag);
                }
                return Ok(id);
            }
        };

        let a = self.arena.value(left_value).clone();
        let b = self.arena.value(right_value).clone();
        let span = self.arena.span(id);
        let result = match eval(&mut *self.sink, &a, &b, span) {
            Folded::Int(value) => self.arena.new_constant(value, result_ty, left_base, span),
            Folded::Bool(value) => self.arena.push(ExprKind::Bool(value), span),
        };
        self.set_constant(id, original, result);
        Ok(result)
    }

    /// Equality and inequality. Two boolean operands short-circuit the
    /// generic integer path; mixing boolean and non-boolean is an error.
    pub(super) fn fold_compare(
        &mut self,
        left: ExprId,
        right: ExprId,
        eq_test: bool,
        id: ExprId,
        original: ExprId,
    ) -> Result<ExprId, Ice> {
        let Some(left_constant) = self.resolve_constant(left) else {
            return Ok(id);
        };
        let Some(right_constant) = self.resolve_constant(right) else {
            return Ok(id);
        };
        if let ExprKind::Bool(left_value) = *self.arena.kind(left_constant) {
            let ExprKind::Bool(right_value) = *self.arena.kind(right_constant) else {
                let diag = reports::boolean_operands_required(self.arena.span(id));
                self.emit(diag);
                return Ok(id);
            };
            let span = self.arena.span(id);
            let result = self
                .arena
                .push(ExprKind::Bool((left_value == right_value) == eq_test), span);
            self.set_constant(id, original, result);
            return Ok(result);
        }
        self.fold_binary(left, right, id, original, move |_, a, b, _| {
            Folded::Bool((a == b) == eq_test)
        })
    }

    /// Shift operators. The amount must be a non-negative constant; zero
    /// degenerates to the left operand as-is, without requiring it to be
    /// constant.
    pub(super) fn fold_shift(
        &mut self,
        left: ExprId,
        right: ExprId,
        left_shift: bool,
        id: ExprId,
        original: ExprId,
    ) -> Result<ExprId, Ice> {
        let Some(amount_constant) = self.resolve_constant(right) else {
            return Ok(id);
        };
        let Some((amount_value, _, _)) = self.int_parts(amount_constant) else {
            let diag = reports::expected_integer(self.arena.span(amount_constant));
            self.emit(diag);
            return Ok(id);
        };
        if self.arena.value(amount_value).is_negative() {
            let diag = reports::negative_shift(self.arena.span(id));
            self.emit(diag);
            return Ok(id);
        }
        if self.arena.value(amount_value).is_zero() {
            self.set_constant(id, original, left);
            return Ok(left);
        }

        let Some(left_constant) = self.resolve_constant(left) else {
            return Ok(id);
        };
        let Some((left_value, left_ty, left_base)) = self.int_parts(left_constant) else {
            let diag = reports::expected_integer(self.arena.span(left_constant));
            self.emit(diag);
            return Ok(id);
        };
        let Some(amount) = self.arena.value(amount_value).to_u32() else {
            let diag = reports::shift_amount_out_of_range(self.arena.span(id));
            self.emit(diag);
            return Ok(id);
        };

        if let Type::Bits { width, .. } = self.types.get(left_ty) {
            if width < amount && self.config.warnings {
                let diag = reports::shift_exceeds_width(self.arena.span(id), width, amount);
                self.emit(diag);
            }
        }

        let value = if left_shift {
            arith::shift_left(self.arena.value(left_value), amount)
        } else {
            arith::shift_right(self.arena.value(left_value), amount)
        };
        let span = self.arena.span(id);
        let result = self.arena.new_constant(value, left_ty, left_base, span);
        self.set_constant(id, original, result);
        Ok(result)
    }
}
