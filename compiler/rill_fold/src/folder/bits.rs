//! Bit-level operators: slice extraction and concatenation.

use num_traits::ToPrimitive;

use rill_diagnostic::reports;
use rill_ir::ExprId;

use crate::arith;
use crate::errors::Ice;

use super::ConstantFolder;

impl ConstantFolder<'_> {
    /// `base[msb:lsb]`. The indexes must be constants up front; the base is
    /// only required once types are known, because the result type comes
    /// from the type map.
    pub(super) fn fold_slice(
        &mut self,
        base: ExprId,
        msb: ExprId,
        lsb: ExprId,
        id: ExprId,
        original: ExprId,
    ) -> Result<ExprId, Ice> {
        let (Some(msb_constant), Some(lsb_constant)) =
            (self.resolve_constant(msb), self.resolve_constant(lsb))
        else {
            let diag = reports::not_constant(self.arena.span(id));
            self.emit(diag);
            return Ok(id);
        };
        if !self.types_known() {
            return Ok(id);
        }
        let Some(base_constant) = self.resolve_constant(base) else {
            return Ok(id);
        };
        let Some((msb_value, _, _)) = self.int_parts(msb_constant) else {
            let diag = reports::expected_integer(self.arena.span(msb_constant));
            self.emit(diag);
            return Ok(id);
        };
        let Some((lsb_value, _, _)) = self.int_parts(lsb_constant) else {
            let diag = reports::expected_integer(self.arena.span(lsb_constant));
            self.emit(diag);
            return Ok(id);
        };
        let Some((base_value, _, base_radix)) = self.int_parts(base_constant) else {
            let diag = reports::expected_integer(self.arena.span(base));
            self.emit(diag);
            return Ok(id);
        };

        let max_width = self.config.max_width;
        let (Some(high), Some(low)) = (
            self.arena.value(msb_value).to_u32(),
            self.arena.value(lsb_value).to_u32(),
        ) else {
            let diag = reports::slice_out_of_range(self.arena.span(id), max_width);
            self.emit(diag);
            return Ok(id);
        };
        if high < low {
            let diag = reports::slice_bounds_reversed(self.arena.span(id));
            self.emit(diag);
            return Ok(id);
        }
        if high > max_width || low > max_width {
            let diag = reports::slice_out_of_range(self.arena.span(id), max_width);
            self.emit(diag);
            return Ok(id);
        }

        let value = arith::slice_bits(self.arena.value(base_value), high, low);
        let result_ty = self.lookup_type(original)?;
        if self.types.as_bits(result_ty).is_none() {
            return Err(Ice::SliceTypeNotBits {
                span: self.arena.span(id),
            });
        }
        let span = self.arena.span(id);
        let result = self.arena.new_constant(value, result_ty, base_radix, span);
        self.set_constant(id, original, result);
        Ok(result)
    }

    /// `left ++ right`. Both operands must already be fixed-width constants
    /// of the same type; the result width is the sum, signedness from the
    /// left operand.
    pub(super) fn fold_concat(
        &mut self,
        left: ExprId,
        right: ExprId,
        id: ExprId,
        original: ExprId,
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
        let (Some((left_width, left_signed)), Some((right_width, _))) =
            (self.types.as_bits(left_ty), self.types.as_bits(right_ty))
        else {
            let diag = reports::concat_widths_unknown(self.arena.span(id));
            self.emit(diag);
            return Ok(id);
        };
        if left_ty != right_ty {
            let left_text = self.types.display(left_ty, self.interner);
            let right_text = self.types.display(right_ty, self.interner);
            let diag = reports::width_mismatch(self.arena.span(id), &left_text, &right_text);
            self.emit(diag);
            return Ok(id);
        }

        let value = arith::concat_bits(
            self.arena.value(left_value),
            self.arena.value(right_value),
            right_width,
        );
        let result_ty = self.types.bits(left_width + right_width, left_signed);
        let span = self.arena.span(id);
        let result = self.arena.new_constant(value, result_ty, left_base, span);
        self.set_constant(id, original, result);
        Ok(result)
    }
}
