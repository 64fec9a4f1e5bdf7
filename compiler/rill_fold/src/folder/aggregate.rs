//! Member projection and casts.
//!
//! Neither handler emits recoverable diagnostics: once types are known, a
//! member projection or constant cast that cannot proceed means a tree or
//! type-map invariant was broken, which is an [`Ice`], or the operand is
//! simply not constant yet, which defers.

use num_bigint::BigInt;

use rill_ir::{ExprId, ExprKind, Name, Type, TypeId};

use crate::errors::Ice;

use super::ConstantFolder;

impl ConstantFolder<'_> {
    /// `base.field` on a struct-typed constant projects the component with
    /// the field's position; `.size` on a stack type is the declared
    /// element count regardless of whether the base is constant.
    pub(super) fn fold_member(
        &mut self,
        base: ExprId,
        field: Name,
        id: ExprId,
        original: ExprId,
    ) -> Result<ExprId, Ice> {
        if !self.types_known() {
            return Ok(id);
        }
        let span = self.arena.span(id);
        let base_ty = self.expr_type(base).ok_or(Ice::MissingType { span })?;
        let original_ty = self.lookup_type(original)?;

        let result = match self.types.get(base_ty) {
            Type::Stack { size, .. } if field == self.size_field => {
                self.arena
                    .new_constant(BigInt::from(size), TypeId::UNBOUNDED, 10, span)
            }
            base_kind => {
                let Some(constant) = self.resolve_constant(base) else {
                    return Ok(id);
                };
                let Type::Struct { fields, .. } = base_kind else {
                    return Err(Ice::MemberOfNonStruct { span });
                };
                let ExprKind::List(components) = *self.arena.kind(constant) else {
                    return Err(Ice::StructConstantNotList { span });
                };
                let index = self
                    .types
                    .fields(fields)
                    .iter()
                    .position(|f| f.name == field)
                    .ok_or_else(|| Ice::FieldNotFound {
                        span,
                        field: self.interner.resolve(field).to_owned(),
                    })?;
                let component = self.arena.get_expr_list(components)[index];
                let kind = *self.arena.kind(component);
                let component_span = self.arena.span(component);
                self.arena.push(kind, component_span)
            }
        };

        if let Some(type_map) = &mut self.type_map {
            type_map.set(result, original_ty);
            type_map.set_compile_time_constant(result);
        }
        self.set_constant(id, original, result);
        Ok(result)
    }

    /// Casts over constants. To a fixed-width integer type: re-base the
    /// source value (no truncation here; width semantics belong to the
    /// numeric representation) or map a boolean to `1`/`0`. To a
    /// struct-like type: a constant-preserving clone re-tagged with the
    /// destination type.
    pub(super) fn fold_cast(
        &mut self,
        target: TypeId,
        operand: ExprId,
        id: ExprId,
        original: ExprId,
    ) -> Result<ExprId, Ice> {
        let Some(constant) = self.resolve_constant(operand) else {
            return Ok(id);
        };
        let ty = if self.types_known() {
            self.lookup_type(original)?
        } else {
            target
        };
        match self.types.get(ty) {
            Type::Bits { .. } => {
                if let Some((value, _, base)) = self.int_parts(constant) {
                    let cloned = self.arena.value(value).clone();
                    let span = self.arena.span(constant);
                    let result = self.arena.new_constant(cloned, ty, base, span);
                    self.set_constant(id, original, result);
                    Ok(result)
                } else {
                    let ExprKind::Bool(value) = *self.arena.kind(constant) else {
                        return Err(Ice::CastSourceNotBoolean {
                            span: self.arena.span(constant),
                        });
                    };
                    let span = self.arena.span(id);
                    let result =
                        self.arena
                            .new_constant(BigInt::from(i32::from(value)), ty, 10, span);
                    self.set_constant(id, original, result);
                    Ok(result)
                }
            }
            Type::Struct { .. } if self.types_known() => {
                let original_ty = self.lookup_type(original)?;
                let kind = *self.arena.kind(constant);
                let span = self.arena.span(constant);
                let result = self.arena.push(kind, span);
                if let Some(type_map) = &mut self.type_map {
                    type_map.set(result, original_ty);
                    type_map.set_compile_time_constant(result);
                }
                self.set_constant(id, original, result);
                Ok(result)
            }
            _ => Ok(id),
        }
    }
}
