//! Select-case reduction.
//!
//! For a constant selector, each case's keyset is classified against the
//! selector value as definitely-matching, definitely-not, or undecidable.
//! Definite non-matches are dropped; the first definite match terminates
//! the list. If undecidable cases precede the match it survives as a
//! `default` fallback after them; otherwise the whole select collapses to
//! the matching case's result state. Cases past the terminator are
//! unreachable.

use smallvec::SmallVec;

use rill_diagnostic::reports;
use rill_ir::{CaseRange, ExprId, ExprKind, SelectCase, Span, ValueId};

use crate::errors::Ice;

use super::ConstantFolder;

/// Classification of a selector value against one keyset.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub(super) enum Containment {
    Yes,
    No,
    DontKnow,
}

impl ConstantFolder<'_> {
    /// Reduce a select expression's case list, preserving case order.
    pub(super) fn fold_select(
        &mut self,
        selector: ExprId,
        cases: CaseRange,
        id: ExprId,
        original: ExprId,
    ) -> Result<ExprId, Ice> {
        if !self.types_known() {
            return Ok(id);
        }
        let Some(selector_constant) = self.resolve_constant(selector) else {
            return Ok(id);
        };

        let case_list: SmallVec<[SelectCase; 8]> =
            SmallVec::from_slice(self.arena.get_cases(cases));
        let mut kept: SmallVec<[SelectCase; 8]> = SmallVec::new();
        let mut some_unknown = false;
        let mut changes = false;
        let mut finished = false;
        let mut direct = None;

        for case in case_list {
            if finished {
                // A trailing `default` is ordinary structure and drops
                // quietly; anything else past the decided case is dead code
                // worth flagging.
                if self.config.warnings
                    && !matches!(*self.arena.kind(case.keyset), ExprKind::Default)
                {
                    let diag = reports::unreachable_case(self.arena.span(case.keyset));
                    self.emit(diag);
                }
                continue;
            }
            match self.set_contains(case.keyset, selector_constant)? {
                Containment::No => changes = true,
                Containment::DontKnow => {
                    some_unknown = true;
                    kept.push(case);
                }
                Containment::Yes => {
                    changes = true;
                    finished = true;
                    if some_unknown {
                        // Uncertain cases precede this one: keep it as the
                        // fallback after them.
                        let keyset = self.arena.push(ExprKind::Default, Span::DUMMY);
                        kept.push(SelectCase {
                            keyset,
                            state: case.state,
                        });
                    } else {
                        direct = Some(case.state);
                    }
                }
            }
        }

        if let Some(state) = direct {
            return Ok(state);
        }
        if !changes {
            return Ok(id);
        }
        if kept.is_empty() && self.config.warnings {
            let diag = reports::no_case_matches(self.arena.span(id));
            self.emit(diag);
        }
        let span = self.arena.span(id);
        let range = self.arena.push_cases(&kept);
        let result = self.alloc(
            ExprKind::Select {
                selector,
                cases: range,
            },
            span,
            original,
        );
        Ok(result)
    }

    /// Classify whether `selector` (already resolved to a constant) is
    /// contained in `keyset`.
    pub(super) fn set_contains(
        &mut self,
        keyset: ExprId,
        selector: ExprId,
    ) -> Result<Containment, Ice> {
        if matches!(*self.arena.kind(keyset), ExprKind::Default) {
            return Ok(Containment::Yes);
        }

        if let ExprKind::List(selector_components) = *self.arena.kind(selector) {
            if let ExprKind::List(keyset_components) = *self.arena.kind(keyset) {
                if selector_components.len() != keyset_components.len() {
                    return Err(Ice::KeysetSizeMismatch {
                        span: self.arena.span(keyset),
                    });
                }
                let selectors: SmallVec<[ExprId; 8]> =
                    SmallVec::from_slice(self.arena.get_expr_list(selector_components));
                let keysets: SmallVec<[ExprId; 8]> =
                    SmallVec::from_slice(self.arena.get_expr_list(keyset_components));
                for (sub_keyset, sub_selector) in keysets.iter().zip(selectors.iter()) {
                    let contained = self.set_contains(*sub_keyset, *sub_selector)?;
                    if contained != Containment::Yes {
                        return Ok(contained);
                    }
                }
                return Ok(Containment::Yes);
            }
            if selector_components.len() != 1 {
                return Err(Ice::SelectorListNotSingleton {
                    span: self.arena.span(selector),
                });
            }
            let single = self.arena.get_expr_list(selector_components)[0];
            return self.set_contains(keyset, single);
        }

        if let ExprKind::Bool(selector_value) = *self.arena.kind(selector) {
            let Some(key) = self.resolve_constant(keyset) else {
                let diag = reports::not_constant(self.arena.span(keyset));
                self.emit(diag);
                return Ok(Containment::DontKnow);
            };
            let ExprKind::Bool(key_value) = *self.arena.kind(key) else {
                return Err(Ice::KeysetNotBoolean {
                    span: self.arena.span(keyset),
                });
            };
            return Ok(if key_value == selector_value {
                Containment::Yes
            } else {
                Containment::No
            });
        }

        let Some((selector_value, _, _)) = self.int_parts(selector) else {
            return Err(Ice::SelectorNotConstant {
                span: self.arena.span(selector),
            });
        };
        match *self.arena.kind(keyset) {
            ExprKind::Constant { value, .. } => {
                Ok(if self.arena.value(value) == self.arena.value(selector_value) {
                    Containment::Yes
                } else {
                    Containment::No
                })
            }
            ExprKind::Range { lo, hi } => {
                let Some(lo_value) = self.keyset_bound(lo)? else {
                    return Ok(Containment::DontKnow);
                };
                let Some(hi_value) = self.keyset_bound(hi)? else {
                    return Ok(Containment::DontKnow);
                };
                let selector_value = self.arena.value(selector_value);
                let within = self.arena.value(lo_value) <= selector_value
                    && selector_value <= self.arena.value(hi_value);
                Ok(if within {
                    Containment::Yes
                } else {
                    Containment::No
                })
            }
            ExprKind::Mask { value, mask } => {
                let Some(masked_value) = self.keyset_bound(value)? else {
                    return Ok(Containment::DontKnow);
                };
                let Some(mask_value) = self.keyset_bound(mask)? else {
                    return Ok(Containment::DontKnow);
                };
                let agrees = (self.arena.value(masked_value) & self.arena.value(mask_value))
                    == (self.arena.value(mask_value) & self.arena.value(selector_value));
                Ok(if agrees {
                    Containment::Yes
                } else {
                    Containment::No
                })
            }
            _ => {
                let diag = reports::unexpected_keyset(self.arena.span(keyset));
                self.emit(diag);
                Ok(Containment::DontKnow)
            }
        }
    }

    /// A range or mask bound: must fold to an integer constant. A
    /// non-constant bound is a reported error and leaves the case
    /// undecidable.
    fn keyset_bound(&mut self, bound: ExprId) -> Result<Option<ValueId>, Ice> {
        let Some(constant) = self.resolve_constant(bound) else {
            let diag = reports::not_constant(self.arena.span(bound));
            self.emit(diag);
            return Ok(None);
        };
        let Some((value, _, _)) = self.int_parts(constant) else {
            return Err(Ice::KeysetBoundNotInteger {
                span: self.arena.span(bound),
            });
        };
        Ok(Some(value))
    }
}
