//! The constant folder.
//!
//! [`ConstantFolder`] walks an expression tree bottom-up, rebuilding nodes
//! whose children folded and dispatching every rebuilt node to a per-kind
//! handler. Handlers consult already-folded operands through
//! [`ConstantFolder::resolve_constant`] and record results in a memo table
//! keyed by node identity.
//!
//! Each handler receives two identities: the node it is looking at (which
//! may be a rebuilt alias) and the pre-rewrite original. Results are
//! memoized under **both**, so a later visit holding either alias finds the
//! same cached value.

mod aggregate;
mod bits;
mod logic;
mod numeric;
mod select;

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use rill_diagnostic::{reports, DiagnosticSink};
use rill_ir::{
    BinaryOp, DeclId, Declarations, ExprArena, ExprId, ExprKind, Name, RefMap, SelectCase, Span,
    StringInterner, Type, TypeId, TypeMap, TypePool, UnaryOp, ValueId, STACK_SIZE_FIELD,
};

use crate::config::FoldConfig;
use crate::errors::Ice;

use numeric::Folded;

/// Constant-folding pass over one expression arena.
///
/// The folder is scoped to a single run: its memo table is working state,
/// not a persisted artifact. Attach a [`RefMap`] to fold references to
/// declared constants, and a [`TypeMap`] to enable the strict
/// post-inference mode.
pub struct ConstantFolder<'a> {
    arena: &'a mut ExprArena,
    types: &'a mut TypePool,
    interner: &'a StringInterner,
    sink: &'a mut DiagnosticSink,
    refs: Option<&'a RefMap>,
    type_map: Option<&'a mut TypeMap>,
    config: FoldConfig,
    /// Memo table: node identity to its resolved constant node.
    constants: FxHashMap<ExprId, ExprId>,
    /// Resolved values of folded constant declarations.
    decl_values: FxHashMap<DeclId, ExprId>,
    /// Interned name of the stack `size` pseudo-member.
    size_field: Name,
}

impl<'a> ConstantFolder<'a> {
    /// Create a folder in the conservative pre-inference mode.
    pub fn new(
        arena: &'a mut ExprArena,
        types: &'a mut TypePool,
        interner: &'a StringInterner,
        sink: &'a mut DiagnosticSink,
    ) -> Self {
        let size_field = interner.intern(STACK_SIZE_FIELD);
        ConstantFolder {
            arena,
            types,
            interner,
            sink,
            refs: None,
            type_map: None,
            config: FoldConfig::default(),
            constants: FxHashMap::default(),
            decl_values: FxHashMap::default(),
            size_field,
        }
    }

    /// Attach resolved references, enabling folding of names bound to
    /// constant declarations.
    pub fn with_ref_map(mut self, refs: &'a RefMap) -> Self {
        self.refs = Some(refs);
        self
    }

    /// Attach inferred types, switching the pass into its strict
    /// post-inference mode.
    pub fn with_type_map(mut self, type_map: &'a mut TypeMap) -> Self {
        self.type_map = Some(type_map);
        self
    }

    /// Override the default configuration.
    pub fn with_config(mut self, config: FoldConfig) -> Self {
        self.config = config;
        self
    }

    /// Fold one expression tree, returning the (possibly new) root.
    pub fn fold(&mut self, root: ExprId) -> Result<ExprId, Ice> {
        tracing::debug!(root = ?root, "constant folding expression tree");
        self.rewrite(root)
    }

    /// Fold every constant declaration in order: first its initializer
    /// tree, then the declaration itself.
    pub fn fold_program(&mut self, decls: &mut Declarations) -> Result<(), Ice> {
        tracing::debug!(declarations = decls.len(), "folding constant declarations");
        let ids: Vec<DeclId> = decls.ids().collect();
        for id in ids {
            let init = decls.get(id).init;
            let folded = self.fold(init)?;
            if folded != init {
                decls.set_init(id, folded);
            }
            self.fold_declaration(id, decls);
        }
        Ok(())
    }

    /// Resolve a node to its constant form, if it has one.
    ///
    /// Memoized nodes return their cached result. Integer and boolean
    /// literals stand for themselves. A tuple is constant only if every
    /// component is (checked depth-first; the tuple is never partially
    /// folded). Once types are known, a member of an enumeration type also
    /// stands for itself.
    pub fn resolve_constant(&self, id: ExprId) -> Option<ExprId> {
        if let Some(&cached) = self.constants.get(&id) {
            return Some(cached);
        }
        match *self.arena.kind(id) {
            ExprKind::Constant { .. } | ExprKind::Bool(_) => Some(id),
            ExprKind::List(components) => {
                for &component in self.arena.get_expr_list(components) {
                    self.resolve_constant(component)?;
                }
                Some(id)
            }
            ExprKind::Member { .. } if self.is_enum_constant(id) => Some(id),
            _ => None,
        }
    }

    /// Diagnostics and warnings recorded so far go through this sink.
    fn emit(&mut self, diagnostic: rill_diagnostic::Diagnostic) {
        self.sink.emit(diagnostic);
    }

    /// Record a folded result under both the current node and the
    /// pre-rewrite original.
    fn set_constant(&mut self, node: ExprId, original: ExprId, result: ExprId) {
        tracing::trace!(node = ?node, original = ?original, result = ?result, "folded");
        self.constants.insert(node, result);
        self.constants.insert(original, result);
    }

    fn is_enum_constant(&self, id: ExprId) -> bool {
        let Some(type_map) = self.type_map.as_ref() else {
            return false;
        };
        match type_map.get(id) {
            Some(ty) => matches!(self.types.get(ty), Type::Enum { .. }),
            None => false,
        }
    }

    fn types_known(&self) -> bool {
        self.type_map.is_some()
    }

    /// The recorded type of a node, required. Missing entries break the
    /// pass invariants, hence `Ice` and not a diagnostic.
    fn lookup_type(&self, id: ExprId) -> Result<TypeId, Ice> {
        self.type_map
            .as_ref()
            .and_then(|type_map| type_map.get(id))
            .ok_or(Ice::MissingType {
                span: self.arena.span(id),
            })
    }

    /// Best-effort type of a node: literals carry theirs inline, everything
    /// else comes from the type map.
    fn expr_type(&self, id: ExprId) -> Option<TypeId> {
        match *self.arena.kind(id) {
            ExprKind::Constant { ty, .. } => Some(ty),
            ExprKind::Bool(_) => Some(TypeId::BOOL),
            _ => self.type_map.as_ref().and_then(|type_map| type_map.get(id)),
        }
    }

    /// Split an integer-constant node into its parts.
    fn int_parts(&self, id: ExprId) -> Option<(ValueId, TypeId, u32)> {
        match *self.arena.kind(id) {
            ExprKind::Constant { value, ty, base } => Some((value, ty, base)),
            _ => None,
        }
    }

    /// Allocate a rebuilt node and carry the original's type-map entries
    /// over, so type queries keep resolving mid-pass.
    fn alloc(&mut self, kind: ExprKind, span: Span, original: ExprId) -> ExprId {
        let id = self.arena.push(kind, span);
        self.copy_type(original, id);
        id
    }

    fn copy_type(&mut self, from: ExprId, to: ExprId) {
        if let Some(type_map) = &mut self.type_map {
            if let Some(ty) = type_map.get(from) {
                type_map.set(to, ty);
            }
            if type_map.is_compile_time_constant(from) {
                type_map.set_compile_time_constant(to);
            }
        }
    }

    /// Post-order rewrite: fold children first, rebuild this node if any
    /// child changed, then dispatch to the per-kind handler with the
    /// original identity in hand.
    fn rewrite(&mut self, id: ExprId) -> Result<ExprId, Ice> {
        let rebuilt = self.rebuild_children(id)?;
        self.dispatch(rebuilt, id)
    }

    fn rebuild_children(&mut self, id: ExprId) -> Result<ExprId, Ice> {
        let span = self.arena.span(id);
        match *self.arena.kind(id) {
            ExprKind::Constant { .. }
            | ExprKind::Bool(_)
            | ExprKind::Ref(_)
            | ExprKind::Default => Ok(id),
            ExprKind::Unary { op, operand } => {
                let new_operand = self.rewrite(operand)?;
                if new_operand == operand {
                    Ok(id)
                } else {
                    Ok(self.alloc(
                        ExprKind::Unary {
                            op,
                            operand: new_operand,
                        },
                        span,
                        id,
                    ))
                }
            }
            ExprKind::Binary { op, left, right } => {
                // Left operand first: diagnostic order depends on it.
                let new_left = self.rewrite(left)?;
                let new_right = self.rewrite(right)?;
                if new_left == left && new_right == right {
                    Ok(id)
                } else {
                    Ok(self.alloc(
                        ExprKind::Binary {
                            op,
                            left: new_left,
                            right: new_right,
                        },
                        span,
                        id,
                    ))
                }
            }
            ExprKind::Slice { base, msb, lsb } => {
                let new_base = self.rewrite(base)?;
                let new_msb = self.rewrite(msb)?;
                let new_lsb = self.rewrite(lsb)?;
                if new_base == base && new_msb == msb && new_lsb == lsb {
                    Ok(id)
                } else {
                    Ok(self.alloc(
                        ExprKind::Slice {
                            base: new_base,
                            msb: new_msb,
                            lsb: new_lsb,
                        },
                        span,
                        id,
                    ))
                }
            }
            ExprKind::Member { base, field } => {
                let new_base = self.rewrite(base)?;
                if new_base == base {
                    Ok(id)
                } else {
                    Ok(self.alloc(
                        ExprKind::Member {
                            base: new_base,
                            field,
                        },
                        span,
                        id,
                    ))
                }
            }
            ExprKind::Cast { ty, expr } => {
                let new_expr = self.rewrite(expr)?;
                if new_expr == expr {
                    Ok(id)
                } else {
                    Ok(self.alloc(ExprKind::Cast { ty, expr: new_expr }, span, id))
                }
            }
            ExprKind::List(components) => {
                let old: SmallVec<[ExprId; 8]> =
                    SmallVec::from_slice(self.arena.get_expr_list(components));
                let mut new: SmallVec<[ExprId; 8]> = SmallVec::new();
                let mut changed = false;
                for component in old {
                    let folded = self.rewrite(component)?;
                    changed |= folded != component;
                    new.push(folded);
                }
                if changed {
                    let range = self.arena.push_expr_list(&new);
                    Ok(self.alloc(ExprKind::List(range), span, id))
                } else {
                    Ok(id)
                }
            }
            ExprKind::Select { selector, cases } => {
                let new_selector = self.rewrite(selector)?;
                let old: SmallVec<[SelectCase; 8]> =
                    SmallVec::from_slice(self.arena.get_cases(cases));
                let mut new: SmallVec<[SelectCase; 8]> = SmallVec::new();
                let mut changed = new_selector != selector;
                for case in old {
                    // Keysets fold; result states are opaque here.
                    let keyset = self.rewrite(case.keyset)?;
                    changed |= keyset != case.keyset;
                    new.push(SelectCase {
                        keyset,
                        state: case.state,
                    });
                }
                if changed {
                    let range = self.arena.push_cases(&new);
                    Ok(self.alloc(
                        ExprKind::Select {
                            selector: new_selector,
                            cases: range,
                        },
                        span,
                        id,
                    ))
                } else {
                    Ok(id)
                }
            }
            ExprKind::Range { lo, hi } => {
                let new_lo = self.rewrite(lo)?;
                let new_hi = self.rewrite(hi)?;
                if new_lo == lo && new_hi == hi {
                    Ok(id)
                } else {
                    Ok(self.alloc(
                        ExprKind::Range {
                            lo: new_lo,
                            hi: new_hi,
                        },
                        span,
                        id,
                    ))
                }
            }
            ExprKind::Mask { value, mask } => {
                let new_value = self.rewrite(value)?;
                let new_mask = self.rewrite(mask)?;
                if new_value == value && new_mask == mask {
                    Ok(id)
                } else {
                    Ok(self.alloc(
                        ExprKind::Mask {
                            value: new_value,
                            mask: new_mask,
                        },
                        span,
                        id,
                    ))
                }
            }
        }
    }

    fn dispatch(&mut self, id: ExprId, original: ExprId) -> Result<ExprId, Ice> {
        match *self.arena.kind(id) {
            ExprKind::Ref(_) => self.fold_ref(id, original),

            ExprKind::Unary {
                op: UnaryOp::Neg,
                operand,
            } => self.fold_neg(operand, id, original),
            ExprKind::Unary {
                op: UnaryOp::BitNot,
                operand,
            } => self.fold_complement(operand, id, original),
            ExprKind::Unary {
                op: UnaryOp::Not,
                operand,
            } => self.fold_not(operand, id, original),

            ExprKind::Binary {
                op: BinaryOp::Add,
                left,
                right,
            } => self.fold_binary(left, right, id, original, |_, a, b, _| Folded::Int(a + b)),
            ExprKind::Binary {
                op: BinaryOp::Sub,
                left,
                right,
            } => self.fold_binary(left, right, id, original, |_, a, b, _| Folded::Int(a - b)),
            ExprKind::Binary {
                op: BinaryOp::Mul,
                left,
                right,
            } => self.fold_binary(left, right, id, original, |_, a, b, _| Folded::Int(a * b)),
            ExprKind::Binary {
                op: BinaryOp::BitAnd,
                left,
                right,
            } => self.fold_binary(left, right, id, original, |_, a, b, _| Folded::Int(a & b)),
            ExprKind::Binary {
                op: BinaryOp::BitOr,
                left,
                right,
            } => self.fold_binary(left, right, id, original, |_, a, b, _| Folded::Int(a | b)),
            ExprKind::Binary {
                op: BinaryOp::BitXor,
                left,
                right,
            } => self.fold_binary(left, right, id, original, |_, a, b, _| Folded::Int(a ^ b)),
            ExprKind::Binary {
                op: BinaryOp::Div,
                left,
                right,
            } => self.fold_binary(left, right, id, original, numeric::eval_div),
            ExprKind::Binary {
                op: BinaryOp::Mod,
                left,
                right,
            } => self.fold_binary(left, right, id, original, numeric::eval_mod),

            ExprKind::Binary {
                op: BinaryOp::Eq,
                left,
                right,
            } => self.fold_compare(left, right, true, id, original),
            ExprKind::Binary {
                op: BinaryOp::NotEq,
                left,
                right,
            } => self.fold_compare(left, right, false, id, original),
            ExprKind::Binary {
                op: BinaryOp::Lt,
                left,
                right,
            } => self.fold_binary(left, right, id, original, |_, a, b, _| Folded::Bool(a < b)),
            ExprKind::Binary {
                op: BinaryOp::LtEq,
                left,
                right,
            } => self.fold_binary(left, right, id, original, |_, a, b, _| Folded::Bool(a <= b)),
            ExprKind::Binary {
                op: BinaryOp::Gt,
                left,
                right,
            } => self.fold_binary(left, right, id, original, |_, a, b, _| Folded::Bool(a > b)),
            ExprKind::Binary {
                op: BinaryOp::GtEq,
                left,
                right,
            } => self.fold_binary(left, right, id, original, |_, a, b, _| Folded::Bool(a >= b)),

            ExprKind::Binary {
                op: BinaryOp::Shl,
                left,
                right,
            } => self.fold_shift(left, right, true, id, original),
            ExprKind::Binary {
                op: BinaryOp::Shr,
                left,
                right,
            } => self.fold_shift(left, right, false, id, original),

            ExprKind::Binary {
                op: BinaryOp::Concat,
                left,
                right,
            } => self.fold_concat(left, right, id, original),

            ExprKind::Binary {
                op: BinaryOp::And,
                left,
                right,
            } => self.fold_short_circuit(left, right, true, id, original),
            ExprKind::Binary {
                op: BinaryOp::Or,
                left,
                right,
            } => self.fold_short_circuit(left, right, false, id, original),

            ExprKind::Slice { base, msb, lsb } => self.fold_slice(base, msb, lsb, id, original),
            ExprKind::Member { base, field } => self.fold_member(base, field, id, original),
            ExprKind::Cast { ty, expr } => self.fold_cast(ty, expr, id, original),
            ExprKind::Select { selector, cases } => {
                self.fold_select(selector, cases, id, original)
            }

            ExprKind::Constant { .. }
            | ExprKind::Bool(_)
            | ExprKind::List(_)
            | ExprKind::Range { .. }
            | ExprKind::Mask { .. }
            | ExprKind::Default => Ok(id),
        }
    }

    /// Replace a reference with the constant its declaration folded to.
    ///
    /// A reference to a tuple-valued constant stays in place — the name
    /// keeps denoting the aggregate rather than inlining the whole literal
    /// at the use site — but the mapping is still memoized so member
    /// projection through the reference works.
    fn fold_ref(&mut self, id: ExprId, original: ExprId) -> Result<ExprId, Ice> {
        let Some(refs) = self.refs else {
            return Ok(id);
        };
        let Some(decl) = refs.get_declaration(id) else {
            return Ok(id);
        };
        let Some(&value) = self.decl_values.get(&decl) else {
            return Ok(id);
        };
        self.set_constant(id, original, value);
        if matches!(*self.arena.kind(value), ExprKind::List(_)) {
            Ok(id)
        } else {
            Ok(value)
        }
    }

    /// Fold a constant declaration whose initializer tree was already
    /// rewritten.
    fn fold_declaration(&mut self, id: DeclId, decls: &mut Declarations) {
        let decl = *decls.get(id);
        let Some(mut init) = self.resolve_constant(decl.init) else {
            if self.types_known() {
                let diag = reports::cannot_evaluate_initializer(self.arena.span(decl.init));
                self.emit(diag);
            }
            return;
        };
        if self.types_known() {
            // Type checking already reconciled the initializer with the
            // declared type; the value is taken verbatim.
            self.decl_values.insert(id, init);
            tracing::trace!(decl = ?id, value = ?init, "declaration value recorded");
        } else if let Some((value, init_ty, base)) = self.int_parts(init) {
            if matches!(self.types.get(decl.ty), Type::Bits { .. }) {
                if init_ty != decl.ty
                    && matches!(
                        self.types.get(init_ty),
                        Type::Unbounded | Type::Bits { .. }
                    )
                {
                    // The declaration implies a cast a later type-checking
                    // pass would insert; synthesize it now so the recorded
                    // value carries the declared width.
                    let cloned = self.arena.value(value).clone();
                    let span = self.arena.span(init);
                    init = self.arena.new_constant(cloned, decl.ty, base, span);
                }
                self.decl_values.insert(id, init);
            }
        }
        if init != decl.init {
            decls.set_init(id, init);
        }
    }
}
