//! Side tables produced by companion passes.
//!
//! The folding pass consumes these as services: a [`TypeMap`] filled in by
//! type inference, and a [`RefMap`] filled in by name resolution. Both key
//! on node identity, so entries survive as long as the original node does.

use rustc_hash::{FxHashMap, FxHashSet};

use crate::{DeclId, ExprId, TypeId};

/// Resolved types for expression nodes, plus compile-time-constant marks.
#[derive(Debug, Default)]
pub struct TypeMap {
    types: FxHashMap<ExprId, TypeId>,
    constants: FxHashSet<ExprId>,
}

impl TypeMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up the recorded type for a node.
    pub fn get(&self, id: ExprId) -> Option<TypeId> {
        self.types.get(&id).copied()
    }

    /// Record the type of a node.
    pub fn set(&mut self, id: ExprId, ty: TypeId) {
        self.types.insert(id, ty);
    }

    /// Mark a node as a compile-time constant.
    pub fn set_compile_time_constant(&mut self, id: ExprId) {
        self.constants.insert(id);
    }

    /// Returns `true` if the node is marked compile-time constant.
    pub fn is_compile_time_constant(&self, id: ExprId) -> bool {
        self.constants.contains(&id)
    }
}

/// Resolved declarations for name-reference nodes.
#[derive(Debug, Default)]
pub struct RefMap {
    decls: FxHashMap<ExprId, DeclId>,
}

impl RefMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that a reference node resolves to a declaration.
    pub fn bind(&mut self, reference: ExprId, decl: DeclId) {
        self.decls.insert(reference, decl);
    }

    /// Look up the declaration a reference resolves to.
    pub fn get_declaration(&self, reference: ExprId) -> Option<DeclId> {
        self.decls.get(&reference).copied()
    }
}
