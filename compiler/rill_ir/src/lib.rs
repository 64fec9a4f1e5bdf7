//! Expression and type IR for the rill compiler front end.
//!
//! This crate is the construction facility every front-end pass builds on:
//! expression nodes live in an [`ExprArena`] and are addressed by stable
//! [`ExprId`] handles assigned at allocation time. Nodes are immutable once
//! pushed; a rewriting pass allocates fresh nodes and leaves the originals in
//! place, so a node's identity can outlive its replacement.
//!
//! # Design Notes
//!
//! - No `Box<Expr>`; children are `ExprId(u32)` indices into parallel arrays.
//! - Arbitrary-precision constant values are pooled in the arena and
//!   referenced by [`ValueId`], keeping [`ExprKind`] `Copy`.
//! - Types are interned in a [`TypePool`] so fixed-width integer types with
//!   equal shape compare equal by [`TypeId`].

mod arena;
mod decl;
mod expr;
mod ids;
mod interner;
mod maps;
mod name;
mod ops;
mod span;
mod types;

pub use arena::ExprArena;
pub use decl::{ConstDecl, DeclId, Declarations};
pub use expr::{ExprKind, SelectCase, STACK_SIZE_FIELD};
pub use ids::{CaseRange, ExprId, ExprRange, ValueId};
pub use interner::StringInterner;
pub use maps::{RefMap, TypeMap};
pub use name::Name;
pub use ops::{BinaryOp, UnaryOp};
pub use span::Span;
pub use types::{FieldRange, StructField, Type, TypeId, TypePool};
