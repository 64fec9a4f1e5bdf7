//! Constant folding for the rill front end.
//!
//! This crate rewrites a typed expression tree by evaluating every
//! subexpression that is a compile-time constant, replacing it with its
//! computed value, and simplifying control constructs (short-circuit
//! booleans, select dispatch) whose outcome is statically determined.
//!
//! # Pipeline Position
//!
//! ```text
//! Source → Lex → Parse → Resolve → [Constant Fold] → Type Check → [Constant Fold] → ...
//! ```
//!
//! The pass runs in two modes. Before type inference it folds
//! conservatively: anything whose result type depends on inferred types is
//! left alone. After type inference — signalled by attaching a `TypeMap` —
//! it folds strictly and reports every operand that should have been
//! constant but was not.
//!
//! # What Happens During Folding
//!
//! 1. **Numeric folding**: arithmetic, bitwise, comparison, and shift
//!    operators over arbitrary-precision constants, with fixed-width/
//!    unbounded type reconciliation
//! 2. **Boolean and aggregate folding**: short-circuit combinators, tuple
//!    constants, member projection, casts
//! 3. **Bit-level folding**: slice extraction and concatenation
//! 4. **Select reduction**: statically-decidable cases are removed and a
//!    decided dispatch collapses to its result state
//!
//! Folding never mutates a node: handlers allocate fresh nodes and record
//! old-to-new provenance in a pass-local memo table keyed by node identity.
//! Recoverable problems become [`rill_diagnostic`] reports; broken tree or
//! type-system invariants abort the pass with an [`Ice`].

mod arith;
mod config;
mod errors;
mod folder;
mod reconcile;

pub use config::FoldConfig;
pub use errors::Ice;
pub use folder::ConstantFolder;
