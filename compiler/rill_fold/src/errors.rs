//! Fatal internal errors.
//!
//! Unlike diagnostics, these are not recoverable: each one means an
//! assumption about the tree shape or the type system was broken, and the
//! pass propagates it outward immediately instead of continuing on a
//! corrupted premise.

use rill_ir::Span;
use thiserror::Error;

/// Internal-invariant violation. Aborts the whole pass.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Ice {
    #[error("type of slice at {span:?} is not a fixed-width integer")]
    SliceTypeNotBits { span: Span },

    #[error("no recorded type for expression at {span:?}")]
    MissingType { span: Span },

    #[error("member access at {span:?} on a value that is not a struct")]
    MemberOfNonStruct { span: Span },

    #[error("struct-typed constant at {span:?} is not a tuple literal")]
    StructConstantNotList { span: Span },

    #[error("field `{field}` not found in the struct type at {span:?}")]
    FieldNotFound { span: Span, field: String },

    #[error("selector and keyset tuples at {span:?} have different sizes")]
    KeysetSizeMismatch { span: Span },

    #[error("selector list at {span:?} is not a single component")]
    SelectorListNotSingleton { span: Span },

    #[error("selector at {span:?} is not a constant")]
    SelectorNotConstant { span: Span },

    #[error("keyset for a boolean selector at {span:?} is not boolean")]
    KeysetNotBoolean { span: Span },

    #[error("range or mask bound at {span:?} is not an integer constant")]
    KeysetBoundNotInteger { span: Span },

    #[error("cast operand at {span:?} is neither an integer nor a boolean constant")]
    CastSourceNotBoolean { span: Span },
}
