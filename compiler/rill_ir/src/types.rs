//! Type representation and interning pool.
//!
//! Fixed-width integer types are interned by shape, so two `bit<8>` mentions
//! resolve to the same [`TypeId`] and width/signedness agreement is a plain
//! ID comparison. Struct field lists live in a flattened side array.

use rustc_hash::FxHashMap;

use crate::arena::{to_u16, to_u32};
use crate::{Name, StringInterner};

/// Index into a [`TypePool`].
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[repr(transparent)]
pub struct TypeId(u32);

impl TypeId {
    /// The boolean type.
    pub const BOOL: TypeId = TypeId(0);
    /// The unbounded-width integer type (untyped numeric literals).
    pub const UNBOUNDED: TypeId = TypeId(1);
    /// The error type, produced by failed inference.
    pub const ERROR: TypeId = TypeId(2);

    /// Create from a raw index.
    #[inline]
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    /// Get the raw index into the pool.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Debug for TypeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "TypeId({})", self.0)
    }
}

/// A named, typed struct field.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct StructField {
    pub name: Name,
    pub ty: TypeId,
}

/// A contiguous range of struct fields in a [`TypePool`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
#[repr(C)]
pub struct FieldRange {
    pub start: u32,
    pub len: u16,
}

impl FieldRange {
    /// Empty range constant.
    pub const EMPTY: Self = Self { start: 0, len: 0 };

    /// Create a new range.
    #[inline]
    pub const fn new(start: u32, len: u16) -> Self {
        Self { start, len }
    }

    /// Returns `true` if the range contains no fields.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of fields in the range.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len as usize
    }
}

/// Type variants.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Type {
    /// The boolean type.
    Bool,
    /// Fixed-width integer: `bit<W>` (unsigned) or `int<W>` (signed).
    Bits { width: u32, signed: bool },
    /// Arbitrary-precision integer whose width is not yet fixed.
    Unbounded,
    /// Struct-like aggregate with ordered named fields.
    Struct { name: Name, fields: FieldRange },
    /// Fixed-size stack (array) of elements.
    Stack { element: TypeId, size: u32 },
    /// Symbolic enumeration.
    Enum { name: Name },
    /// Error type for failed inference.
    Error,
}

/// Interning pool for types.
#[derive(Debug)]
pub struct TypePool {
    types: Vec<Type>,
    fields: Vec<StructField>,
    bits_index: FxHashMap<(u32, bool), TypeId>,
}

impl TypePool {
    /// Create a pool with [`TypeId::BOOL`], [`TypeId::UNBOUNDED`], and
    /// [`TypeId::ERROR`] pre-seeded.
    pub fn new() -> Self {
        TypePool {
            types: vec![Type::Bool, Type::Unbounded, Type::Error],
            fields: Vec::new(),
            bits_index: FxHashMap::default(),
        }
    }

    /// Get the type for an ID.
    #[inline]
    pub fn get(&self, id: TypeId) -> Type {
        self.types[id.index()]
    }

    /// Intern a fixed-width integer type.
    pub fn bits(&mut self, width: u32, signed: bool) -> TypeId {
        if let Some(&id) = self.bits_index.get(&(width, signed)) {
            return id;
        }
        let id = self.push(Type::Bits { width, signed });
        self.bits_index.insert((width, signed), id);
        id
    }

    /// Allocate a struct-like type with ordered fields.
    pub fn structure(&mut self, name: Name, fields: &[StructField]) -> TypeId {
        let range = if fields.is_empty() {
            FieldRange::EMPTY
        } else {
            let start = to_u32(self.fields.len(), "struct fields");
            self.fields.extend_from_slice(fields);
            FieldRange::new(start, to_u16(fields.len(), "struct field list"))
        };
        self.push(Type::Struct {
            name,
            fields: range,
        })
    }

    /// Allocate a stack (array) type.
    pub fn stack(&mut self, element: TypeId, size: u32) -> TypeId {
        self.push(Type::Stack { element, size })
    }

    /// Allocate an enumeration type.
    pub fn enumeration(&mut self, name: Name) -> TypeId {
        self.push(Type::Enum { name })
    }

    /// Get struct fields from a range.
    pub fn fields(&self, range: FieldRange) -> &[StructField] {
        if range.is_empty() {
            return &[];
        }
        let start = range.start as usize;
        &self.fields[start..start + range.len()]
    }

    /// Width and signedness if `id` is a fixed-width integer type.
    pub fn as_bits(&self, id: TypeId) -> Option<(u32, bool)> {
        match self.get(id) {
            Type::Bits { width, signed } => Some((width, signed)),
            _ => None,
        }
    }

    /// Render a type for diagnostics: `bool`, `bit<8>`, `int<8>`, `int`,
    /// or the declared name of an aggregate.
    pub fn display(&self, id: TypeId, interner: &StringInterner) -> String {
        match self.get(id) {
            Type::Bool => "bool".to_owned(),
            Type::Bits {
                width,
                signed: false,
            } => format!("bit<{width}>"),
            Type::Bits {
                width,
                signed: true,
            } => format!("int<{width}>"),
            Type::Unbounded => "int".to_owned(),
            Type::Struct { name, .. } | Type::Enum { name } => interner.resolve(name).to_owned(),
            Type::Stack { element, size } => {
                format!("{}[{size}]", self.display(element, interner))
            }
            Type::Error => "<error>".to_owned(),
        }
    }

    fn push(&mut self, ty: Type) -> TypeId {
        let id = TypeId::new(to_u32(self.types.len(), "types"));
        self.types.push(ty);
        id
    }
}

impl Default for TypePool {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests;
