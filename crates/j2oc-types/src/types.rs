//! The closed type variant the code generator traverses.

use crate::decl::DeclId;
use j2oc_common::interner::Atom;
use smallvec::SmallVec;

/// Identifier of an interned type in a `TypeStore`.
///
/// Structurally identical types share one id, so type equality is an
/// integer comparison.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct TypeId(pub u32);

/// Identifier of a foreign type record in a `TypeStore`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ForeignId(pub u32);

/// Source-language primitive kinds.
///
/// Primitives map to scalar target types and never require an import.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    Boolean,
    Byte,
    Char,
    Short,
    Int,
    Long,
    Float,
    Double,
    Void,
}

/// One type reference in the graph.
///
/// The variant set is closed: traversals match it exhaustively, so adding
/// a new kind of type is a compile-time-enforced change at every traversal
/// site rather than a missed runtime branch.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum TypeData {
    /// Resolved class or interface reference.
    Declared(DeclId),

    /// Generic type parameter with its declared upper bounds, in source
    /// order.
    TypeVariable {
        name: Atom,
        bounds: SmallVec<[TypeId; 2]>,
    },

    /// Wildcard with its upper bounds (`? extends A & B`).
    Wildcard { bounds: SmallVec<[TypeId; 2]> },

    /// Reference indirection around another type. Erased in the target
    /// representation; only the pointee matters for imports.
    Reference(TypeId),

    /// Array of a component type. Multi-dimensional arrays nest.
    Array(TypeId),

    /// Opaque target-platform type; payload lives in the foreign table.
    Foreign(ForeignId),

    /// Source-language primitive.
    Primitive(PrimitiveKind),
}

/// Payload of a foreign type.
///
/// Foreign types are not defined by source declarations, so they carry
/// their target name and header directly. Each record is its own identity;
/// two textually identical foreign uses stay separate records, and
/// descriptor deduplication happens downstream by display name.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ForeignTypeData {
    /// Target display name, e.g. `NSArray<NSString *>`.
    pub name: Atom,

    /// Header defining the type; `None` when no import is needed.
    pub header: Option<Atom>,

    /// Forward-declaration text without trailing punctuation, e.g.
    /// `@class NSArray`; `None` when none is needed.
    pub forward_declaration: Option<Atom>,

    /// Types this type's definition references, in order.
    pub referenced: Vec<TypeId>,

    /// Type arguments of a parameterized foreign declaration, in order.
    pub type_args: Vec<TypeId>,
}
