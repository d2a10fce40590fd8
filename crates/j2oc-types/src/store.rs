//! Type graph storage and queries.
//!
//! [`TypeStore`] owns every declaration, foreign record, and interned type
//! of one resolved compilation. It is built single-threaded — all
//! constructors take `&mut self` — and then treated as an immutable
//! snapshot: queries take `&self`, the store is `Sync`, and collection
//! passes for independent translation units may share it freely.
//!
//! Interning makes the graph acyclic by construction: a composite type can
//! only be created from `TypeId`s that already exist, so no finite chain of
//! pointee/component/argument links leads back to the type it started from.
//! Queries still bound their walks with the centralized limits so that a
//! store corrupted by hand-built ids fails loudly downstream instead of
//! recursing forever.

use crate::decl::{DeclFlags, DeclId, Declaration};
use crate::types::{ForeignId, ForeignTypeData, PrimitiveKind, TypeData, TypeId};
use j2oc_common::interner::{Atom, Interner};
use j2oc_common::limits;
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

/// Upper bounds are short in practice; two covers nearly every
/// declaration.
pub type Bounds = SmallVec<[DeclId; 2]>;

#[derive(Debug, Default)]
pub struct TypeStore {
    interner: Interner,
    decls: Vec<Declaration>,
    foreigns: Vec<ForeignTypeData>,
    types: Vec<TypeData>,
    type_index: FxHashMap<TypeData, TypeId>,
}

impl TypeStore {
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Construction
    // =========================================================================

    /// Interns a name.
    pub fn atom(&mut self, text: &str) -> Atom {
        self.interner.intern(text)
    }

    /// Resolves an interned name.
    pub fn text(&self, atom: Atom) -> &str {
        self.interner.resolve(atom)
    }

    /// Registers a declaration and returns its id.
    pub fn declare(&mut self, decl: Declaration) -> DeclId {
        let id = DeclId(self.decls.len() as u32);
        self.decls.push(decl);
        id
    }

    /// Registers a top-level class with no flags.
    pub fn add_class(&mut self, package: &str, name: &str) -> DeclId {
        let package = self.atom(package);
        let name = self.atom(name);
        self.declare(Declaration::class(package, name))
    }

    /// Registers a top-level interface with no flags.
    pub fn add_interface(&mut self, package: &str, name: &str) -> DeclId {
        let package = self.atom(package);
        let name = self.atom(name);
        self.declare(Declaration::interface(package, name))
    }

    /// Registers a platform class: no package, no source qualified name.
    pub fn add_platform_class(&mut self, name: &str) -> DeclId {
        let package = self.atom("");
        let name = self.atom(name);
        self.declare(Declaration::class(package, name).with_flags(DeclFlags::PLATFORM))
    }

    /// Interns a type, returning the existing id for structurally
    /// identical data.
    pub fn intern(&mut self, data: TypeData) -> TypeId {
        if let Some(&id) = self.type_index.get(&data) {
            return id;
        }
        let id = TypeId(self.types.len() as u32);
        self.types.push(data.clone());
        self.type_index.insert(data, id);
        id
    }

    pub fn declared(&mut self, decl: DeclId) -> TypeId {
        self.intern(TypeData::Declared(decl))
    }

    pub fn reference(&mut self, pointee: TypeId) -> TypeId {
        self.intern(TypeData::Reference(pointee))
    }

    pub fn array(&mut self, component: TypeId) -> TypeId {
        self.intern(TypeData::Array(component))
    }

    pub fn primitive(&mut self, kind: PrimitiveKind) -> TypeId {
        self.intern(TypeData::Primitive(kind))
    }

    pub fn type_variable(&mut self, name: &str, bounds: impl IntoIterator<Item = TypeId>) -> TypeId {
        let name = self.atom(name);
        let bounds = bounds.into_iter().collect();
        self.intern(TypeData::TypeVariable { name, bounds })
    }

    pub fn wildcard(&mut self, bounds: impl IntoIterator<Item = TypeId>) -> TypeId {
        let bounds = bounds.into_iter().collect();
        self.intern(TypeData::Wildcard { bounds })
    }

    /// Registers a foreign type record and returns a type referencing it.
    pub fn foreign_type(&mut self, data: ForeignTypeData) -> TypeId {
        let id = ForeignId(self.foreigns.len() as u32);
        self.foreigns.push(data);
        self.intern(TypeData::Foreign(id))
    }

    /// Convenience form of [`TypeStore::foreign_type`] taking plain text.
    pub fn add_foreign(
        &mut self,
        name: &str,
        header: Option<&str>,
        forward_declaration: Option<&str>,
        referenced: Vec<TypeId>,
        type_args: Vec<TypeId>,
    ) -> TypeId {
        let data = ForeignTypeData {
            name: self.atom(name),
            header: header.map(|h| self.atom(h)),
            forward_declaration: forward_declaration.map(|f| self.atom(f)),
            referenced,
            type_args,
        };
        self.foreign_type(data)
    }

    // =========================================================================
    // Queries
    // =========================================================================

    pub fn type_data(&self, id: TypeId) -> &TypeData {
        &self.types[id.0 as usize]
    }

    pub fn decl(&self, id: DeclId) -> &Declaration {
        &self.decls[id.0 as usize]
    }

    pub fn foreign_data(&self, id: ForeignId) -> &ForeignTypeData {
        &self.foreigns[id.0 as usize]
    }

    pub fn is_array(&self, id: TypeId) -> bool {
        matches!(self.type_data(id), TypeData::Array(_))
    }

    pub fn component_type(&self, id: TypeId) -> Option<TypeId> {
        match self.type_data(id) {
            TypeData::Array(component) => Some(*component),
            _ => None,
        }
    }

    pub fn is_reference_wrapper(&self, id: TypeId) -> bool {
        matches!(self.type_data(id), TypeData::Reference(_))
    }

    pub fn pointee_type(&self, id: TypeId) -> Option<TypeId> {
        match self.type_data(id) {
            TypeData::Reference(pointee) => Some(*pointee),
            _ => None,
        }
    }

    /// Dotted source-language qualified name, e.g. `com.acme.Outer.Inner`.
    ///
    /// The walk is bounded by [`limits::MAX_ENCLOSING_DEPTH`]; validation
    /// of the enclosing chain is the import factory's job, so a malformed
    /// chain yields a truncated name here and a diagnostic there.
    pub fn qualified_name(&self, id: DeclId) -> String {
        let mut names: SmallVec<[Atom; 4]> = SmallVec::new();
        let mut current = id;
        for _ in 0..=limits::MAX_ENCLOSING_DEPTH {
            let decl = self.decl(current);
            names.push(decl.name);
            match decl.enclosing {
                Some(outer) => current = outer,
                None => break,
            }
        }
        let mut out = String::new();
        let package = self.text(self.decl(current).package);
        if !package.is_empty() {
            out.push_str(package);
        }
        for atom in names.iter().rev() {
            if !out.is_empty() {
                out.push('.');
            }
            out.push_str(self.text(*atom));
        }
        out
    }

    /// The declarations a type reference is statically assignable to.
    ///
    /// A declared class or interface is its own bound. A type variable or
    /// wildcard contributes its declared bound set, flattened through
    /// nested type variables. An array contributes its component's bounds:
    /// the element bound drives the element type's import whether or not
    /// the collector also recurses into the component. Reference wrappers,
    /// foreign types, and primitives have no bounds.
    ///
    /// The result preserves first-seen order and contains no duplicates.
    pub fn upper_bounds(&self, id: TypeId) -> Bounds {
        let mut out = Bounds::new();
        self.push_upper_bounds(id, &mut out, 0);
        out
    }

    fn push_upper_bounds(&self, id: TypeId, out: &mut Bounds, depth: usize) {
        if depth > limits::MAX_TYPE_NESTING_DEPTH {
            return;
        }
        match self.type_data(id) {
            TypeData::Declared(decl) => {
                if !out.contains(decl) {
                    out.push(*decl);
                }
            }
            TypeData::TypeVariable { bounds, .. } | TypeData::Wildcard { bounds } => {
                for &bound in bounds {
                    self.push_upper_bounds(bound, out, depth + 1);
                }
            }
            TypeData::Array(component) => {
                self.push_upper_bounds(*component, out, depth + 1);
            }
            TypeData::Reference(_) | TypeData::Foreign(_) | TypeData::Primitive(_) => {}
        }
    }
}

#[cfg(test)]
#[path = "tests/store_tests.rs"]
mod tests;
