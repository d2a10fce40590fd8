//! Declaration identifiers and records.
//!
//! A [`Declaration`] is a resolved class or interface from the source
//! language, stored in a [`crate::TypeStore`] and addressed by [`DeclId`].
//! Nested declarations link to their enclosing declaration; the chain ends
//! at the top-level compilation unit whose header the generated code
//! imports.

use bitflags::bitflags;
use j2oc_common::interner::Atom;

/// Identifier of a declaration in a `TypeStore`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct DeclId(pub u32);

/// Kind of declaration.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DeclKind {
    Class,
    Interface,
}

bitflags! {
    /// Modifier bits on a declaration.
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
    pub struct DeclFlags: u8 {
        /// A target-platform type surfaced as a declaration. Platform
        /// declarations carry no source qualified name and need no import
        /// unless the header map overrides one in.
        const PLATFORM = 1 << 0;

        /// The declaration opts into target-language generics, so its
        /// import descriptor surfaces the generic parameter names.
        const GENERATE_GENERICS = 1 << 1;
    }
}

/// A resolved class or interface declaration.
#[derive(Clone, Debug)]
pub struct Declaration {
    /// Simple name, e.g. `Employee`.
    pub name: Atom,

    /// Dotted source package, e.g. `com.acme`. Empty for platform types
    /// and the default package.
    pub package: Atom,

    /// Enclosing declaration for nested types; `None` at the top level.
    pub enclosing: Option<DeclId>,

    pub kind: DeclKind,

    pub flags: DeclFlags,

    /// Generic parameter names in declaration order; empty when
    /// non-generic.
    pub type_params: Vec<Atom>,
}

impl Declaration {
    /// Creates a top-level class declaration with no flags.
    pub fn class(package: Atom, name: Atom) -> Self {
        Self {
            name,
            package,
            enclosing: None,
            kind: DeclKind::Class,
            flags: DeclFlags::empty(),
            type_params: Vec::new(),
        }
    }

    /// Creates a top-level interface declaration with no flags.
    pub fn interface(package: Atom, name: Atom) -> Self {
        Self {
            kind: DeclKind::Interface,
            ..Self::class(package, name)
        }
    }

    pub fn with_enclosing(mut self, enclosing: DeclId) -> Self {
        self.enclosing = Some(enclosing);
        self
    }

    pub fn with_flags(mut self, flags: DeclFlags) -> Self {
        self.flags = flags;
        self
    }

    pub fn with_type_params(mut self, params: Vec<Atom>) -> Self {
        self.type_params = params;
        self
    }

    pub fn is_interface(&self) -> bool {
        self.kind == DeclKind::Interface
    }

    pub fn is_platform(&self) -> bool {
        self.flags.contains(DeclFlags::PLATFORM)
    }

    pub fn generates_generics(&self) -> bool {
        self.flags.contains(DeclFlags::GENERATE_GENERICS)
    }

    pub fn is_top_level(&self) -> bool {
        self.enclosing.is_none()
    }
}
