//! Type graph model for the j2oc translator.
//!
//! This crate owns the resolved-type representation the code generator
//! traverses:
//!
//! - **Closed `TypeData` variant**: every kind of type reference (declared
//!   class/interface, type variable, wildcard, reference wrapper, array,
//!   foreign platform type, primitive) is one variant of a single enum, so
//!   traversals match it exhaustively and a new kind of type is a
//!   compile-time change at every site.
//! - **Interning**: structurally identical types share one [`TypeId`], so
//!   type equality is an integer comparison.
//! - **Queries**: upper bounds, array/reference/foreign classification and
//!   accessors, qualified source names.
//!
//! A [`TypeStore`] is built single-threaded by the resolver (or by tests)
//! and is an immutable snapshot afterwards: every query takes `&self`, and
//! a frozen store can be shared across worker threads processing
//! independent translation units.

pub mod decl;
pub use decl::{DeclFlags, DeclId, DeclKind, Declaration};

pub mod types;
pub use types::{ForeignId, ForeignTypeData, PrimitiveKind, TypeData, TypeId};

pub mod store;
pub use store::TypeStore;
