//! Import and forward-declaration resolution for generated declarations.
//!
//! Given a type reference from the resolved type graph, this crate computes
//! every target compilation unit the generated Objective-C code must import
//! or forward-declare, deduplicated and ordered deterministically:
//!
//! - [`Import`] — immutable descriptor of one compilation-unit dependency;
//!   equal and ordered by target type name alone
//! - [`ImportSet`] — ordered, name-deduplicated accumulator with a
//!   first-seen-wins contract
//! - [`collect_imports`] / [`collect_all_imports`] — the recursive
//!   traversal over the type graph
//! - [`TranslationEnv`] — header mapping, target naming, and options the
//!   traversal consults
//!
//! The import-vs-forward-declaration choice is *not* made here. Each
//! descriptor carries both pieces of information, and the emission stage
//! picks one per usage site — a supertype needs the full import, a field
//! referenced only by indirection can settle for the forward declaration —
//! so one collected set serves both the header and the implementation pass.

pub mod collector;
pub use collector::{add_imports, collect_all_imports, collect_imports};

pub mod env;
pub use env::{HeaderMap, HeaderStyle, NameTable, Options, TranslationEnv};

pub mod error;
pub use error::CollectError;

pub mod import;
pub use import::{Import, ImportSet};
