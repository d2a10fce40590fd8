//! Import descriptors and the ordered, deduplicated descriptor set.

use crate::env::TranslationEnv;
use crate::error::CollectError;
use indexmap::IndexSet;
use j2oc_common::limits;
use j2oc_types::{DeclId, TypeStore};
use rustc_hash::FxBuildHasher;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Description of one imported compilation unit.
///
/// Imports are equal if their target type names are equal; every other
/// field rides along for the emission stage. A descriptor is constructed
/// fresh per collection pass, never mutated, and discarded once the
/// translation unit is written.
#[derive(Clone, Debug)]
pub struct Import {
    type_name: String,
    import_header: Option<String>,
    forward_declaration: Option<String>,
    source_qualified_name: Option<String>,
    is_interface: bool,
    generic_parameter_names: Vec<String>,
}

impl Import {
    /// Builds the descriptor for a declared class or interface.
    ///
    /// Nested declarations import their top-level enclosing unit's header,
    /// never their own, so the header, forward-declaration override, and
    /// source qualified name are keyed by the top of the enclosing chain
    /// while the display name, kind, and generic parameters belong to the
    /// declaration itself.
    pub fn for_declaration(
        decl: DeclId,
        store: &TypeStore,
        env: &TranslationEnv,
    ) -> Result<Self, CollectError> {
        let top = top_level(store, decl)?;
        let qualified_name = store.qualified_name(top);

        let import_header = env.headers.header_for(store, top)?;
        let forward_declaration = env.forward_declaration(&qualified_name).map(str::to_string);
        let source_qualified_name = if store.decl(top).is_platform() {
            None
        } else {
            Some(qualified_name)
        };

        Ok(Self {
            type_name: env.names.full_name(store, decl),
            import_header,
            forward_declaration,
            source_qualified_name,
            is_interface: store.decl(decl).is_interface(),
            generic_parameter_names: env.names.generic_parameter_names(store, decl),
        })
    }

    /// Builds the descriptor for a foreign platform type.
    pub fn for_foreign(
        name: &str,
        header: Option<&str>,
        forward_declaration: Option<&str>,
    ) -> Result<Self, CollectError> {
        if name.is_empty() {
            return Err(CollectError::UnnamedForeignType {
                header: header.map(str::to_string),
            });
        }
        Ok(Self {
            type_name: name.to_string(),
            import_header: header.map(str::to_string),
            forward_declaration: forward_declaration.map(str::to_string),
            source_qualified_name: None,
            is_interface: false,
            generic_parameter_names: Vec::new(),
        })
    }

    /// Target name of the imported type. This is the descriptor's
    /// identity.
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Header to import for this type; `None` for types that need no
    /// import.
    pub fn import_header(&self) -> Option<&str> {
        self.import_header.as_deref()
    }

    /// Forward declaration for this type when it is not imported by file,
    /// without trailing punctuation; `None` when none is needed.
    pub fn forward_declaration(&self) -> Option<&str> {
        self.forward_declaration.as_deref()
    }

    /// Qualified source name of the type, or `None` for platform and
    /// foreign types.
    pub fn source_qualified_name(&self) -> Option<&str> {
        self.source_qualified_name.as_deref()
    }

    pub fn is_interface(&self) -> bool {
        self.is_interface
    }

    /// Target generic parameter names; empty unless the declaration opts
    /// into target generics.
    pub fn generic_parameter_names(&self) -> &[String] {
        &self.generic_parameter_names
    }
}

/// Walks to the top-level enclosing declaration, bounded so a malformed
/// declaration table fails with a diagnostic instead of looping.
fn top_level(store: &TypeStore, decl: DeclId) -> Result<DeclId, CollectError> {
    let mut current = decl;
    for _ in 0..=limits::MAX_ENCLOSING_DEPTH {
        match store.decl(current).enclosing {
            None => return Ok(current),
            Some(outer) => current = outer,
        }
    }
    Err(CollectError::NoTopLevelDeclaration {
        name: store.text(store.decl(decl).name).to_string(),
    })
}

// Identity, ordering, and hashing are all defined by the type name alone.
// Byte-wise comparison keeps generated include blocks identical across
// platforms and locales.

impl PartialEq for Import {
    fn eq(&self, other: &Self) -> bool {
        self.type_name == other.type_name
    }
}

impl Eq for Import {}

impl Hash for Import {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.type_name.hash(state);
    }
}

impl PartialOrd for Import {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Import {
    fn cmp(&self, other: &Self) -> Ordering {
        self.type_name.cmp(&other.type_name)
    }
}

impl fmt::Display for Import {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.type_name)
    }
}

/// Insertion-ordered set of descriptors keyed by target type name.
///
/// The first descriptor seen for a name wins; later descriptors with the
/// same name are dropped, so a pre-order traversal produces a stable
/// first-seen order. [`ImportSet::into_sorted`] yields the byte-wise name
/// ordering used for emitted include and forward-declaration blocks.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ImportSet {
    entries: IndexSet<Import, FxBuildHasher>,
}

impl ImportSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a descriptor unless one with the same name is already
    /// present. Returns whether the descriptor was inserted.
    pub fn insert(&mut self, import: Import) -> bool {
        self.entries.insert(import)
    }

    /// Descriptors in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = &Import> {
        self.entries.iter()
    }

    pub fn contains(&self, type_name: &str) -> bool {
        self.entries.contains(type_name)
    }

    pub fn get(&self, type_name: &str) -> Option<&Import> {
        self.entries.get(type_name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Consumes the set, returning descriptors sorted by type name.
    pub fn into_sorted(self) -> Vec<Import> {
        let mut sorted: Vec<Import> = self.entries.into_iter().collect();
        sorted.sort();
        sorted
    }
}

impl indexmap::Equivalent<Import> for str {
    fn equivalent(&self, key: &Import) -> bool {
        self == key.type_name
    }
}

impl IntoIterator for ImportSet {
    type Item = Import;
    type IntoIter = indexmap::set::IntoIter<Import>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a ImportSet {
    type Item = &'a Import;
    type IntoIter = indexmap::set::Iter<'a, Import>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
#[path = "tests/import_tests.rs"]
mod tests;
