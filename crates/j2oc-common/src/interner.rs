//! String interning for declaration and type names.
//!
//! The same names recur throughout a type graph: every bound, every
//! enclosing chain, every foreign reference. Interning stores each distinct
//! string once and hands out a copyable [`Atom`] handle, so name comparison
//! is an integer comparison and declaration records stay small.
//!
//! The interner is populated while the type graph is built and is read-only
//! afterwards. Interning therefore takes `&mut self` and resolution takes
//! `&self`; a frozen interner is `Sync` and can back collection passes
//! running on multiple worker threads.

use rustc_hash::FxHashMap;

/// Interned string handle.
///
/// Equality and hashing compare the handle only. Two equal `Atom`s obtained
/// from the same [`Interner`] always resolve to the same text; atoms from
/// different interners must not be mixed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Atom(u32);

/// Append-only string table with O(1) lookup in both directions.
#[derive(Debug, Default)]
pub struct Interner {
    strings: Vec<Box<str>>,
    index: FxHashMap<Box<str>, Atom>,
}

impl Interner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Interns `text`, returning the existing handle if it was seen before.
    pub fn intern(&mut self, text: &str) -> Atom {
        if let Some(&atom) = self.index.get(text) {
            return atom;
        }
        let atom = Atom(self.strings.len() as u32);
        let owned: Box<str> = text.into();
        self.strings.push(owned.clone());
        self.index.insert(owned, atom);
        atom
    }

    /// Resolves a handle back to its text.
    ///
    /// # Panics
    /// Panics if `atom` did not come from this interner.
    pub fn resolve(&self, atom: Atom) -> &str {
        &self.strings[atom.0 as usize]
    }

    /// Number of distinct strings interned so far.
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }
}
