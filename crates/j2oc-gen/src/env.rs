//! Translation environment: per-declaration metadata the collector
//! consults.
//!
//! The environment is an explicit parameter object, never process-global
//! state. A pass builds one [`TranslationEnv`], hands it to the collector
//! by reference, and can run any number of such passes concurrently over
//! one frozen [`TypeStore`].

use crate::error::CollectError;
use j2oc_types::{DeclId, TypeStore};
use rustc_hash::FxHashMap;
use serde::Deserialize;
use std::path::Path;

/// Code-generation switches relevant to import resolution.
#[derive(Copy, Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Emit arrays of declared element types as parameterized target
    /// collections. When set, the collector recurses into array component
    /// types so the parameterization's dependencies are imported too.
    pub generic_arrays: bool,
}

/// How import headers are derived for declarations without an explicit
/// override.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum HeaderStyle {
    /// Package-relative path: `com.acme.Employee` -> `com/acme/Employee.h`.
    #[default]
    Source,
    /// Bare file name: `com.acme.Employee` -> `Employee.h`.
    Flat,
    /// Explicit override table only; a missing entry aborts the
    /// translation unit.
    Mapped,
}

/// Maps top-level declarations to the headers that define them.
#[derive(Clone, Debug, Default)]
pub struct HeaderMap {
    style: HeaderStyle,
    overrides: FxHashMap<String, String>,
}

impl HeaderMap {
    pub fn new(style: HeaderStyle) -> Self {
        Self {
            style,
            overrides: FxHashMap::default(),
        }
    }

    /// Adds or replaces an explicit mapping, keyed by qualified source
    /// name. Overrides beat the style in every mode.
    pub fn insert(&mut self, qualified_name: &str, header: &str) {
        self.overrides
            .insert(qualified_name.to_string(), header.to_string());
    }

    /// Merges a JSON object of qualified name -> header into the override
    /// table.
    pub fn load_overrides(&mut self, json: &str) -> Result<(), CollectError> {
        let parsed: FxHashMap<String, String> = serde_json::from_str(json)?;
        self.overrides.extend(parsed);
        Ok(())
    }

    /// Reads a JSON mapping file and merges it into the override table.
    pub fn load_overrides_file(&mut self, path: &Path) -> Result<(), CollectError> {
        let text = std::fs::read_to_string(path)?;
        self.load_overrides(&text)
    }

    /// The header to import for a top-level declaration.
    ///
    /// `Ok(None)` means the type needs no import at all, which is the
    /// default for platform declarations. A declared source type always
    /// resolves to a header or fails.
    pub fn header_for(
        &self,
        store: &TypeStore,
        decl: DeclId,
    ) -> Result<Option<String>, CollectError> {
        let qualified_name = store.qualified_name(decl);
        if let Some(header) = self.overrides.get(&qualified_name) {
            return Ok(Some(header.clone()));
        }
        let declaration = store.decl(decl);
        if declaration.is_platform() {
            return Ok(None);
        }
        match self.style {
            HeaderStyle::Source => Ok(Some(format!("{}.h", qualified_name.replace('.', "/")))),
            HeaderStyle::Flat => Ok(Some(format!("{}.h", store.text(declaration.name)))),
            HeaderStyle::Mapped => Err(CollectError::MissingHeader { qualified_name }),
        }
    }
}

/// Computes target display names for declarations.
///
/// The target name is a package prefix followed by the enclosing-chain
/// simple names joined with `_`: `com.acme.Outer.Inner` becomes
/// `ComAcmeOuter_Inner` unless `com.acme` maps to an explicit prefix.
#[derive(Clone, Debug, Default)]
pub struct NameTable {
    package_prefixes: FxHashMap<String, String>,
}

impl NameTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Maps a source package to an explicit target prefix. An empty prefix
    /// drops the package from generated names.
    pub fn set_prefix(&mut self, package: &str, prefix: &str) {
        self.package_prefixes
            .insert(package.to_string(), prefix.to_string());
    }

    /// Target display name of a declaration.
    ///
    /// The enclosing chain must be well-formed; callers validate it before
    /// asking for names.
    pub fn full_name(&self, store: &TypeStore, decl: DeclId) -> String {
        let mut chain = vec![decl];
        let mut current = decl;
        while let Some(outer) = store.decl(current).enclosing {
            chain.push(outer);
            current = outer;
        }
        let package = store.text(store.decl(current).package);
        let mut out = match self.package_prefixes.get(package) {
            Some(prefix) => prefix.clone(),
            None => camel_case_package(package),
        };
        for (position, id) in chain.iter().rev().enumerate() {
            if position > 0 {
                out.push('_');
            }
            out.push_str(store.text(store.decl(*id).name));
        }
        out
    }

    /// Target-language generic parameter names for a declaration; empty
    /// unless the declaration opts into target generics.
    pub fn generic_parameter_names(&self, store: &TypeStore, decl: DeclId) -> Vec<String> {
        let declaration = store.decl(decl);
        if !declaration.generates_generics() {
            return Vec::new();
        }
        declaration
            .type_params
            .iter()
            .map(|&param| store.text(param).to_string())
            .collect()
    }
}

/// Default package prefix: camel-cased package segments,
/// `com.acme` -> `ComAcme`.
fn camel_case_package(package: &str) -> String {
    let mut out = String::new();
    for segment in package.split('.').filter(|segment| !segment.is_empty()) {
        let mut chars = segment.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
        }
    }
    out
}

/// Everything the collector needs besides the type graph itself.
#[derive(Clone, Debug, Default)]
pub struct TranslationEnv {
    pub options: Options,
    pub headers: HeaderMap,
    pub names: NameTable,
    forward_overrides: FxHashMap<String, String>,
}

impl TranslationEnv {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a forward-declaration override for a top-level
    /// declaration, keyed by qualified source name. The text carries no
    /// trailing punctuation.
    pub fn set_forward_declaration(&mut self, qualified_name: &str, text: &str) {
        self.forward_overrides
            .insert(qualified_name.to_string(), text.to_string());
    }

    pub fn forward_declaration(&self, qualified_name: &str) -> Option<&str> {
        self.forward_overrides
            .get(qualified_name)
            .map(String::as_str)
    }
}

#[cfg(test)]
#[path = "tests/env_tests.rs"]
mod tests;
