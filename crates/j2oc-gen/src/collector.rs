//! Recursive import collection over the type graph.
//!
//! One pre-order, depth-first, left-to-right traversal per type reference:
//!
//! 1. Reference wrappers are unwrapped; the wrapper itself never
//!    contributes a descriptor.
//! 2. Each upper bound of the (unwrapped) type contributes one descriptor.
//! 3. Arrays recurse into their component when generic array declarations
//!    are enabled; nesting handles multi-dimensional arrays.
//! 4. Foreign types contribute their own descriptor, then everything they
//!    reference, then their type arguments.
//!
//! The traversal is a pure computation over the frozen [`TypeStore`] and
//! [`TranslationEnv`]: no I/O, no shared mutable state, safe to run from
//! any number of worker threads over the same snapshot. Recursion depth is
//! bounded by the nesting depth of the originating declaration, with a
//! defensive cap for malformed graphs.

use crate::env::TranslationEnv;
use crate::error::CollectError;
use crate::import::{Import, ImportSet};
use j2oc_common::limits;
use j2oc_types::{TypeData, TypeId, TypeStore};
use tracing::trace;

/// Collects every import needed to reference `ty` from a generated
/// declaration.
#[tracing::instrument(level = "trace", skip(store, env))]
pub fn collect_imports(
    store: &TypeStore,
    env: &TranslationEnv,
    ty: TypeId,
) -> Result<ImportSet, CollectError> {
    let mut imports = ImportSet::new();
    add_imports(store, env, ty, &mut imports)?;
    trace!(count = imports.len(), "collected imports");
    Ok(imports)
}

/// Batch form: unions the per-type results into one set, preserving
/// first-seen order across the whole collection in caller-supplied type
/// order.
pub fn collect_all_imports<I>(
    store: &TypeStore,
    env: &TranslationEnv,
    types: I,
) -> Result<ImportSet, CollectError>
where
    I: IntoIterator<Item = TypeId>,
{
    let mut imports = ImportSet::new();
    for ty in types {
        add_imports(store, env, ty, &mut imports)?;
    }
    Ok(imports)
}

/// Collects into an existing set, so a caller can accumulate imports for
/// one declaration across several referenced types.
pub fn add_imports(
    store: &TypeStore,
    env: &TranslationEnv,
    ty: TypeId,
    imports: &mut ImportSet,
) -> Result<(), CollectError> {
    visit(store, env, ty, imports, 0)
}

fn visit(
    store: &TypeStore,
    env: &TranslationEnv,
    ty: TypeId,
    imports: &mut ImportSet,
    depth: usize,
) -> Result<(), CollectError> {
    if depth > limits::MAX_TYPE_NESTING_DEPTH {
        return Err(CollectError::NestingTooDeep {
            limit: limits::MAX_TYPE_NESTING_DEPTH,
        });
    }
    match store.type_data(ty) {
        // Indirection is erased in the target representation; only the
        // pointee matters.
        TypeData::Reference(pointee) => visit(store, env, *pointee, imports, depth + 1),

        TypeData::Declared(_) | TypeData::TypeVariable { .. } | TypeData::Wildcard { .. } => {
            add_bound_imports(store, env, ty, imports)
        }

        TypeData::Array(component) => {
            let component = *component;
            add_bound_imports(store, env, ty, imports)?;
            if env.options.generic_arrays {
                // Recursion covers multi-dimensional arrays.
                visit(store, env, component, imports, depth + 1)?;
            }
            Ok(())
        }

        TypeData::Foreign(id) => {
            let foreign = store.foreign_data(*id);
            let import = Import::for_foreign(
                store.text(foreign.name),
                foreign.header.map(|header| store.text(header)),
                foreign.forward_declaration.map(|text| store.text(text)),
            )?;
            trace!(name = %import, "foreign import");
            imports.insert(import);
            for &referenced in &foreign.referenced {
                visit(store, env, referenced, imports, depth + 1)?;
            }
            for &argument in &foreign.type_args {
                visit(store, env, argument, imports, depth + 1)?;
            }
            Ok(())
        }

        TypeData::Primitive(_) => Ok(()),
    }
}

/// One descriptor per upper bound, in bound order.
fn add_bound_imports(
    store: &TypeStore,
    env: &TranslationEnv,
    ty: TypeId,
    imports: &mut ImportSet,
) -> Result<(), CollectError> {
    for decl in store.upper_bounds(ty) {
        let import = Import::for_declaration(decl, store, env)?;
        trace!(name = %import, "declared import");
        imports.insert(import);
    }
    Ok(())
}

#[cfg(test)]
#[path = "tests/collector_tests.rs"]
mod tests;
