use super::*;
use crate::env::{HeaderMap, HeaderStyle};
use j2oc_types::{DeclFlags, Declaration};

fn flat_env() -> TranslationEnv {
    let mut env = TranslationEnv::new();
    env.headers = HeaderMap::new(HeaderStyle::Flat);
    env.names.set_prefix("com.acme", "");
    env
}

#[test]
fn test_equality_is_by_type_name_only() {
    let a = Import::for_foreign("NSString", Some("Foundation/NSString.h"), None).unwrap();
    let b = Import::for_foreign("NSString", None, Some("@class NSString")).unwrap();
    let c = Import::for_foreign("NSArray", Some("Foundation/NSArray.h"), None).unwrap();

    // Same name, different other fields: the same entity
    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn test_ordering_is_byte_wise_by_type_name() {
    let alpha = Import::for_foreign("Alpha", None, None).unwrap();
    let beta = Import::for_foreign("Beta", None, None).unwrap();
    let lower = Import::for_foreign("alpha", None, None).unwrap();

    assert!(alpha < beta);
    // Ordinal comparison: every uppercase letter sorts before lowercase
    assert!(beta < lower);
    assert_eq!(alpha.cmp(&alpha), std::cmp::Ordering::Equal);
}

#[test]
fn test_display_renders_type_name() {
    let import = Import::for_foreign("NSArray<NSString *>", None, None).unwrap();
    assert_eq!(import.to_string(), "NSArray<NSString *>");
}

#[test]
fn test_for_foreign_fields() {
    let import =
        Import::for_foreign("NSString", Some("Foundation/NSString.h"), Some("@class NSString"))
            .unwrap();

    assert_eq!(import.type_name(), "NSString");
    assert_eq!(import.import_header(), Some("Foundation/NSString.h"));
    assert_eq!(import.forward_declaration(), Some("@class NSString"));
    assert_eq!(import.source_qualified_name(), None);
    assert!(!import.is_interface());
    assert!(import.generic_parameter_names().is_empty());
}

#[test]
fn test_for_foreign_rejects_empty_name() {
    let err = Import::for_foreign("", Some("Foundation/NSString.h"), None).unwrap_err();
    assert!(matches!(err, CollectError::UnnamedForeignType { .. }));
}

#[test]
fn test_for_declaration_of_top_level_class() {
    let mut store = TypeStore::new();
    let employee = store.add_class("com.acme", "Employee");
    let env = flat_env();

    let import = Import::for_declaration(employee, &store, &env).unwrap();
    assert_eq!(import.type_name(), "Employee");
    assert_eq!(import.import_header(), Some("Employee.h"));
    assert_eq!(import.source_qualified_name(), Some("com.acme.Employee"));
    assert_eq!(import.forward_declaration(), None);
    assert!(!import.is_interface());
}

#[test]
fn test_nested_declaration_imports_enclosing_unit() {
    let mut store = TypeStore::new();
    let outer = store.add_class("com.acme", "Outer");
    let package = store.atom("com.acme");
    let inner_name = store.atom("Inner");
    let inner = store.declare(Declaration::interface(package, inner_name).with_enclosing(outer));
    let env = flat_env();

    let import = Import::for_declaration(inner, &store, &env).unwrap();
    // Display name and kind belong to the nested declaration
    assert_eq!(import.type_name(), "Outer_Inner");
    assert!(import.is_interface());
    // Header and qualified name belong to the top-level unit
    assert_eq!(import.import_header(), Some("Outer.h"));
    assert_eq!(import.source_qualified_name(), Some("com.acme.Outer"));
}

#[test]
fn test_platform_declaration_has_no_source_name_and_no_header() {
    let mut store = TypeStore::new();
    let ns_object = store.add_platform_class("NSObject");
    let env = flat_env();

    let import = Import::for_declaration(ns_object, &store, &env).unwrap();
    assert_eq!(import.type_name(), "NSObject");
    assert_eq!(import.import_header(), None);
    assert_eq!(import.source_qualified_name(), None);
}

#[test]
fn test_generic_parameter_names_follow_opt_in_flag() {
    let mut store = TypeStore::new();
    let package = store.atom("com.acme");
    let key = store.atom("K");
    let value = store.atom("V");

    let plain_name = store.atom("Pair");
    let plain = store.declare(
        Declaration::class(package, plain_name).with_type_params(vec![key, value]),
    );

    let generic_name = store.atom("Registry");
    let generic = store.declare(
        Declaration::class(package, generic_name)
            .with_flags(DeclFlags::GENERATE_GENERICS)
            .with_type_params(vec![key, value]),
    );
    let env = flat_env();

    // Without the flag the parameters stay out of the descriptor
    let plain_import = Import::for_declaration(plain, &store, &env).unwrap();
    assert!(plain_import.generic_parameter_names().is_empty());

    let generic_import = Import::for_declaration(generic, &store, &env).unwrap();
    assert_eq!(generic_import.generic_parameter_names(), ["K", "V"]);
}

#[test]
fn test_forward_declaration_override() {
    let mut store = TypeStore::new();
    let employee = store.add_class("com.acme", "Employee");
    let mut env = flat_env();
    env.set_forward_declaration("com.acme.Employee", "@class Employee");

    let import = Import::for_declaration(employee, &store, &env).unwrap();
    assert_eq!(import.forward_declaration(), Some("@class Employee"));
}

#[test]
fn test_cyclic_enclosing_chain_is_an_invariant_violation() {
    let mut store = TypeStore::new();
    let package = store.atom("com.acme");
    let a_name = store.atom("A");
    let b_name = store.atom("B");
    // A claims the not-yet-declared B as its encloser, B claims A: a cycle
    let a = store.declare(Declaration::class(package, a_name).with_enclosing(DeclId(1)));
    let b = store.declare(Declaration::class(package, b_name).with_enclosing(a));
    assert_eq!(b, DeclId(1));
    let env = flat_env();

    let err = Import::for_declaration(a, &store, &env).unwrap_err();
    assert!(matches!(err, CollectError::NoTopLevelDeclaration { .. }));
    assert!(err.to_string().contains('A'));
}

#[test]
fn test_import_set_first_seen_wins() {
    let mut set = ImportSet::new();
    let first = Import::for_foreign("NSString", Some("Foundation/NSString.h"), None).unwrap();
    let second = Import::for_foreign("NSString", Some("elsewhere/NSString.h"), None).unwrap();

    assert!(set.insert(first));
    assert!(!set.insert(second));
    assert_eq!(set.len(), 1);
    // The original descriptor survives
    assert_eq!(
        set.get("NSString").unwrap().import_header(),
        Some("Foundation/NSString.h")
    );
}

#[test]
fn test_import_set_lookup_and_order() {
    let mut set = ImportSet::new();
    set.insert(Import::for_foreign("Beta", None, None).unwrap());
    set.insert(Import::for_foreign("Alpha", None, None).unwrap());

    assert!(set.contains("Beta"));
    assert!(!set.contains("Gamma"));

    // Iteration preserves first-seen order
    let names: Vec<&str> = set.iter().map(Import::type_name).collect();
    assert_eq!(names, ["Beta", "Alpha"]);

    // Sorting is byte-wise by name
    let sorted: Vec<Import> = set.into_sorted();
    let names: Vec<&str> = sorted.iter().map(Import::type_name).collect();
    assert_eq!(names, ["Alpha", "Beta"]);
}
