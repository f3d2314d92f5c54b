//! Rust-syntax renderings of keys and inspections.
//!
//! Every rendering must parse as a Rust expression. Key renderings must also resolve: rebuilding a key from its
//! rendering produces a key with the same name and value type but a *different* identity.

use featurekey::{BoolKey, Key, Scope, SyntaxRepr};

/// Parse `text` as a Rust expression, failing the test with the offending text otherwise.
fn assert_parses_as_expr(text: &str) {
    if let Err(err) = syn::parse_str::<syn::Expr>(text) {
        panic!("rendering {text:?} is not a valid Rust expression: {err}");
    }
}

#[test]
fn key_rendering() {
    let key: Key<i32> = Key::named("max-retries");
    insta::assert_snapshot!(key.syntax_repr(), @r#"featurekey::Key::<i32>::named("max-retries")"#);
    assert_parses_as_expr(&key.syntax_repr());
}

#[test]
fn key_rendering_uses_std_paths() {
    let key: Key<String> = Key::named("api-key");
    insta::assert_snapshot!(key.syntax_repr(), @r#"featurekey::Key::<std::string::String>::named("api-key")"#);
    assert_parses_as_expr(&key.syntax_repr());

    let nested: Key<Vec<Option<String>>> = Key::named("tags");
    assert_parses_as_expr(&nested.syntax_repr());
}

#[test]
fn key_rendering_names_public_collection_paths() {
    use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

    let limits: Key<HashMap<String, i32>> = Key::named("limits");
    insta::assert_snapshot!(
        limits.syntax_repr(),
        @r#"featurekey::Key::<std::collections::HashMap<std::string::String, i32>>::named("limits")"#
    );
    let ranks: Key<BTreeMap<u8, u8>> = Key::named("ranks");
    insta::assert_snapshot!(
        ranks.syntax_repr(),
        @r#"featurekey::Key::<std::collections::BTreeMap<u8, u8>>::named("ranks")"#
    );
    let ids: Key<HashSet<u64>> = Key::named("ids");
    assert!(ids.syntax_repr().contains("std::collections::HashSet<u64>"), "{}", ids.syntax_repr());
    let tags: Key<BTreeSet<String>> = Key::named("tags");
    assert!(
        tags.syntax_repr().contains("std::collections::BTreeSet<std::string::String>"),
        "{}",
        tags.syntax_repr()
    );

    // The renderings above, written out by hand: they must resolve and rebuild keys of the same type.
    let rebuilt_limits = featurekey::Key::<std::collections::HashMap<std::string::String, i32>>::named("limits");
    let rebuilt_ranks = featurekey::Key::<std::collections::BTreeMap<u8, u8>>::named("ranks");
    assert_eq!(rebuilt_limits.syntax_repr(), limits.syntax_repr());
    assert_eq!(rebuilt_ranks.syntax_repr(), ranks.syntax_repr());
}

#[test]
fn bool_key_rendering() {
    let flag = BoolKey::named("my-feature");
    insta::assert_snapshot!(flag.syntax_repr(), @r#"featurekey::BoolKey::named("my-feature")"#);
    assert_parses_as_expr(&flag.syntax_repr());
}

#[test]
fn anonymous_key_rendering_carries_resolved_name() {
    let key: Key<u8> = Key::new();
    let rendered = key.syntax_repr();
    assert!(rendered.contains(key.name()), "{rendered}");
    assert_parses_as_expr(&rendered);
}

#[test]
fn inspection_rendering() {
    let key: Key<String> = Key::named("test-key");

    let unset = key.inspect(&Scope::root()).syntax_repr();
    insta::assert_snapshot!(
        unset,
        @r#"featurekey::Inspection::<std::string::String> { key: featurekey::Key::<std::string::String>::named("test-key"), value: "", present: false }"#
    );
    assert_parses_as_expr(&unset);

    let scope = key.bind(&Scope::root(), "hello".to_string());
    let set = key.inspect(&scope).syntax_repr();
    assert!(set.contains(r#"value: "hello""#), "{set}");
    assert!(set.contains("present: true"), "{set}");
    assert_parses_as_expr(&set);
}

#[test]
fn bool_inspection_rendering() {
    let flag = BoolKey::named("test-flag");

    let unset = flag.inspect_bool(&Scope::root()).syntax_repr();
    insta::assert_snapshot!(
        unset,
        @r#"featurekey::BoolInspection { key: featurekey::BoolKey::named("test-flag"), value: false, present: false }"#
    );

    let on = flag.inspect_bool(&flag.with_enabled(&Scope::root())).syntax_repr();
    assert!(on.contains("value: true"), "{on}");
    assert!(on.contains("present: true"), "{on}");
    assert_parses_as_expr(&on);
}

#[test]
fn rebuilt_key_has_same_name_but_new_identity() {
    let original: Key<i32> = Key::named("max-retries");
    // The expression `original.syntax_repr()` renders, written out by hand.
    let rebuilt = featurekey::Key::<i32>::named("max-retries");

    assert_eq!(rebuilt.syntax_repr(), original.syntax_repr());
    assert_eq!(rebuilt.name(), original.name());
    assert_ne!(rebuilt, original);

    let scope = rebuilt.bind(&Scope::root(), 5);
    assert!(original.is_not_set(&scope));
    assert_eq!(rebuilt.get(&scope), 5);
}

#[test]
fn rebuilt_flag_has_new_identity() {
    let original = BoolKey::named("my-feature");
    let rebuilt = featurekey::BoolKey::named("my-feature");

    assert_eq!(rebuilt.syntax_repr(), original.syntax_repr());
    let scope = rebuilt.with_enabled(&Scope::root());
    assert!(original.disabled(&scope));
    assert!(!original.explicitly_disabled(&scope));
}
