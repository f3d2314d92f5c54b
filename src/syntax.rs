//! Rust-syntax renderings of keys and inspections.
//!
//! A key rendering is an expression that builds an equivalent key: same value type, same display name. Inspection
//! renderings are for debugging only and do not compile.
//!
//! ## Identity warning
//! Evaluating a rendered key expression always allocates a **new** token. The resulting key has the same name as
//! the rendered key but never sees its bindings, and the rendered key never sees the new key's bindings.

use core::any::type_name;
use core::fmt;

use crate::bool_key::BoolKey;
use crate::inspection::{BoolInspection, Inspection};
use crate::key::Key;

/// Render a value as Rust expression text.
///
/// Key renderings ([`Key`], [`BoolKey`]) compile: evaluating one builds a new key with the same value type and name
/// (but a new identity). Inspection renderings are debug-only. They spell out the captured key, value and presence as
/// a struct literal, but the fields are private and `key` is a borrow, so the text does not compile.
pub trait SyntaxRepr {
    /// Return the Rust expression text.
    fn syntax_repr(&self) -> String;
}

/// Private std module paths reported by `type_name`, paired with their public spelling. Applied in order.
const PUBLIC_PATHS: &[(&str, &str)] = &[
    ("alloc::", "std::"),
    ("std::collections::hash::map::", "std::collections::"),
    ("std::collections::hash::set::", "std::collections::"),
    ("std::collections::btree::map::", "std::collections::"),
    ("std::collections::btree::set::", "std::collections::"),
];

/// Return the name of `V` as a path usable from an ordinary crate.
///
/// `std::any::type_name` reports implementation paths (`alloc::string::String`,
/// `std::collections::hash::map::HashMap`); those are rewritten to their public `std::` re-exports.
pub fn type_path<V: ?Sized>() -> String {
    rewrite_private_paths(type_name::<V>())
}

fn rewrite_private_paths(raw: &str) -> String {
    PUBLIC_PATHS
        .iter()
        .fold(raw.to_string(), |text, (from, to)| replace_path_prefix(&text, from, to))
}

/// Replace `from` with `to` wherever `from` starts a path segment (not inside a longer identifier).
fn replace_path_prefix(raw: &str, from: &str, to: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut rest = raw;
    while let Some(pos) = rest.find(from) {
        let at_boundary = rest[..pos]
            .chars()
            .next_back()
            .is_none_or(|c| !(c.is_alphanumeric() || c == '_'));
        out.push_str(&rest[..pos]);
        out.push_str(if at_boundary { to } else { from });
        rest = &rest[pos + from.len()..];
    }
    out.push_str(rest);
    out
}

fn key_expr<V>(key: &Key<V>) -> String {
    format!("featurekey::Key::<{}>::named({:?})", type_path::<V>(), key.name())
}

fn bool_key_expr(name: &str) -> String {
    format!("featurekey::BoolKey::named({name:?})")
}

impl<V> SyntaxRepr for Key<V> {
    fn syntax_repr(&self) -> String {
        key_expr(self)
    }
}

impl SyntaxRepr for BoolKey {
    fn syntax_repr(&self) -> String {
        bool_key_expr(self.name())
    }
}

impl<V: fmt::Debug> SyntaxRepr for Inspection<'_, V> {
    fn syntax_repr(&self) -> String {
        format!(
            "featurekey::Inspection::<{}> {{ key: {}, value: {:?}, present: {} }}",
            type_path::<V>(),
            key_expr(self.key()),
            self.value(),
            self.is_set()
        )
    }
}

impl SyntaxRepr for BoolInspection<'_> {
    fn syntax_repr(&self) -> String {
        format!(
            "featurekey::BoolInspection {{ key: {}, value: {}, present: {} }}",
            bool_key_expr(self.key().name()),
            self.value(),
            self.is_set()
        )
    }
}
