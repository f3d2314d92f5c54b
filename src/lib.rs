#![forbid(unsafe_code)]
//! Type-safe, collision-free values on immutable scope chains.
//!
//! A [`Key<V>`] is a typed handle for one named value. Binding through a key derives a new [`Scope`]; reading
//! through the same key later in the call chain returns the value, or reports that it was never set. Keys are
//! identified by a private [`Token`], so two keys never collide even when they share a value type and a name.
//!
//! ## Pieces
//!
//! - [`Key<V>`]: bind/read operations (`bind`, `get`, `try_get`, `get_or`, `must_get`, `is_set`, `inspect`).
//! - [`BoolKey`]: three-state flags (unset / enabled / explicitly disabled).
//! - [`Inspection`] / [`BoolInspection`]: frozen single reads that can be carried around and formatted.
//! - [`SyntaxRepr`]: Rust expressions that rebuild an equivalent (never identical) key or inspection.
//! - [`naming`]: display names, including call-site derived names for anonymous keys.
//!
//! ## Example
//!
//! ```rust
//! use std::sync::LazyLock;
//! use featurekey::{BoolKey, Key, Scope};
//!
//! static NEW_CHECKOUT: LazyLock<BoolKey> = LazyLock::new(|| BoolKey::named("new-checkout"));
//! static MAX_ITEMS: LazyLock<Key<u32>> = LazyLock::new(|| Key::named("max-items"));
//!
//! fn handler(scope: &Scope) -> u32 {
//!     if NEW_CHECKOUT.enabled(scope) { MAX_ITEMS.get_or(scope, 10) } else { 1 }
//! }
//!
//! let scope = NEW_CHECKOUT.with_enabled(&Scope::root());
//! let scope = MAX_ITEMS.bind(&scope, 25);
//! assert_eq!(handler(&scope), 25);
//! assert_eq!(handler(&Scope::root()), 1);
//! ```
//!
//! ## Panic Policy
//!
//! Only `must_get` panics (with `KeyNotSet: key <name> is not set in scope`); `require` returns the same error as a
//! `Result`. Everything else is total.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod bool_key;
pub mod errors;
pub mod inspection;
pub mod key;
pub mod naming;
pub mod options;
pub mod prelude;
pub mod syntax;

pub use bool_key::BoolKey;
pub use inspection::{BoolInspection, Inspection};
pub use key::Key;
pub use options::KeyOptions;
pub use syntax::SyntaxRepr;

pub use featurekey_core::{CallSite, ErrorKind, KeyError, Scope, ScopeStore, ScopeValue, Token};
