//! Typed accessors for values bound on a scope chain.
//!
//! A [`Key<V>`] is the handle users hold. It owns a [`Token`] (its identity) and a display name, and reads and
//! writes values of exactly one type `V` through any [`ScopeStore`].
//!
//! ## Notes
//! - Two keys never collide, even with the same `V` and the same name: lookup goes through the token, and tokens
//!   compare by allocation identity.
//! - Keys are meant to be built once and kept for the life of the program (a `static` behind `LazyLock`, or a
//!   field on whatever owns the application's wiring).
//! - Fields are private and every constructor allocates a token, so no key can exist without its own identity.
//!
//! ## Examples
//! ```rust
//! use featurekey::{Key, Scope};
//!
//! let max_items: Key<u32> = Key::named("max-items");
//! let scope = max_items.bind(&Scope::root(), 100);
//!
//! assert_eq!(max_items.get(&scope), 100);
//! assert_eq!(max_items.try_get(&Scope::root()), (0, false));
//! ```

use core::any::type_name;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::marker::PhantomData;
use std::sync::Arc;

use featurekey_core::{KeyError, ScopeStore, Token};

use crate::errors;
use crate::inspection::Inspection;
use crate::naming::resolve_name;
use crate::options::KeyOptions;

/// Represent a typed, collision-free accessor for values of type `V`.
pub struct Key<V> {
    token: Token,
    name: String,
    // `fn() -> V` keeps `Key<V>` `Send + Sync` whatever `V` is; the key never holds a `V`.
    _value: PhantomData<fn() -> V>,
}

impl<V> Key<V> {
    /// Create an anonymous key named after this call site.
    #[track_caller]
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self::with_options(KeyOptions::new())
    }

    /// Create a key with a debug name. An empty name behaves like [`Key::new`].
    #[track_caller]
    pub fn named(name: impl Into<String>) -> Self {
        Self::with_options(KeyOptions::new().with_name(name))
    }

    /// Create a key from explicit options.
    #[track_caller]
    pub fn with_options(options: KeyOptions) -> Self {
        let token = Token::new();
        let explicit = options.name();
        let call_site = match explicit {
            Some(_) => None,
            None => options.resolve_call_site(),
        };
        let name = resolve_name(explicit, call_site, &token);
        tracing::trace!(
            key = %name,
            anonymous = explicit.is_none(),
            value_type = type_name::<V>(),
            "created key"
        );

        Self {
            token,
            name,
            _value: PhantomData,
        }
    }

    /// Return the display name resolved at construction.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Return the identity handle this key binds under.
    ///
    /// Host integrations implementing [`ScopeStore`] need it; ordinary callers never do.
    pub fn token(&self) -> &Token {
        &self.token
    }
}

impl<V> Key<V>
where
    V: Clone + Send + Sync + 'static,
{
    /// Return a new scope with `value` bound under this key. `ctx` is left as it was.
    pub fn bind<S: ScopeStore>(&self, ctx: &S, value: V) -> S {
        ctx.bind_value(&self.token, Arc::new(value))
    }

    /// Return the bound value, or `None` when this key is not set on `ctx`.
    ///
    /// A value stored under this key's token with a different type reads as `None`.
    pub fn lookup<S: ScopeStore>(&self, ctx: &S) -> Option<V> {
        self.peek(ctx).cloned()
    }

    /// Return the bound value, or `V::default()` when not set.
    pub fn get<S: ScopeStore>(&self, ctx: &S) -> V
    where
        V: Default,
    {
        self.inspect(ctx).get()
    }

    /// Return the bound value and `true`, or `(V::default(), false)` when not set.
    pub fn try_get<S: ScopeStore>(&self, ctx: &S) -> (V, bool)
    where
        V: Default,
    {
        self.inspect(ctx).try_get()
    }

    /// Return the bound value, or `fallback` when not set.
    pub fn get_or<S: ScopeStore>(&self, ctx: &S, fallback: V) -> V {
        self.lookup(ctx).unwrap_or(fallback)
    }

    /// Return the bound value, or a `KeyNotSet` error naming this key.
    pub fn require<S: ScopeStore>(&self, ctx: &S) -> Result<V, KeyError> {
        self.lookup(ctx).ok_or_else(|| KeyError::not_set(self.name.as_str()))
    }

    /// Return the bound value.
    ///
    /// ## Panics
    /// Panics with `KeyNotSet: key <name> is not set in scope` when this key is not set on `ctx`.
    #[track_caller]
    pub fn must_get<S: ScopeStore>(&self, ctx: &S) -> V {
        match self.lookup(ctx) {
            Some(value) => value,
            None => errors::raise_not_set(&self.name),
        }
    }

    /// Return true if a value of type `V` is bound under this key on `ctx`.
    pub fn is_set<S: ScopeStore>(&self, ctx: &S) -> bool {
        self.peek(ctx).is_some()
    }

    /// Return true if this key is not set on `ctx`.
    pub fn is_not_set<S: ScopeStore>(&self, ctx: &S) -> bool {
        !self.is_set(ctx)
    }

    /// Read `ctx` once and freeze the result.
    pub fn inspect<S: ScopeStore>(&self, ctx: &S) -> Inspection<'_, V>
    where
        V: Default,
    {
        Inspection::from_lookup(self, self.lookup(ctx))
    }

    fn peek<'s, S: ScopeStore>(&self, ctx: &'s S) -> Option<&'s V> {
        ctx.lookup_value(&self.token)?.downcast_ref::<V>()
    }
}

impl<V> PartialEq for Key<V> {
    fn eq(&self, other: &Self) -> bool {
        self.token == other.token
    }
}

impl<V> Eq for Key<V> {}

impl<V> Hash for Key<V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.token.hash(state);
    }
}

impl<V> fmt::Display for Key<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl<V> fmt::Debug for Key<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Key")
            .field("name", &self.name)
            .field("value_type", &type_name::<V>())
            .field("token", &self.token)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use featurekey_core::Scope;

    #[test]
    fn test_bind_then_get() {
        let key: Key<i32> = Key::named("limit");
        let scope = key.bind(&Scope::root(), 5);
        assert_eq!(key.get(&scope), 5);
        assert_eq!(key.try_get(&scope), (5, true));
        assert_eq!(key.lookup(&scope), Some(5));
    }

    #[test]
    fn test_unset_reads_default() {
        let key: Key<String> = Key::named("greeting");
        let scope = Scope::root();
        assert_eq!(key.get(&scope), "");
        assert_eq!(key.try_get(&scope), (String::new(), false));
        assert_eq!(key.get_or(&scope, "hi".to_string()), "hi");
        assert!(key.is_not_set(&scope));
    }

    #[test]
    fn test_zero_value_is_set() {
        let key: Key<i32> = Key::named("zero");
        let scope = key.bind(&Scope::root(), 0);
        assert!(key.is_set(&scope));
        assert_eq!(key.try_get(&scope), (0, true));
        assert_eq!(key.get_or(&scope, 9), 0);
    }

    #[test]
    fn test_later_bind_shadows() {
        let key: Key<i32> = Key::named("n");
        let first = key.bind(&Scope::root(), 1);
        let second = key.bind(&first, 2);
        assert_eq!(key.get(&first), 1);
        assert_eq!(key.get(&second), 2);
    }

    #[test]
    fn test_require_error_names_key() {
        let key: Key<u8> = Key::named("required-thing");
        assert_eq!(key.require(&Scope::root()), Err(KeyError::not_set("required-thing")));
    }

    #[test]
    #[should_panic(expected = "KeyNotSet: key must-have is not set in scope")]
    fn test_must_get_panics_when_unset() {
        let key: Key<u8> = Key::named("must-have");
        key.must_get(&Scope::root());
    }

    #[test]
    fn test_foreign_type_reads_as_absent() {
        let key: Key<i32> = Key::named("typed");
        let scope = Scope::root().bind_value(key.token(), Arc::new("not an i32"));
        assert_eq!(key.try_get(&scope), (0, false));
        assert!(key.is_not_set(&scope));
        assert!(key.require(&scope).is_err());
    }

    #[test]
    fn test_equality_is_identity() {
        let a: Key<i32> = Key::named("same");
        let b: Key<i32> = Key::named("same");
        assert_eq!(a, a);
        assert_ne!(a, b);
        assert_eq!(a.name(), b.name());
    }

    #[test]
    fn test_display_and_debug() {
        let key: Key<i32> = Key::named("shown");
        assert_eq!(key.to_string(), "shown");
        let debug = format!("{key:?}");
        assert!(debug.contains("\"shown\""), "{debug}");
        assert!(debug.contains("i32"), "{debug}");
    }
}
