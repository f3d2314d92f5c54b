//! Boolean feature flags.
//!
//! A [`BoolKey`] is a [`Key<bool>`] with flag vocabulary. Presence and value together give three states:
//!
//! | state          | `enabled` | `disabled` | `explicitly_disabled` |
//! |----------------|-----------|------------|-----------------------|
//! | unset          | false     | true       | false                 |
//! | set to `true`  | true      | false      | false                 |
//! | set to `false` | false     | true       | true                  |
//!
//! There is no unbind: once a chain sets a flag, descendants can only override it.

use core::fmt;
use core::ops::Deref;

use featurekey_core::ScopeStore;

use crate::inspection::BoolInspection;
use crate::key::Key;
use crate::options::KeyOptions;

/// Represent a boolean feature flag.
///
/// ## Examples
/// ```rust
/// use featurekey::{BoolKey, Scope};
///
/// let new_ui = BoolKey::named("new-ui");
/// let scope = Scope::root();
/// assert!(new_ui.disabled(&scope));
///
/// let scope = new_ui.with_enabled(&scope);
/// assert!(new_ui.enabled(&scope));
/// ```
#[derive(PartialEq, Eq, Hash)]
pub struct BoolKey {
    key: Key<bool>,
}

impl BoolKey {
    /// Create an anonymous flag named after this call site.
    #[track_caller]
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self::with_options(KeyOptions::new())
    }

    /// Create a flag with a debug name. An empty name behaves like [`BoolKey::new`].
    #[track_caller]
    pub fn named(name: impl Into<String>) -> Self {
        Self::with_options(KeyOptions::new().with_name(name))
    }

    /// Create a flag from explicit options.
    #[track_caller]
    pub fn with_options(options: KeyOptions) -> Self {
        Self {
            key: Key::with_options(options),
        }
    }

    /// Return the underlying generic key.
    pub fn as_key(&self) -> &Key<bool> {
        &self.key
    }

    /// Return a new scope with this flag set to `true`.
    pub fn with_enabled<S: ScopeStore>(&self, ctx: &S) -> S {
        self.key.bind(ctx, true)
    }

    /// Return a new scope with this flag set to `false`.
    pub fn with_disabled<S: ScopeStore>(&self, ctx: &S) -> S {
        self.key.bind(ctx, false)
    }

    /// Return true if the flag is set to `true`. Unset reads as `false`.
    pub fn enabled<S: ScopeStore>(&self, ctx: &S) -> bool {
        self.inspect_bool(ctx).enabled()
    }

    /// Return true if the flag is unset or set to `false`.
    pub fn disabled<S: ScopeStore>(&self, ctx: &S) -> bool {
        self.inspect_bool(ctx).disabled()
    }

    /// Return true only if the flag is set, and set to `false`.
    ///
    /// Distinguishes "turned off" from "never configured".
    pub fn explicitly_disabled<S: ScopeStore>(&self, ctx: &S) -> bool {
        self.inspect_bool(ctx).explicitly_disabled()
    }

    /// Read `ctx` once and freeze the result with flag derivations.
    pub fn inspect_bool<S: ScopeStore>(&self, ctx: &S) -> BoolInspection<'_> {
        BoolInspection::new(self.key.inspect(ctx))
    }
}

impl Deref for BoolKey {
    type Target = Key<bool>;

    fn deref(&self) -> &Self::Target {
        &self.key
    }
}

impl fmt::Display for BoolKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.key, f)
    }
}

impl fmt::Debug for BoolKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoolKey")
            .field("name", &self.key.name())
            .field("token", self.key.token())
            .finish()
    }
}
