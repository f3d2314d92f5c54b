//! Frozen reads.
//!
//! An [`Inspection`] captures one lookup (key, value-or-default, presence) so callers can branch, default and format
//! without querying the scope again. Extending the scope later never changes an existing inspection.

use core::fmt;
use core::ops::Deref;

use featurekey_core::KeyError;

use crate::errors;
use crate::key::Key;

/// Represent the frozen result of reading a [`Key`] from a scope.
///
/// ## Examples
/// ```rust
/// use featurekey::{Key, Scope};
///
/// let max_items: Key<u32> = Key::named("max-items");
/// let unset = max_items.inspect(&Scope::root());
/// assert_eq!(unset.to_string(), "max-items: <not set>");
///
/// let scope = max_items.bind(&Scope::root(), 100);
/// let set = max_items.inspect(&scope);
/// assert_eq!(set.to_string(), "max-items: 100");
/// assert!(set.is_set());
/// ```
#[derive(Debug, Clone)]
pub struct Inspection<'k, V> {
    key: &'k Key<V>,
    value: V,
    present: bool,
}

impl<'k, V: Default> Inspection<'k, V> {
    /// Freeze a lookup result; an absent value is stored as `V::default()`.
    pub(crate) fn from_lookup(key: &'k Key<V>, found: Option<V>) -> Self {
        match found {
            Some(value) => Self {
                key,
                value,
                present: true,
            },
            None => Self {
                key,
                value: V::default(),
                present: false,
            },
        }
    }
}

impl<'k, V> Inspection<'k, V> {
    /// Return the key that was inspected.
    pub fn key(&self) -> &'k Key<V> {
        self.key
    }

    /// Borrow the captured value (`V::default()` when not set).
    pub fn value(&self) -> &V {
        &self.value
    }

    /// Return true if the key was set when inspected.
    pub fn is_set(&self) -> bool {
        self.present
    }

    /// Return true if the key was not set when inspected.
    pub fn is_not_set(&self) -> bool {
        !self.present
    }

    /// Consume the inspection and return the captured value.
    pub fn into_value(self) -> V {
        self.value
    }
}

impl<V: Clone> Inspection<'_, V> {
    /// Return the captured value (`V::default()` when not set).
    pub fn get(&self) -> V {
        self.value.clone()
    }

    /// Return the captured value and whether it was set.
    pub fn try_get(&self) -> (V, bool) {
        (self.value.clone(), self.present)
    }

    /// Return the captured value, or `None` when not set.
    pub fn lookup(&self) -> Option<V> {
        self.present.then(|| self.value.clone())
    }

    /// Return the captured value if set, otherwise `fallback`.
    pub fn get_or(&self, fallback: V) -> V {
        if self.present { self.value.clone() } else { fallback }
    }

    /// Return the captured value, or a `KeyNotSet` error naming the key.
    pub fn require(&self) -> Result<V, KeyError> {
        self.lookup().ok_or_else(|| KeyError::not_set(self.key.name()))
    }

    /// Return the captured value.
    ///
    /// ## Panics
    /// Panics with `KeyNotSet: key <name> is not set in scope` when the key was not set.
    #[track_caller]
    pub fn must_get(&self) -> V {
        if !self.present {
            errors::raise_not_set(self.key.name());
        }
        self.value.clone()
    }
}

impl<V: fmt::Display> fmt::Display for Inspection<'_, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.present {
            write!(f, "{}: {}", self.key.name(), self.value)
        } else {
            write!(f, "{}: <not set>", self.key.name())
        }
    }
}

/// Represent the frozen result of reading a boolean flag.
///
/// Adds the three-state derivations on top of [`Inspection<bool>`], computed from the captured value and presence.
///
/// ## Examples
/// ```rust
/// use featurekey::{BoolKey, Scope};
///
/// let dark_mode = BoolKey::named("dark-mode");
/// let off = dark_mode.inspect_bool(&dark_mode.with_disabled(&Scope::root()));
/// assert!(off.disabled());
/// assert!(off.explicitly_disabled());
/// ```
#[derive(Debug, Clone)]
pub struct BoolInspection<'k> {
    inner: Inspection<'k, bool>,
}

impl<'k> BoolInspection<'k> {
    pub(crate) fn new(inner: Inspection<'k, bool>) -> Self {
        Self { inner }
    }

    /// Return true if the flag was set to `true`. Unset reads as `false`.
    pub fn enabled(&self) -> bool {
        self.inner.value
    }

    /// Return true if the flag was unset or set to `false`.
    pub fn disabled(&self) -> bool {
        !self.enabled()
    }

    /// Return true only if the flag was set, and set to `false`.
    pub fn explicitly_disabled(&self) -> bool {
        self.inner.present && !self.inner.value
    }

    /// Return the underlying generic inspection.
    pub fn as_inspection(&self) -> &Inspection<'k, bool> {
        &self.inner
    }
}

impl<'k> Deref for BoolInspection<'k> {
    type Target = Inspection<'k, bool>;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl fmt::Display for BoolInspection<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.inner, f)
    }
}
