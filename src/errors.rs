//! Fatal-error helpers for required reads.
//!
//! [`KeyError`] owns the canonical message text; these helpers *raise* it as a panic so `must_get` callers see
//! `KeyNotSet: key <name> is not set in scope` at their own call site.

use featurekey_core::KeyError;

/// Raise a key error (implemented as a panic) with canonical formatting.
#[cold]
#[track_caller]
pub fn raise(err: KeyError) -> ! {
    tracing::debug!(kind = err.kind().as_str(), key = err.key_name(), "required key missing");
    panic!("{err}");
}

/// Raise `KeyNotSet` for the key named `name`.
#[cold]
#[track_caller]
pub fn raise_not_set(name: &str) -> ! {
    raise(KeyError::not_set(name))
}
