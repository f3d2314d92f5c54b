//! Shared error taxonomy for accessors and inspections.
//!
//! Error text is part of the public contract (tests and log searches match on it), so it is defined once here.

use miette::Diagnostic;
use thiserror::Error;

/// Canonical error kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A required key was read from a scope where it was never bound.
    KeyNotSet,
}

impl ErrorKind {
    /// Return the canonical kind name used as the message prefix.
    pub const fn as_str(self) -> &'static str {
        match self {
            ErrorKind::KeyNotSet => "KeyNotSet",
        }
    }
}

/// Errors raised by required reads.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum KeyError {
    #[error("KeyNotSet: key {name} is not set in scope")]
    #[diagnostic(
        code(featurekey::key_not_set),
        help("bind a value for this key on the scope chain before reading it as required")
    )]
    NotSet { name: String },
}

impl KeyError {
    /// Build a `KeyNotSet` error for the key with display name `name`.
    pub fn not_set(name: impl Into<String>) -> Self {
        KeyError::NotSet { name: name.into() }
    }

    /// Return the canonical kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            KeyError::NotSet { .. } => ErrorKind::KeyNotSet,
        }
    }

    /// Return the display name of the key involved.
    pub fn key_name(&self) -> &str {
        match self {
            KeyError::NotSet { name } => name,
        }
    }
}
