//! Provide the identity and storage primitives behind typed scope accessors.
//!
//! This crate is intentionally small and dependency-light. It contains the pieces that have no opinion about
//! value types or naming:
//! - [`Token`]: a unique, address-stable identity handle used as the physical lookup key,
//! - [`ScopeStore`] / [`Scope`]: the immutable, chainable scope that bindings are written into,
//! - [`CallSite`]: the source location captured when an accessor is built,
//! - [`KeyError`]: the error taxonomy shared by accessors and inspections.
//!
//! ## Notes
//!
//! - No IO and no global state. Everything here is a pure function over immutable inputs.
//! - Typed access lives in the `featurekey` crate; this crate only ever sees `dyn Any`.

#![deny(clippy::unwrap_used)]

pub mod call_site;
pub mod errors;
pub mod scope;
pub mod token;

pub use call_site::CallSite;
pub use errors::{ErrorKind, KeyError};
pub use scope::{Scope, ScopeStore, ScopeValue};
pub use token::Token;
