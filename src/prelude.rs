//! Prelude module for common imports.
//!
//! ```ignore
//! use featurekey::prelude::*;
//! ```

pub use crate::bool_key::BoolKey;
pub use crate::inspection::{BoolInspection, Inspection};
pub use crate::key::Key;
pub use crate::options::KeyOptions;
pub use crate::syntax::SyntaxRepr;
pub use featurekey_core::{Scope, ScopeStore};
