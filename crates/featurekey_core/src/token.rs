//! Identity tokens.
//!
//! A [`Token`] has no content worth comparing: two tokens are equal only when they are the same allocation.

use core::fmt;
use core::hash::{Hash, Hasher};
use std::sync::Arc;

/// Heap payload behind a token.
///
/// Carries one inert byte so the allocation is never zero-sized; zero-sized allocations may share an address.
struct Cell {
    _pad: u8,
}

/// Represent a unique identity handle.
///
/// ## Notes
/// - Equality and hashing use the allocation address only.
/// - Not `Clone`: an accessor owns its token. Scope stores call [`Token::retain`] to hold an extra reference, which
///   also keeps the address from being reused while a binding can still observe it.
///
/// ## Examples
/// ```rust
/// use featurekey_core::Token;
///
/// let a = Token::new();
/// let b = Token::new();
/// assert_ne!(a, b);
/// assert_eq!(a, a);
/// ```
pub struct Token {
    cell: Arc<Cell>,
}

impl Token {
    /// Allocate a fresh token, distinct from every other token in the process.
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self {
            cell: Arc::new(Cell { _pad: 0 }),
        }
    }

    /// Return the address backing this token.
    pub fn addr(&self) -> usize {
        Arc::as_ptr(&self.cell) as usize
    }

    /// Return another handle to the same identity, for a [`ScopeStore`](crate::ScopeStore) to keep in a binding.
    pub fn retain(&self) -> Self {
        Self {
            cell: Arc::clone(&self.cell),
        }
    }
}

impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.cell, &other.cell)
    }
}

impl Eq for Token {}

impl Hash for Token {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.addr().hash(state);
    }
}

impl fmt::Pointer for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Pointer::fmt(&Arc::as_ptr(&self.cell), f)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.addr())
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Token").field(&format_args!("{self}")).finish()
    }
}
