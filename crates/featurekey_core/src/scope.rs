//! Immutable, chainable scopes.
//!
//! A scope maps [`Token`]s to type-erased values. Binding never mutates: it returns a new scope whose head is one
//! new node pointing at the old head, so every earlier scope value keeps answering lookups exactly as before.
//!
//! ## Notes
//! - Lookup is `O(depth)`; the nearest binding for a token wins (later binds shadow earlier ones).
//! - Unrelated bindings are structurally shared between parent and child.
//! - Host applications with their own context type can implement [`ScopeStore`] instead of using [`Scope`].

use core::any::Any;
use core::fmt;
use std::sync::Arc;

use crate::token::Token;

/// Type-erased value stored in a scope.
pub type ScopeValue = dyn Any + Send + Sync;

/// The host scope collaborator: derive a child with one more binding, or look a binding up by identity.
///
/// ## Contract
/// - `bind_value` must not mutate `self`; the returned scope answers every lookup like `self`, except for `token`.
/// - `lookup_value` must distinguish "absent" (`None`) from "present with a default-looking value".
/// - Implementations must be safe to share across threads.
pub trait ScopeStore: Clone + Send + Sync {
    /// Return a new scope with `value` bound under `token`.
    fn bind_value(&self, token: &Token, value: Arc<ScopeValue>) -> Self;

    /// Return the nearest value bound under `token`, if any.
    fn lookup_value(&self, token: &Token) -> Option<&ScopeValue>;
}

struct Binding {
    token: Token,
    value: Arc<ScopeValue>,
    parent: Option<Arc<Binding>>,
    depth: usize,
}

/// Represent a persistent scope: a linked sequence of immutable bindings.
///
/// ## Examples
/// ```rust
/// use std::sync::Arc;
/// use featurekey_core::{Scope, ScopeStore, Token};
///
/// let token = Token::new();
/// let root = Scope::root();
/// let child = root.bind_value(&token, Arc::new(7_i32));
///
/// assert!(root.lookup_value(&token).is_none());
/// assert_eq!(child.lookup_value(&token).and_then(|v| v.downcast_ref::<i32>()), Some(&7));
/// ```
#[derive(Clone, Default)]
pub struct Scope {
    head: Option<Arc<Binding>>,
}

impl Scope {
    /// Return an empty scope.
    pub fn root() -> Self {
        Self::default()
    }

    /// Return the number of bindings on this chain (shadowed bindings included).
    pub fn depth(&self) -> usize {
        self.head.as_ref().map_or(0, |node| node.depth)
    }

    /// Return true if nothing has been bound on this chain.
    pub fn is_root(&self) -> bool {
        self.head.is_none()
    }

    /// Return true if `self` and `other` are the same scope value (same head node).
    pub fn same_chain(&self, other: &Scope) -> bool {
        match (&self.head, &other.head) {
            (None, None) => true,
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }

    fn iter(&self) -> Chain<'_> {
        Chain {
            next: self.head.as_deref(),
        }
    }
}

impl ScopeStore for Scope {
    fn bind_value(&self, token: &Token, value: Arc<ScopeValue>) -> Self {
        let depth = self.depth() + 1;
        Self {
            head: Some(Arc::new(Binding {
                token: token.retain(),
                value,
                parent: self.head.clone(),
                depth,
            })),
        }
    }

    fn lookup_value(&self, token: &Token) -> Option<&ScopeValue> {
        self.iter().find(|node| node.token == *token).map(|node| &*node.value)
    }
}

struct Chain<'a> {
    next: Option<&'a Binding>,
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a Binding;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = node.parent.as_deref();
        Some(node)
    }
}

impl fmt::Debug for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scope")
            .field("depth", &self.depth())
            .field("tokens", &self.iter().map(|node| &node.token).collect::<Vec<_>>())
            .finish()
    }
}

impl Drop for Scope {
    // Unlink uniquely owned nodes iteratively so very deep chains cannot overflow the stack on drop.
    fn drop(&mut self) {
        let mut next = self.head.take();
        while let Some(node) = next {
            match Arc::try_unwrap(node) {
                Ok(mut binding) => next = binding.parent.take(),
                Err(_) => break,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read_i32(scope: &Scope, token: &Token) -> Option<i32> {
        scope.lookup_value(token).and_then(|v| v.downcast_ref::<i32>()).copied()
    }

    #[test]
    fn test_root_is_empty() {
        let scope = Scope::root();
        assert!(scope.is_root());
        assert_eq!(scope.depth(), 0);
        assert!(scope.lookup_value(&Token::new()).is_none());
    }

    #[test]
    fn test_bind_leaves_parent_untouched() {
        let token = Token::new();
        let parent = Scope::root().bind_value(&token, Arc::new(1_i32));
        let child = parent.bind_value(&token, Arc::new(2_i32));

        assert_eq!(read_i32(&parent, &token), Some(1));
        assert_eq!(read_i32(&child, &token), Some(2));
        assert_eq!(parent.depth(), 1);
        assert_eq!(child.depth(), 2);
    }

    #[test]
    fn test_unrelated_bindings_are_inherited() {
        let a = Token::new();
        let b = Token::new();
        let scope = Scope::root()
            .bind_value(&a, Arc::new(10_i32))
            .bind_value(&b, Arc::new(20_i32));

        assert_eq!(read_i32(&scope, &a), Some(10));
        assert_eq!(read_i32(&scope, &b), Some(20));
    }

    #[test]
    fn test_siblings_do_not_see_each_other() {
        let token = Token::new();
        let root = Scope::root();
        let left = root.bind_value(&token, Arc::new(1_i32));
        let right = root.bind_value(&Token::new(), Arc::new(2_i32));

        assert_eq!(read_i32(&left, &token), Some(1));
        assert_eq!(read_i32(&right, &token), None);
    }

    #[test]
    fn test_same_chain() {
        let root = Scope::root();
        let child = root.bind_value(&Token::new(), Arc::new(()));
        let copy = child.clone();

        assert!(root.same_chain(&Scope::root()));
        assert!(child.same_chain(&copy));
        assert!(!child.same_chain(&root));
    }

    #[test]
    fn test_deep_chain_drops_without_overflow() {
        let token = Token::new();
        let mut scope = Scope::root();
        for i in 0..200_000_i32 {
            scope = scope.bind_value(&token, Arc::new(i));
        }
        assert_eq!(read_i32(&scope, &token), Some(199_999));
        drop(scope);
    }
}
