//! Immutable, hierarchical value carrier.
//!
//! A [`Context`] is a chain of nodes, each holding one value keyed by its
//! type. Deriving a context pushes a new node in front of the existing chain;
//! nothing already in the chain is ever modified, so a context can be shared
//! across threads and derived from concurrently without coordination.
//!
//! Lookups walk from the newest node towards the root and return the first
//! value of the requested type, so a value bound lower in the tree shadows
//! one bound higher up.
//!
//! ```
//! use ctxlog::Context;
//!
//! #[derive(Debug, PartialEq)]
//! struct RequestId(u64);
//!
//! let root = Context::background();
//! let child = root.with_value(RequestId(7));
//!
//! assert_eq!(child.value::<RequestId>(), Some(&RequestId(7)));
//! assert_eq!(root.value::<RequestId>(), None);
//! ```

use std::any::{Any, TypeId};
use std::fmt;
use std::sync::Arc;

/// Cheaply clonable handle to an immutable chain of typed values.
#[derive(Clone, Default)]
pub struct Context {
    node: Option<Arc<Node>>,
}

struct Node {
    parent: Context,
    key: TypeId,
    value: Box<dyn Any + Send + Sync>,
}

impl Context {
    /// Empty root context.
    pub fn background() -> Self {
        Self::default()
    }

    /// Derive a child context holding `value`.
    ///
    /// `self` is left untouched; only the returned context (and contexts
    /// derived from it) see the new value.
    pub fn with_value<T: Any + Send + Sync>(&self, value: T) -> Self {
        Self {
            node: Some(Arc::new(Node {
                parent: self.clone(),
                key: TypeId::of::<T>(),
                value: Box::new(value),
            })),
        }
    }

    /// Nearest value of type `T` in this context's ancestry.
    pub fn value<T: Any>(&self) -> Option<&T> {
        let key = TypeId::of::<T>();
        let mut current = self;
        while let Some(node) = &current.node {
            if node.key == key {
                return node.value.downcast_ref::<T>();
            }
            current = &node.parent;
        }
        None
    }

    /// Context this one was derived from, or `None` at the root.
    pub fn parent(&self) -> Option<&Context> {
        self.node.as_ref().map(|node| &node.parent)
    }

    /// Number of values bound along the chain.
    pub fn depth(&self) -> usize {
        let mut depth = 0;
        let mut current = self;
        while let Some(node) = &current.node {
            depth += 1;
            current = &node.parent;
        }
        depth
    }

    /// Whether both handles refer to the same node.
    pub fn ptr_eq(&self, other: &Context) -> bool {
        match (&self.node, &other.node) {
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        }
    }
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context")
            .field("depth", &self.depth())
            .finish()
    }
}

impl Drop for Node {
    // Unlink the chain iteratively so dropping a very deep context cannot
    // overflow the stack.
    fn drop(&mut self) {
        let mut next = self.parent.node.take();
        while let Some(node) = next {
            match Arc::try_unwrap(node) {
                Ok(mut node) => next = node.parent.node.take(),
                Err(_) => break,
            }
        }
    }
}
