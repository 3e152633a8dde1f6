//! Singly-linked node.
//!
//! A node owns its value and, through [`Link`], the rest of the chain after it.

use std::fmt;
use std::mem::ManuallyDrop;

use crate::error::{ListError, Result};

/// Owning edge between nodes.
pub type Link<T> = Option<Box<Node<T>>>;

/// One element of a chain: a value plus exclusive ownership of its successor.
///
/// Dropping, cloning and comparing walk the chain in a loop, so chains of any
/// length are safe to handle through a single node.
pub struct Node<T> {
    pub(crate) value: T,
    pub(crate) next: Link<T>,
}

impl<T> Node<T> {
    /// Create a node with no successor.
    pub fn new(value: T) -> Self {
        Self { value, next: None }
    }

    /// Create a node that takes ownership of an existing successor.
    pub fn with_next(value: T, next: Link<T>) -> Self {
        Self { value, next }
    }

    /// Create a node from a value that may be absent.
    ///
    /// Fails with [`ListError::InvalidArgument`] if `value` is `None`.
    pub fn try_new(value: Option<T>) -> Result<Self> {
        value
            .map(Self::new)
            .ok_or(ListError::InvalidArgument("node value is absent"))
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn value_mut(&mut self) -> &mut T {
        &mut self.value
    }

    /// Consume the node, dropping its successor link.
    pub fn into_value(self) -> T {
        let mut node = ManuallyDrop::new(self);
        drop(node.next.take());
        // SAFETY: `node` is never dropped, and `value` is read exactly once.
        unsafe { std::ptr::read(&node.value) }
    }

    /// Replace the stored value, returning the previous one.
    pub fn set_value(&mut self, value: T) -> T {
        std::mem::replace(&mut self.value, value)
    }

    /// Replace the stored value with one that may be absent.
    ///
    /// The node is left unchanged on failure.
    pub fn try_set_value(&mut self, value: Option<T>) -> Result<T> {
        let value = value.ok_or(ListError::InvalidArgument("node value is absent"))?;
        Ok(self.set_value(value))
    }

    pub fn next(&self) -> Option<&Node<T>> {
        self.next.as_deref()
    }

    pub fn next_mut(&mut self) -> Option<&mut Node<T>> {
        self.next.as_deref_mut()
    }

    /// Replace the successor link, returning the detached previous successor.
    pub fn set_next(&mut self, next: Link<T>) -> Link<T> {
        std::mem::replace(&mut self.next, next)
    }

    /// Detach and return the successor link.
    pub fn take_next(&mut self) -> Link<T> {
        self.next.take()
    }
}

impl<T> Drop for Node<T> {
    fn drop(&mut self) {
        let mut link = self.next.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
    }
}

impl<T: Clone> Clone for Node<T> {
    fn clone(&self) -> Self {
        let mut head = Node::new(self.value.clone());
        let mut tail = &mut head.next;
        let mut source = self.next();
        while let Some(node) = source {
            let copy = tail.insert(Box::new(Node::new(node.value.clone())));
            tail = &mut copy.next;
            source = node.next();
        }
        head
    }
}

impl<T: PartialEq> PartialEq for Node<T> {
    fn eq(&self, other: &Self) -> bool {
        let mut left = Some(self);
        let mut right = Some(other);
        loop {
            match (left, right) {
                (Some(a), Some(b)) if a.value == b.value => {
                    left = a.next();
                    right = b.next();
                }
                (None, None) => return true,
                _ => return false,
            }
        }
    }
}

impl<T: Eq> Eq for Node<T> {}

/// Shows the value and whether a successor exists; never walks the chain.
impl<T: fmt::Debug> fmt::Debug for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("value", &self.value)
            .field("has_next", &self.next.is_some())
            .finish()
    }
}

impl<T> TryFrom<Option<T>> for Node<T> {
    type Error = ListError;

    fn try_from(value: Option<T>) -> Result<Self> {
        Self::try_new(value)
    }
}
