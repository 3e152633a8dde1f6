//! Iterators over a [`LinkedList`].
//!
//! [`Iter`] and [`IterMut`] are non-owning cursors: they borrow the list, so
//! the list cannot be structurally modified while one is alive. [`IntoIter`]
//! consumes the list and yields values by popping the head.

use std::iter::FusedIterator;

use super::LinkedList;
use crate::error::{ListError, Result};
use crate::node::Node;

/// Forward-only, single-pass cursor over shared references.
pub struct Iter<'a, T> {
    cursor: Option<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(super) fn new(cursor: Option<&'a Node<T>>, remaining: usize) -> Self {
        Self { cursor, remaining }
    }

    /// Whether another value is available.
    pub fn has_next(&self) -> bool {
        self.cursor.is_some()
    }

    /// Advance the cursor, reporting exhaustion as an error.
    pub fn try_next(&mut self) -> Result<&'a T> {
        self.next()
            .ok_or(ListError::NoSuchElement("iterator is exhausted"))
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let node = self.cursor?;
        self.cursor = node.next();
        self.remaining -= 1;
        Some(node.value())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            cursor: self.cursor,
            remaining: self.remaining,
        }
    }
}

/// Forward-only cursor over mutable references.
pub struct IterMut<'a, T> {
    cursor: Option<&'a mut Node<T>>,
    remaining: usize,
}

impl<'a, T> IterMut<'a, T> {
    pub(super) fn new(cursor: Option<&'a mut Node<T>>, remaining: usize) -> Self {
        Self { cursor, remaining }
    }

    pub fn has_next(&self) -> bool {
        self.cursor.is_some()
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<&'a mut T> {
        let node = self.cursor.take()?;
        self.cursor = node.next.as_deref_mut();
        self.remaining -= 1;
        Some(&mut node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}

impl<T> FusedIterator for IterMut<'_, T> {}

/// Owning iterator; each step pops the head.
pub struct IntoIter<T> {
    list: LinkedList<T>,
}

impl<T> IntoIter<T> {
    pub(super) fn new(list: LinkedList<T>) -> Self {
        Self { list }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.list.remove_first().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len(), Some(self.list.len()))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}
