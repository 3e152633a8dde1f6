//! Singly-linked list container.
//!
//! The list owns its head [`Node`], and every node owns its successor, so
//! dropping the head releases the whole chain. No tail pointer is kept:
//! appending walks the chain.
//!
//! Index-addressed operations use 0-based indices. Every fallible operation
//! validates before touching the chain, so an `Err` means the list is
//! unchanged.

mod iter;
mod serde_impl;

pub use iter::{IntoIter, Iter, IterMut};

use std::fmt;

use tracing::{debug, trace};

use crate::error::{ListError, Result};
use crate::node::{Link, Node};

/// Generic singly-linked list.
pub struct LinkedList<T> {
    head: Link<T>,
    len: usize,
}

impl<T> LinkedList<T> {
    /// Create an empty list.
    pub const fn new() -> Self {
        Self { head: None, len: 0 }
    }

    /// Build a list from values that may be absent.
    ///
    /// Fails with [`ListError::InvalidArgument`] at the first `None`; no
    /// list is produced in that case.
    pub fn try_from_options<I>(values: I) -> Result<Self>
    where
        I: IntoIterator<Item = Option<T>>,
    {
        values
            .into_iter()
            .map(|value| value.ok_or(ListError::InvalidArgument("element is absent")))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// First node of the chain, if any.
    pub fn head(&self) -> Option<&Node<T>> {
        self.head.as_deref()
    }

    /// First value, if any.
    pub fn first(&self) -> Option<&T> {
        self.head().map(Node::value)
    }

    /// Append `value` at the tail.
    pub fn add(&mut self, value: T) {
        *self.tail_link_mut() = Some(Box::new(Node::new(value)));
        self.len += 1;
        trace!(index = self.len - 1, len = self.len, "appended element");
    }

    /// Insert `value` before position `index`.
    ///
    /// Valid indices are `0..=len`; `len` appends.
    pub fn insert(&mut self, index: usize, value: T) -> Result<()> {
        if index > self.len {
            return Err(ListError::out_of_bounds(index, self.len));
        }
        let len = self.len;
        let slot = self
            .link_mut(index)
            .ok_or(ListError::out_of_bounds(index, len))?;
        let next = slot.take();
        *slot = Some(Box::new(Node::with_next(value, next)));
        self.len += 1;
        trace!(index, len = self.len, "inserted element");
        Ok(())
    }

    /// Remove and return the head element.
    pub fn remove_first(&mut self) -> Result<T> {
        let mut node = self
            .head
            .take()
            .ok_or(ListError::NoSuchElement("list is empty"))?;
        self.head = node.take_next();
        self.len -= 1;
        trace!(index = 0, len = self.len, "removed element");
        Ok(node.into_value())
    }

    /// Remove and return the element at `index`.
    ///
    /// An empty list reports [`ListError::NoSuchElement`] before any index
    /// check.
    pub fn remove_at(&mut self, index: usize) -> Result<T> {
        if self.is_empty() {
            return Err(ListError::NoSuchElement("list is empty"));
        }
        if index >= self.len {
            return Err(ListError::out_of_bounds(index, self.len));
        }
        let len = self.len;
        let slot = self
            .link_mut(index)
            .ok_or(ListError::out_of_bounds(index, len))?;
        let mut node = slot.take().ok_or(ListError::out_of_bounds(index, len))?;
        *slot = node.take_next();
        self.len -= 1;
        trace!(index, len = self.len, "removed element");
        Ok(node.into_value())
    }

    /// Replace the element at `index`, returning the previous value.
    pub fn set(&mut self, index: usize, value: T) -> Result<T> {
        let current = self.get_mut(index)?;
        Ok(std::mem::replace(current, value))
    }

    pub fn get(&self, index: usize) -> Result<&T> {
        if index >= self.len {
            return Err(ListError::out_of_bounds(index, self.len));
        }
        self.iter()
            .nth(index)
            .ok_or(ListError::out_of_bounds(index, self.len))
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        let len = self.len;
        if index >= len {
            return Err(ListError::out_of_bounds(index, len));
        }
        self.iter_mut()
            .nth(index)
            .ok_or(ListError::out_of_bounds(index, len))
    }

    /// Release every node and reset the length.
    pub fn clear(&mut self) {
        let released = self.len;
        self.head = None;
        self.len = 0;
        debug!(released, "cleared list");
    }

    /// Borrowing, forward-only cursor over the values.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.head.as_deref(), self.len)
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self.head.as_deref_mut(), self.len)
    }

    /// The empty link after the last node.
    fn tail_link_mut(&mut self) -> &mut Link<T> {
        let mut cursor = &mut self.head;
        while let Some(node) = cursor {
            cursor = &mut node.next;
        }
        cursor
    }

    /// Owning link slot at `index`: `head` for 0, otherwise the `next` field
    /// of node `index - 1`. Returns `None` if the chain is shorter than that.
    fn link_mut(&mut self, index: usize) -> Option<&mut Link<T>> {
        let mut cursor = &mut self.head;
        for _ in 0..index {
            cursor = &mut cursor.as_mut()?.next;
        }
        Some(cursor)
    }
}

impl<T: PartialEq> LinkedList<T> {
    /// Whether any element equals `value`.
    pub fn contains(&self, value: &T) -> bool {
        self.iter().any(|candidate| candidate == value)
    }

    /// Remove the first element equal to `value`, scanning head to tail.
    pub fn remove_value(&mut self, value: &T) -> Result<T> {
        if self.is_empty() {
            return Err(ListError::NoSuchElement("list is empty"));
        }
        let index = self
            .iter()
            .position(|candidate| candidate == value)
            .ok_or(ListError::NoSuchElement("value not found in list"))?;
        self.remove_at(index)
    }
}

impl<T: Clone> LinkedList<T> {
    /// Snapshot of all values in list order.
    pub fn to_array(&self) -> Box<[T]> {
        self.iter().cloned().collect()
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", value)?;
        }
        f.write_str("]")
    }
}

impl<T> Extend<T> for LinkedList<T> {
    /// Appends with a single walk to the tail.
    fn extend<I: IntoIterator<Item = T>>(&mut self, values: I) {
        let mut tail = self.tail_link_mut();
        let mut added = 0;
        for value in values {
            let node = tail.insert(Box::new(Node::new(value)));
            tail = &mut node.next;
            added += 1;
        }
        self.len += added;
    }
}

impl<'a, T: Copy + 'a> Extend<&'a T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, values: I) {
        self.extend(values.into_iter().copied());
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(values: I) -> Self {
        let mut list = Self::new();
        list.extend(values);
        list
    }
}

impl<T> From<Vec<T>> for LinkedList<T> {
    fn from(values: Vec<T>) -> Self {
        values.into_iter().collect()
    }
}

impl<T, const N: usize> From<[T; N]> for LinkedList<T> {
    fn from(values: [T; N]) -> Self {
        values.into_iter().collect()
    }
}

impl<T> IntoIterator for LinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter::new(self)
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut LinkedList<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}
