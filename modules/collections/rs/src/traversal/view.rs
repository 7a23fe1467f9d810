use std::fmt::{self, Display, Formatter};
use std::iter::FusedIterator;
use std::sync::Arc;

use derive_getters::Dissolve;

use super::{Order, Snapshot};
use crate::element::{fmt_sequence, DisplayElement};

/// An immutable, materialized traversal of a container.
///
/// The view owns its own copy of the elements, so mutating the source container afterwards has no
/// effect on it. Cloning a view, or creating cursors over it, shares that copy.
#[derive(Debug, Dissolve)]
pub struct View<T> {
    order: Order,
    snapshot: Snapshot,
    items: Arc<[T]>,
}

impl<T> View<T> {
    pub(crate) fn new(order: Order, snapshot: Snapshot, items: Vec<T>) -> Self {
        Self {
            order,
            snapshot,
            items: items.into(),
        }
    }

    pub fn order(&self) -> Order {
        self.order
    }

    pub fn snapshot(&self) -> Snapshot {
        self.snapshot
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Cursor positioned at the first element (or at the end for an empty view).
    pub fn begin(&self) -> Cursor<T> {
        Cursor {
            view: self.clone(),
            position: 0,
        }
    }

    /// Cursor positioned one past the last element.
    pub fn end(&self) -> Cursor<T> {
        Cursor {
            view: self.clone(),
            position: self.len(),
        }
    }

    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.items.to_vec()
    }
}

// Manual impl: sharing the elements doesn't require `T: Clone`.
impl<T> Clone for View<T> {
    fn clone(&self) -> Self {
        Self {
            order: self.order,
            snapshot: self.snapshot,
            items: Arc::clone(&self.items),
        }
    }
}

impl<T: DisplayElement> Display for View<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        fmt_sequence(self.items.iter(), f)
    }
}

impl<'a, T> IntoIterator for &'a View<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Forward-only, single-pass position within a [`View`].
///
/// Two cursors are equal when they walk the same kind of traversal over the same container
/// snapshot and stand at the same position. Cursors built from different containers, or from the
/// same container before and after a mutation, never compare equal.
#[derive(Debug)]
pub struct Cursor<T> {
    view: View<T>,
    position: usize,
}

impl<T> Cursor<T> {
    pub fn view(&self) -> &View<T> {
        &self.view
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn is_end(&self) -> bool {
        self.position >= self.view.len()
    }

    /// Element under the cursor, `None` once the traversal is exhausted.
    pub fn current(&self) -> Option<&T> {
        self.view.items.get(self.position)
    }

    /// Moves to the next element. Advancing an exhausted cursor is a logic error; it panics in
    /// debug builds and leaves the cursor at the end otherwise.
    pub fn advance(&mut self) -> &mut Self {
        debug_assert!(!self.is_end(), "cursor advanced past the end of its traversal");
        if !self.is_end() {
            self.position += 1;
        }
        self
    }
}

impl<T> Clone for Cursor<T> {
    fn clone(&self) -> Self {
        Self {
            view: self.view.clone(),
            position: self.position,
        }
    }
}

impl<T> PartialEq for Cursor<T> {
    fn eq(&self, other: &Self) -> bool {
        self.view.snapshot == other.view.snapshot
            && self.view.order == other.view.order
            && self.position == other.position
    }
}

impl<T> Eq for Cursor<T> {}

impl<T: Clone> Iterator for Cursor<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.current()?.clone();
        self.position += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.view.len().saturating_sub(self.position);
        (left, Some(left))
    }
}

impl<T: Clone> ExactSizeIterator for Cursor<T> {}

impl<T: Clone> FusedIterator for Cursor<T> {}
