use std::fmt::{self, Display, Formatter};

use paste::paste;

use super::ElementNotFound;
use crate::element::{fmt_sequence, DisplayElement};
use crate::traversal::{self, next_origin, Cursor, Order, Snapshot, View};

/// A sequence of values kept in insertion order, walkable in six different orders.
///
/// Duplicates are allowed. Traversals are computed on demand from the stored sequence and never
/// observe later mutations, see [`View`].
#[derive(Debug)]
pub struct OrderedContainer<T = i32> {
    elements: Vec<T>,
    origin: u64,
    generation: u64,
}

// Generates a `begin_*`/`end_*` cursor pair for each traversal order.
macro_rules! impl_traversal_accessors {
    ($(($suffix:ident, $order:expr, $arrange:path),)+) => {
        paste! {
            $(
                #[doc = concat!("Cursor at the start of the `", stringify!($suffix), "` traversal.")]
                pub fn [<begin_ $suffix>](&self) -> Cursor<T> {
                    self.view_with($order, $arrange).begin()
                }

                #[doc = concat!("Cursor past the end of the `", stringify!($suffix), "` traversal.")]
                pub fn [<end_ $suffix>](&self) -> Cursor<T> {
                    self.view_with($order, $arrange).end()
                }
            )+
        }
    };
}

impl<T> OrderedContainer<T> {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            elements: Vec::with_capacity(capacity),
            origin: next_origin(),
            generation: 0,
        }
    }

    /// Number of stored elements, duplicates included.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Appends `value` to the end of the stored order.
    pub fn add(&mut self, value: T) {
        self.elements.push(value);
        self.touch();
    }

    pub fn clear(&mut self) {
        if !self.elements.is_empty() {
            self.elements.clear();
            self.touch();
        }
    }

    /// Stored (insertion) order.
    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elements.iter()
    }

    pub fn into_vec(self) -> Vec<T> {
        self.elements
    }

    /// Identity of the current state, shared by every traversal begun before the next mutation.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::new(self.origin, self.generation)
    }

    fn touch(&mut self) {
        self.generation = self.generation.wrapping_add(1);
    }
}

impl<T: PartialEq> OrderedContainer<T> {
    pub fn contains(&self, value: &T) -> bool {
        self.elements.contains(value)
    }

    pub fn count(&self, value: &T) -> usize {
        self.elements.iter().filter(|x| *x == value).count()
    }

    /// Removes every element equal to `value` and returns how many were dropped. Fails without
    /// touching the container if there is none.
    pub fn remove(&mut self, value: &T) -> Result<usize, ElementNotFound> {
        if !self.contains(value) {
            log::debug!(
                "Requested value is absent from the container ({} elements, snapshot {})",
                self.len(),
                self.snapshot()
            );
            return Err(ElementNotFound);
        }

        let before = self.elements.len();
        self.elements.retain(|x| x != value);
        self.touch();

        debug_assert!(self.elements.len() < before);
        Ok(before - self.elements.len())
    }
}

impl<T: Clone> OrderedContainer<T> {
    fn view_with(&self, order: Order, arrange: impl FnOnce(&[T]) -> Vec<T>) -> View<T> {
        let items = arrange(&self.elements);
        debug_assert_eq!(items.len(), self.elements.len());

        log::trace!(
            "Materialized {order} traversal over {} elements (snapshot {})",
            items.len(),
            self.snapshot()
        );
        View::new(order, self.snapshot(), items)
    }

    impl_traversal_accessors!(
        (order, Order::Natural, traversal::natural),
        (reverse_order, Order::Reverse, traversal::reverse),
        (middle_out_order, Order::MiddleOut, traversal::middle_out),
    );
}

impl<T: Ord + Clone> OrderedContainer<T> {
    /// Materializes the traversal in the given order from the current stored sequence.
    pub fn traverse(&self, order: Order) -> View<T> {
        self.view_with(order, |items| traversal::arrange(order, items))
    }

    impl_traversal_accessors!(
        (ascending_order, Order::Ascending, traversal::ascending),
        (descending_order, Order::Descending, traversal::descending),
        (side_cross_order, Order::SideCross, traversal::side_cross),
    );
}

impl<T> Default for OrderedContainer<T> {
    fn default() -> Self {
        Self::new()
    }
}

// A clone is a separate container: it gets its own storage and its own origin.
impl<T: Clone> Clone for OrderedContainer<T> {
    fn clone(&self) -> Self {
        Self {
            elements: self.elements.clone(),
            origin: next_origin(),
            generation: 0,
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.elements.clone_from(&source.elements);
        self.touch();
    }
}

impl<T: PartialEq> PartialEq for OrderedContainer<T> {
    fn eq(&self, other: &Self) -> bool {
        self.elements == other.elements
    }
}

impl<T: Eq> Eq for OrderedContainer<T> {}

impl<T: DisplayElement> Display for OrderedContainer<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        fmt_sequence(self.elements.iter(), f)
    }
}

impl<T> From<Vec<T>> for OrderedContainer<T> {
    fn from(elements: Vec<T>) -> Self {
        Self {
            elements,
            origin: next_origin(),
            generation: 0,
        }
    }
}

impl<T> FromIterator<T> for OrderedContainer<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<T>>())
    }
}

impl<T> Extend<T> for OrderedContainer<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let before = self.elements.len();
        self.elements.extend(iter);
        if self.elements.len() != before {
            self.touch();
        }
    }
}

impl<T> IntoIterator for OrderedContainer<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a OrderedContainer<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}
