//! Traversal orders over a container's stored sequence.
//!
//! A traversal is never a live cursor into the container. Beginning one copies the stored elements,
//! reorders them with one of the functions below and freezes the result into a [`View`], stamped
//! with the [`Snapshot`] of the container state it came from.

pub use order::{arrange, ascending, descending, middle_out, natural, reverse, side_cross, Order};
pub use snapshot::Snapshot;
pub(crate) use snapshot::next_origin;
pub use view::{Cursor, View};

mod order;
mod snapshot;
mod view;

#[cfg(test)]
pub(crate) mod test_stand;
