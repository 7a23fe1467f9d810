pub use container::{ElementNotFound, OrderedContainer};
pub use element::DisplayElement;
pub use traversal::{Cursor, Order, Snapshot, View};

pub mod container;
pub mod element;
pub mod traversal;
