pub use container::OrderedContainer;
pub use error::ElementNotFound;

#[allow(clippy::module_inception)]
mod container;
mod error;
