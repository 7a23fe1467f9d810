use derive_more::{Display, Error};

/// Raised by [`OrderedContainer::remove`](super::OrderedContainer::remove) when the container holds
/// no element equal to the requested value. The container is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Error)]
#[display("element was not found in the container")]
pub struct ElementNotFound;
