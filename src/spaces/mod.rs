//! Spaces: sets of labelled elements
mod indexed_type;
#[cfg(test)]
pub mod testing;

pub use indexed_type::{Indexed, IndexedTypeSpace, Variants};

use crate::logging::Loggable;
use rand::distributions::Distribution;

/// A mathematical space
pub trait Space {
    type Element;

    /// Check if the space contains a particular value
    fn contains(&self, value: &Self::Element) -> bool;

    /// Convert an element of the space into a loggable value.
    fn as_loggable(&self, element: &Self::Element) -> Loggable;
}

/// A space whose elements are numbered `0 .. size()`.
pub trait FiniteSpace: Space {
    fn size(&self) -> usize;

    /// Position of `element` in the numbering.
    fn to_index(&self, element: &Self::Element) -> usize;

    /// Element at `index`, or `None` if `index >= size()`.
    fn from_index(&self, index: usize) -> Option<Self::Element>;
}

/// A space from which elements can be sampled.
pub trait SampleSpace: Space + Distribution<<Self as Space>::Element> {}

impl<S> SampleSpace for S
where
    S: Space + Distribution<<S as Space>::Element>,
{
}
