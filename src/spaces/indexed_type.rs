use super::{FiniteSpace, Space};
use crate::error::InvalidEnumValue;
use crate::logging::Loggable;
use rand::distributions::Distribution;
use rand::Rng;
use std::fmt;
use std::iter::FilterMap;
use std::marker::PhantomData;
use std::ops::Range;

/// An indexed set of finitely many possiblities.
///
/// Implement with `#[derive(Indexed)]`.
/// Indices are the declaration positions `0 .. SIZE`.
///
/// ```
/// use concept_types::Indexed;
///
/// #[derive(Debug, Copy, Clone, PartialEq, Indexed)]
/// #[repr(u8)]
/// enum Fruit {
///     Apple = 0,
///     Cherry = 1,
/// }
///
/// assert_eq!(Fruit::SIZE, 2);
/// assert_eq!(Fruit::Cherry.index(), Fruit::Cherry as usize);
/// assert_eq!(Fruit::from_index(2), None);
/// ```
///
/// An explicit discriminant must equal the variant position:
///
/// ```compile_fail
/// use concept_types::Indexed;
///
/// #[derive(Indexed)]
/// #[repr(u8)]
/// enum Shifted {
///     A = 1,
///     B = 2,
/// }
/// ```
///
/// and must be an integer literal:
///
/// ```compile_fail
/// use concept_types::Indexed;
///
/// const ONE: u8 = 1;
///
/// #[derive(Indexed)]
/// #[repr(u8)]
/// enum Named {
///     A = 0,
///     B = ONE,
/// }
/// ```
///
/// Variants cannot carry data:
///
/// ```compile_fail
/// use concept_types::Indexed;
///
/// #[derive(Indexed)]
/// enum Cell {
///     Empty,
///     Fruit(u8),
/// }
/// ```
pub trait Indexed: Sized {
    /// The number of possible values this type can represent.
    const SIZE: usize;

    /// Name of the type, used in error messages.
    const TYPE_NAME: &'static str;

    /// Convert into an index.
    fn index(&self) -> usize;

    /// Create from an index.
    fn from_index(index: usize) -> Option<Self>;

    /// Create from an index, failing with [`InvalidEnumValue`] if out of range.
    fn try_from_index(index: usize) -> Result<Self, InvalidEnumValue> {
        Self::from_index(index)
            .ok_or_else(|| InvalidEnumValue::ordinal(Self::TYPE_NAME, index as i128))
    }

    /// Iterate over all values in index order.
    fn variants() -> Variants<Self> {
        (0..Self::SIZE).filter_map(Self::from_index as fn(usize) -> Option<Self>)
    }
}

/// Iterator over all values of an [`Indexed`] type.
pub type Variants<T> = FilterMap<Range<usize>, fn(usize) -> Option<T>>;

/// A space defined over an indexed type.
pub struct IndexedTypeSpace<T: Indexed> {
    element_type: PhantomData<fn() -> T>,
}

impl<T: Indexed> IndexedTypeSpace<T> {
    pub const fn new() -> Self {
        Self {
            element_type: PhantomData,
        }
    }
}

impl<T: Indexed> Default for IndexedTypeSpace<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Indexed> Clone for IndexedTypeSpace<T> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<T: Indexed> Copy for IndexedTypeSpace<T> {}

impl<T: Indexed> PartialEq for IndexedTypeSpace<T> {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl<T: Indexed> Eq for IndexedTypeSpace<T> {}

impl<T: Indexed> fmt::Debug for IndexedTypeSpace<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "IndexedTypeSpace<{}>", T::TYPE_NAME)
    }
}

impl<T: Indexed> fmt::Display for IndexedTypeSpace<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "IndexedTypeSpace<{}>", T::TYPE_NAME)
    }
}

impl<T: Indexed> Space for IndexedTypeSpace<T> {
    type Element = T;

    fn contains(&self, _element: &Self::Element) -> bool {
        true
    }

    fn as_loggable(&self, element: &Self::Element) -> Loggable {
        Loggable::IndexSample {
            value: element.index(),
            size: T::SIZE,
        }
    }
}

/// Samples uniformly. Panics if `T` has no values.
impl<T: Indexed> Distribution<T> for IndexedTypeSpace<T> {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> T {
        T::from_index(rng.gen_range(0..T::SIZE)).expect("sampled index is less than SIZE")
    }
}

impl<T: Indexed> FiniteSpace for IndexedTypeSpace<T> {
    fn size(&self) -> usize {
        T::SIZE
    }

    fn to_index(&self, element: &Self::Element) -> usize {
        element.index()
    }

    fn from_index(&self, index: usize) -> Option<Self::Element> {
        T::from_index(index)
    }
}
