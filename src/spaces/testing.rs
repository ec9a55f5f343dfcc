//! Checks shared by the label enum tests
use super::{FiniteSpace, Indexed, IndexedTypeSpace, Space};
use crate::InvalidEnumValue;
use rand::prelude::*;
use std::fmt::Debug;

/// Check that `T::variants()`, `T::SIZE`, `T::try_from_index` and the space numbering agree.
pub fn check_indexed<T: Indexed + Copy + PartialEq + Debug>() {
    let space = IndexedTypeSpace::<T>::new();
    assert_eq!(space.size(), T::SIZE);
    assert_eq!(T::variants().count(), T::SIZE);

    for (i, variant) in T::variants().enumerate() {
        assert_eq!(variant.index(), i);
        assert!(space.contains(&variant));
        assert_eq!(space.to_index(&variant), i);
        assert_eq!(space.from_index(i), Some(variant));
        assert_eq!(T::try_from_index(i), Ok(variant));
    }

    assert_eq!(space.from_index(T::SIZE), None);
    assert_eq!(
        T::try_from_index(T::SIZE),
        Err(InvalidEnumValue::ordinal(T::TYPE_NAME, T::SIZE as i128))
    );
}

/// Check that uniform sampling from the space over `T` reaches every variant.
pub fn check_samples_cover_variants<T: Indexed>(num_samples: u32) {
    let space = IndexedTypeSpace::<T>::new();
    let mut rng = StdRng::seed_from_u64(1);
    let mut counts = vec![0_u32; T::SIZE];
    for _ in 0..num_samples {
        let element: T = space.sample(&mut rng);
        assert!(space.contains(&element));
        counts[element.index()] += 1;
    }
    assert!(
        counts.iter().all(|&count| count > 0),
        "unsampled {} variants: {:?}",
        T::TYPE_NAME,
        counts
    );
}
