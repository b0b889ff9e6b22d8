//! Points permutations act on.
use std::{fmt, hash::Hash};

use num_traits::{PrimInt, Unsigned};

pub(crate) mod sealed {
    /// Restricts [`Point`][`super::Point`] to the implementations in this file.
    pub trait Sealed {}
}

#[cfg(not(any(target_pointer_width = "64", target_pointer_width = "32")))]
compile_error!(
    r#"The symperm crate only supports target_pointer_width = "32" and target_pointer_width = "64""#
);

/// Unsigned primitive integer types used to represent the images of a permutation.
///
/// This trait is sealed, it is implemented for `u8`, `u16`, `u32` and, on 64-bit targets, `u64`.
pub trait Point:
    PrimInt
    + Unsigned
    + Default
    + Hash
    + fmt::Display
    + fmt::Debug
    + sealed::Sealed
    + 'static
{
    /// Maximal degree of a permutation using this type as point representation.
    const MAX_DEGREE: usize;

    /// Returns the index of the point.
    ///
    /// The index is equal to the point but always a `usize`.
    fn index(self) -> usize;

    /// Returns the point with a given index.
    ///
    /// The index is equal to the point but always a `usize`. If the passed index is not below
    /// [`Self::MAX_DEGREE`] the result is truncated.
    fn from_index(index: usize) -> Self;
}

macro_rules! impl_pt {
    ($($t:ty),*) => {
        $(
            impl sealed::Sealed for $t {}

            impl Point for $t {
                const MAX_DEGREE: usize = {
                    if (<$t>::MAX as usize) < (isize::MAX as usize) / std::mem::size_of::<$t>() {
                        (<$t>::MAX as usize).wrapping_add(1)
                    } else {
                        ((isize::MAX as usize) / std::mem::size_of::<$t>())
                    }
                };

                #[inline(always)]
                fn index(self) -> usize {
                    self as usize
                }

                #[inline(always)]
                fn from_index(index: usize) -> Self {
                    index as $t
                }
            }
        )*
    };
}

impl_pt!(u8, u16, u32);

#[cfg(target_pointer_width = "64")]
impl_pt!(u64);
