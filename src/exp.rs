//! Integer types usable as exponents of [`Perm::pow`][`crate::perm::Perm::pow`].
use std::fmt;

/// Primitive integers a permutation can be raised to.
///
/// Only the residue of the exponent modulo each cycle length matters, so implementations never
/// need more than a magnitude check and a euclidean remainder.
pub trait Exponent: fmt::Display + fmt::Debug + Copy {
    /// Returns the absolute value, or `None` if it does not fit a `usize`.
    fn unsigned_abs_as_usize(&self) -> Option<usize>;

    /// Returns `true` when the exponent is strictly negative.
    fn is_negative(&self) -> bool;

    /// Returns the exponent reduced into `0..n`, rounding towards negative infinity.
    ///
    /// Panics when `n` is zero.
    fn mod_usize(&self, n: usize) -> usize;
}

macro_rules! impl_unsigned_exponent {
    ($($t:ty),*) => {
        $(
            impl Exponent for $t {
                #[inline]
                fn unsigned_abs_as_usize(&self) -> Option<usize> {
                    usize::try_from(*self).ok()
                }

                #[inline]
                fn is_negative(&self) -> bool {
                    false
                }

                #[inline]
                fn mod_usize(&self, n: usize) -> usize {
                    (*self as u128 % n as u128) as usize
                }
            }
        )*
    };
}

macro_rules! impl_signed_exponent {
    ($($t:ty),*) => {
        $(
            impl Exponent for $t {
                #[inline]
                fn unsigned_abs_as_usize(&self) -> Option<usize> {
                    usize::try_from(self.unsigned_abs()).ok()
                }

                #[inline]
                fn is_negative(&self) -> bool {
                    *self < 0
                }

                #[inline]
                fn mod_usize(&self, n: usize) -> usize {
                    // every usize fits an i128, and so does every supported exponent
                    (*self as i128).rem_euclid(n as i128) as usize
                }
            }
        )*
    };
}

impl_unsigned_exponent!(u8, u16, u32, u64, u128, usize);
impl_signed_exponent!(i8, i16, i32, i64, i128, isize);
