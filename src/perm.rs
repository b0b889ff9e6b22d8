//! Permutations.

use std::{cmp, mem, ops::Index};

use num_traits::AsPrimitive;

use crate::{
    cycles::Cycles,
    error::PermError,
    exp::Exponent,
    point::Point,
    seq,
    tracing_helpers::{debug_log, trace_log},
};

mod fmt;
mod iter;
mod raw;

pub use iter::{AllPerms, Iter, IterMoved};

/// A permutation of the points `0..degree`.
///
/// A `Perm` exclusively owns a fixed-length buffer of point images, where the image of the point
/// `i` is stored at position `i`. Cloning performs a deep copy and [`Clone::clone_from`] rebinds
/// the degree to the source's degree.
///
/// Products follow the convention used by GAP: composing `left` with `right` yields the
/// permutation that applies `left` first, followed by `right`.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Perm<Pt: Point = u32> {
    // Must be a permutation of `0..images.len()` unless constructed via `from_images_unchecked` or
    // `from_raw` from invalid data.
    images: Box<[Pt]>,
}

impl<Pt: Point> Perm<Pt> {
    /// Returns the identity permutation of a given degree.
    ///
    /// Panics if `degree` exceeds `Pt::MAX_DEGREE`.
    #[inline]
    pub fn identity(degree: usize) -> Self {
        assert!(
            degree <= Pt::MAX_DEGREE,
            "degree {degree} exceeds the maximal degree {}",
            Pt::MAX_DEGREE
        );
        Self {
            images: (0..degree).map(Pt::from_index).collect(),
        }
    }

    /// Creates a `Perm` from a sequence of point images.
    ///
    /// Returns `None` when `images` is not a permutation of `0..images.len()`.
    #[inline]
    pub fn from_images(images: impl Into<Box<[Pt]>>) -> Option<Self> {
        let images = images.into();
        raw::is_perm(&images).then(|| Self { images })
    }

    /// Creates a `Perm` from a sequence of point images without validating it.
    ///
    /// The images must be a permutation of `0..images.len()`. Violating this is not undefined
    /// behavior, but operations on the result may panic or return meaningless values.
    #[inline]
    pub fn from_images_unchecked(images: impl Into<Box<[Pt]>>) -> Self {
        let images = images.into();
        debug_assert!(raw::is_perm(&images));
        Self { images }
    }

    /// Creates a `Perm` of degree `degree` from the first `degree` values of `raw`.
    ///
    /// The values are converted with primitive `as` casts. Like
    /// [`from_images_unchecked`][Self::from_images_unchecked] this does not validate the result.
    ///
    /// Panics if `raw` has fewer than `degree` values.
    pub fn from_raw<T: AsPrimitive<Pt>>(degree: usize, raw: &[T]) -> Self {
        Self::from_images_unchecked(
            raw[..degree]
                .iter()
                .map(|&value| value.as_())
                .collect::<Box<[Pt]>>(),
        )
    }

    /// Returns the size of the set the permutation acts on.
    ///
    /// A permutation acts on the set `0..self.degree()`.
    #[inline(always)]
    pub fn degree(&self) -> usize {
        self.images.len()
    }

    /// Returns a slice containing the images of `0..self.degree()`.
    #[inline(always)]
    pub fn images(&self) -> &[Pt] {
        &self.images
    }

    #[inline(always)]
    fn images_mut(&mut self) -> &mut [Pt] {
        &mut self.images
    }

    /// Consumes the permutation, returning its images.
    #[inline]
    pub fn into_images(self) -> Vec<Pt> {
        self.images.into_vec()
    }

    /// Returns the image of the point with the given `index`.
    ///
    /// Panics when `index` is not below the permutation's degree.
    #[inline(always)]
    pub fn image(&self, index: usize) -> Pt {
        self.images[index]
    }

    /// Returns `true` when every point is fixed.
    pub fn is_identity(&self) -> bool {
        self.images
            .iter()
            .enumerate()
            .all(|(index, image)| image.index() == index)
    }

    /// Returns an iterator over all `(point, image)` pairs.
    #[inline]
    pub fn iter(&self) -> Iter<'_, Pt> {
        Iter::new(self)
    }

    /// Returns an iterator over all permutations of a given degree in lexicographical order.
    #[inline]
    pub fn all(degree: usize) -> AllPerms<Pt> {
        AllPerms::new(degree)
    }

    /// Permutes `data` in-place, moving the element at position `i` to position `self.image(i)`.
    ///
    /// Panics when the length of `data` differs from the permutation's degree. See
    /// [`try_apply`][Self::try_apply] for a non-panicking version.
    #[inline]
    pub fn apply<T>(&self, data: &mut [T]) {
        assert_eq!(
            data.len(),
            self.degree(),
            "permuted sequence must have the permutation's degree as length"
        );
        raw::permute_slice(&self.images, data);
    }

    /// Permutes `data` in-place like [`apply`][Self::apply].
    ///
    /// Returns an error and leaves `data` unchanged when its length differs from the permutation's
    /// degree.
    pub fn try_apply<T>(&self, data: &mut [T]) -> Result<(), PermError> {
        if data.len() != self.degree() {
            return Err(PermError::LengthMismatch {
                degree: self.degree(),
                len: data.len(),
            });
        }
        raw::permute_slice(&self.images, data);
        Ok(())
    }

    /// Returns the product of this permutation with another permutation.
    ///
    /// The product applies `self` first, followed by `right`, i.e. the image of `i` is
    /// `right.image(self.image(i))`.
    ///
    /// When the degrees differ, this returns an unchanged copy of `self`. Use
    /// [`try_compose`][Self::try_compose] to detect this.
    pub fn compose(&self, right: &Self) -> Self {
        self.try_compose(right).unwrap_or_else(|_err| {
            debug_log!(error = %_err, "composition ignored");
            self.clone()
        })
    }

    /// Returns the product of this permutation with another permutation of the same degree.
    ///
    /// See [`compose`][Self::compose] for the product convention.
    pub fn try_compose(&self, right: &Self) -> Result<Self, PermError> {
        self.check_same_degree(right)?;
        let mut images = self.images.clone();
        raw::write_product(&mut images, &self.images, &right.images);
        Ok(Self { images })
    }

    /// Replaces this permutation with its product with `right`, reusing its buffer.
    ///
    /// When the degrees differ, this leaves `self` unchanged. Use
    /// [`try_compose_in_place`][Self::try_compose_in_place] to detect this.
    pub fn compose_in_place(&mut self, right: &Self) {
        if let Err(_err) = self.try_compose_in_place(right) {
            debug_log!(error = %_err, "in-place composition ignored");
        }
    }

    /// Replaces this permutation with its product with `right`, which must have the same degree.
    pub fn try_compose_in_place(&mut self, right: &Self) -> Result<(), PermError> {
        self.check_same_degree(right)?;
        raw::right_multiply(self.images_mut(), &right.images);
        Ok(())
    }

    #[inline]
    fn check_same_degree(&self, right: &Self) -> Result<(), PermError> {
        if self.degree() == right.degree() {
            Ok(())
        } else {
            Err(PermError::DegreeMismatch {
                left: self.degree(),
                right: right.degree(),
            })
        }
    }

    /// Returns the inverse of this permutation.
    pub fn inverse(&self) -> Self {
        let mut images = self.images.clone();
        if self.degree() >= 2 {
            raw::write_inverse(&mut images, &self.images);
        }
        Self { images }
    }

    /// Returns this permutation raised to the power `exp`.
    ///
    /// Negative exponents raise the inverse. Runs in time linear in the degree for every exponent,
    /// by rotating each cycle of the permutation by the exponent modulo the cycle's length.
    pub fn pow<E: Exponent>(&self, exp: E) -> Self {
        let mut images = self.images.clone();
        raw::write_power(&mut images, &self.images, &exp);
        Self { images }
    }

    /// Returns `true` when this permutation is a product of an odd number of transpositions.
    #[inline]
    pub fn is_odd(&self) -> bool {
        raw::is_odd(&self.images)
    }

    /// Returns `true` when this permutation is a product of an even number of transpositions.
    #[inline]
    pub fn is_even(&self) -> bool {
        !self.is_odd()
    }

    /// Returns the sign of this permutation, `1` when even and `-1` when odd.
    #[inline]
    pub fn sign(&self) -> i8 {
        if self.is_odd() {
            -1
        } else {
            1
        }
    }

    /// Returns the number of inversions, i.e. pairs `i < j` with `self.image(i) > self.image(j)`.
    ///
    /// Runs in `O(n log n)` time using a merge sort on a copy of the images.
    pub fn inversion_count(&self) -> u64 {
        let mut images = self.images.to_vec();
        seq::sort_with_count(&mut images)
    }

    /// Returns the number of inversions.
    ///
    /// Despite the name, this does not count derangements. It is the same as
    /// [`inversion_count`][Self::inversion_count].
    #[inline]
    pub fn derangements_count(&self) -> u64 {
        self.inversion_count()
    }

    /// Returns the lexicographically next permutation of the same degree.
    ///
    /// Returns an unchanged copy for the lexicographically last permutation.
    pub fn next(&self) -> Self {
        let mut next = self.clone();
        next.advance();
        next
    }

    /// Returns the lexicographically previous permutation of the same degree.
    ///
    /// Returns an unchanged copy for the lexicographically first permutation, the identity.
    pub fn previous(&self) -> Self {
        let mut previous = self.clone();
        previous.retreat();
        previous
    }

    /// Advances to the lexicographically next permutation in-place.
    ///
    /// Returns `false` and leaves `self` unchanged when called on the lexicographically last
    /// permutation.
    pub fn advance(&mut self) -> bool {
        let advanced = seq::next_lexicographic(self.images_mut());
        if !advanced {
            trace_log!(degree = self.degree(), "already the last permutation");
        }
        advanced
    }

    /// Steps back to the lexicographically previous permutation in-place.
    ///
    /// Returns `false` and leaves `self` unchanged when called on the identity.
    pub fn retreat(&mut self) -> bool {
        let retreated = seq::prev_lexicographic(self.images_mut());
        if !retreated {
            trace_log!(degree = self.degree(), "already the first permutation");
        }
        retreated
    }

    /// Advances to the lexicographically next permutation in-place, returning the previous value.
    pub fn post_advance(&mut self) -> Self {
        let next = self.next();
        mem::replace(self, next)
    }

    /// Steps back to the lexicographically previous permutation in-place, returning the previous
    /// value.
    pub fn post_retreat(&mut self) -> Self {
        let previous = self.previous();
        mem::replace(self, previous)
    }

    /// Returns the decomposition of this permutation into disjoint cycles.
    ///
    /// Each cycle starts at its smallest point and the cycles are ordered by their starting points.
    /// Fixed points are omitted.
    pub fn cycles(&self) -> Cycles<Pt> {
        let mut cycles = Cycles::default();
        raw::push_cycles(&self.images, &mut cycles);
        cycles
    }
}

impl<Pt: Point> Default for Perm<Pt> {
    /// Returns the degree-0 identity permutation.
    #[inline]
    fn default() -> Self {
        Self::identity(0)
    }
}

impl<Pt: Point> Index<usize> for Perm<Pt> {
    type Output = Pt;

    #[inline(always)]
    fn index(&self, index: usize) -> &Pt {
        &self.images[index]
    }
}

impl<Pt: Point> AsRef<[Pt]> for Perm<Pt> {
    #[inline(always)]
    fn as_ref(&self) -> &[Pt] {
        self.images()
    }
}

impl<'a, Pt: Point> IntoIterator for &'a Perm<Pt> {
    type Item = (Pt, Pt);

    type IntoIter = Iter<'a, Pt>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Orders by degree first and lexicographically by images among permutations of the same degree.
impl<Pt: Point> Ord for Perm<Pt> {
    #[inline]
    fn cmp(&self, other: &Self) -> cmp::Ordering {
        self.degree()
            .cmp(&other.degree())
            .then_with(|| self.images().cmp(other.images()))
    }
}

impl<Pt: Point> PartialOrd for Perm<Pt> {
    #[inline(always)]
    fn partial_cmp(&self, other: &Self) -> Option<cmp::Ordering> {
        Some(self.cmp(other))
    }
}
