//! Iterators for permutations.

use super::Perm;
use crate::point::Point;

/// Iterator over all (point, image) pairs of a permutation.
///
/// This yields all pairs `(i, j)` where `i` is in the permutation's domain and `j` is the image of
/// `i` under the permutation. The yielded pairs go through `i` in increasing order.
pub struct Iter<'a, Pt: Point> {
    offset: usize,
    inner: &'a [Pt],
}

impl<'a, Pt: Point> Iter<'a, Pt> {
    #[inline]
    pub(super) fn new(inner: &'a Perm<Pt>) -> Self {
        Self {
            offset: 0,
            inner: inner.images(),
        }
    }

    /// Returns an iterator yielding only the moved points of the permutation.
    pub fn moved(self) -> IterMoved<'a, Pt> {
        IterMoved { inner: self }
    }

    #[inline]
    fn skip_front(&mut self, n: usize) {
        if let Some(rest) = self.inner.get(n..) {
            self.inner = rest;
            self.offset += n;
        } else {
            self.inner = &[];
        }
    }

    #[inline]
    fn skip_back(&mut self, n: usize) {
        if let Some(rest) = self.inner.get(..self.inner.len().wrapping_sub(n)) {
            self.inner = rest;
        } else {
            self.inner = &[];
        }
    }
}

impl<'a, Pt: Point> Iterator for Iter<'a, Pt> {
    type Item = (Pt, Pt);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let (&first, rest) = self.inner.split_first()?;
        self.inner = rest;
        let pt = Pt::from_index(self.offset);
        self.offset += 1;
        Some((pt, first))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.inner.len(), Some(self.inner.len()))
    }

    #[inline]
    fn count(self) -> usize
    where
        Self: Sized,
    {
        self.inner.len()
    }

    #[inline]
    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        self.skip_front(n);
        self.next()
    }
}

impl<'a, Pt: Point> DoubleEndedIterator for Iter<'a, Pt> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let (&last, rest) = self.inner.split_last()?;
        self.inner = rest;
        let pt = Pt::from_index(self.offset + rest.len());
        Some((pt, last))
    }

    fn nth_back(&mut self, n: usize) -> Option<Self::Item> {
        self.skip_back(n);
        self.next_back()
    }
}

impl<'a, Pt: Point> ExactSizeIterator for Iter<'a, Pt> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

/// Iterator over all non-fixed-point (point, image) pairs of a permutation.
///
/// This yields all pairs `(i, j)` with `i != j` where `i` is in the permutation's domain and `j` is
/// the image of `i` under the permutation. The yielded pairs go through `i` in increasing order.
pub struct IterMoved<'a, Pt: Point> {
    inner: Iter<'a, Pt>,
}

impl<'a, Pt: Point> Iterator for IterMoved<'a, Pt> {
    type Item = (Pt, Pt);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.by_ref().find(|(a, b)| a != b)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.inner.inner.len()))
    }
}

impl<'a, Pt: Point> DoubleEndedIterator for IterMoved<'a, Pt> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.by_ref().rfind(|(a, b)| a != b)
    }
}

/// Iterator over all permutations of a fixed degree.
///
/// Yields permutations in lexicographical order, starting with the identity. See [`Perm::all`].
pub struct AllPerms<Pt: Point> {
    pending: Option<Perm<Pt>>,
}

impl<Pt: Point> AllPerms<Pt> {
    pub(super) fn new(degree: usize) -> Self {
        Self {
            pending: Some(Perm::identity(degree)),
        }
    }
}

impl<Pt: Point> Iterator for AllPerms<Pt> {
    type Item = Perm<Pt>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.pending.take()?;
        let mut following = current.clone();
        if following.advance() {
            self.pending = Some(following);
        }
        Some(current)
    }
}

impl<Pt: Point> std::iter::FusedIterator for AllPerms<Pt> {}
