//! Disjoint cycle decompositions.
use std::{fmt, iter::FusedIterator, ops::Range};

use crate::point::Point;

/// A list of disjoint cycles, stored as consecutive points in a single buffer.
///
/// Returned by [`Perm::cycles`][`crate::perm::Perm::cycles`]. Cycles of length one are never
/// stored.
#[derive(Default, Clone, PartialEq, Eq, Hash)]
pub struct Cycles<Pt: Point> {
    points: Vec<Pt>,
    // offset into `points` of each cycle's first point
    starts: Vec<usize>,
}

impl<Pt: Point> Cycles<Pt> {
    /// Appends a cycle, dropping it again when it turns out to be a fixed point or empty.
    pub(crate) fn push(&mut self, cycle: impl IntoIterator<Item = Pt>) {
        let start = self.points.len();
        self.points.extend(cycle);
        if self.points.len() - start < 2 {
            self.points.truncate(start);
        } else {
            self.starts.push(start);
        }
    }

    fn span(&self, index: usize) -> Range<usize> {
        let end = self
            .starts
            .get(index + 1)
            .copied()
            .unwrap_or(self.points.len());
        self.starts[index]..end
    }

    /// Returns the cycle at position `index`, if there is one.
    pub fn get(&self, index: usize) -> Option<&[Pt]> {
        (index < self.len()).then(|| &self.points[self.span(index)])
    }

    /// Returns an iterator over the cycles.
    #[inline]
    pub fn iter(&self) -> Iter<'_, Pt> {
        Iter {
            cycles: self,
            front: 0,
            back: self.len(),
        }
    }

    /// Returns the number of cycles.
    #[inline]
    pub fn len(&self) -> usize {
        self.starts.len()
    }

    /// Returns `true` when there are no cycles, i.e. for the identity.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.starts.is_empty()
    }
}

impl<'a, Pt: Point> IntoIterator for &'a Cycles<Pt> {
    type Item = &'a [Pt];

    type IntoIter = Iter<'a, Pt>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the cycles of a [`Cycles`] value.
pub struct Iter<'a, Pt: Point> {
    cycles: &'a Cycles<Pt>,
    front: usize,
    back: usize,
}

impl<'a, Pt: Point> Iterator for Iter<'a, Pt> {
    type Item = &'a [Pt];

    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        let cycle = self.cycles.get(self.front);
        self.front += 1;
        cycle
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.back - self.front;
        (len, Some(len))
    }
}

impl<'a, Pt: Point> DoubleEndedIterator for Iter<'a, Pt> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        self.cycles.get(self.back)
    }
}

impl<'a, Pt: Point> ExactSizeIterator for Iter<'a, Pt> {}

impl<'a, Pt: Point> FusedIterator for Iter<'a, Pt> {}

impl<Pt: Point> fmt::Debug for Cycles<Pt> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
