//! Low-level primitive permutation operations on image slices.
//!
//! All functions here expect their permutation arguments to be valid permutations of the shared
//! degree given by the slice lengths. They never cause undefined behavior when that is violated,
//! but they may panic or produce meaningless results.

use smallvec::{smallvec, SmallVec};

use crate::{cycles::Cycles, exp::Exponent, point::Point, tracing_helpers::trace_log};

/// Scratch marker array, stored inline for small degrees.
type Seen = SmallVec<[bool; 256]>; // TUNE

/// Returns `true` when `images` is a permutation of `0..images.len()`.
pub fn is_perm<Pt: Point>(images: &[Pt]) -> bool {
    if images.len() > Pt::MAX_DEGREE {
        return false;
    }

    let mut seen: Seen = smallvec![false; images.len()];

    for &image in images {
        let Some(seen_image) = seen.get_mut(image.index()) else {
            return false;
        };
        if *seen_image {
            return false;
        }
        *seen_image = true;
    }

    true
}

/// Overwrites `target` with the identity permutation.
#[inline]
pub fn write_identity<Pt: Point>(target: &mut [Pt]) {
    for (index, image) in target.iter_mut().enumerate() {
        *image = Pt::from_index(index);
    }
}

/// Writes the inverse of `perm` into `target`.
///
/// Both slices must have the same length.
#[inline]
pub fn write_inverse<Pt: Point>(target: &mut [Pt], perm: &[Pt]) {
    debug_assert_eq!(target.len(), perm.len());
    for (index, &image) in perm.iter().enumerate() {
        target[image.index()] = Pt::from_index(index);
    }
}

/// Writes the product of two permutations of the same degree into `target`.
///
/// The product applies `left` first, followed by `right`.
#[inline]
pub fn write_product<Pt: Point>(target: &mut [Pt], left: &[Pt], right: &[Pt]) {
    debug_assert_eq!(target.len(), left.len());
    debug_assert_eq!(left.len(), right.len());
    for (image, &mid) in target.iter_mut().zip(left) {
        *image = right[mid.index()];
    }
}

/// Right multiplies a permutation with another permutation of the same degree in place.
#[inline]
pub fn right_multiply<Pt: Point>(target_left: &mut [Pt], right: &[Pt]) {
    debug_assert_eq!(target_left.len(), right.len());
    for image in target_left.iter_mut() {
        *image = right[image.index()];
    }
}

/// Writes the power of a permutation into `target`.
///
/// Every cycle of length `len` is rotated by the euclidean remainder of `exp` modulo `len`, so the
/// total work is linear in the degree, independent of the exponent.
pub fn write_power<Pt: Point>(target: &mut [Pt], perm: &[Pt], exp: &impl Exponent) {
    debug_assert_eq!(target.len(), perm.len());

    match exp.unsigned_abs_as_usize() {
        Some(0) => return write_identity(target),
        Some(1) if exp.is_negative() => return write_inverse(target, perm),
        Some(1) => return target.copy_from_slice(perm),
        _ => (),
    }

    trace_log!(degree = perm.len(), exp = %exp, "power by cycle rotation");

    let mut seen: Seen = smallvec![false; perm.len()];

    for start in 0..perm.len() {
        if seen[start] {
            continue;
        }
        seen[start] = true;

        let mut cycle_length = 1;
        let mut current = perm[start].index();
        while current != start {
            seen[current] = true;
            cycle_length += 1;
            current = perm[current].index();
        }

        let shift = exp.mod_usize(cycle_length);

        let mut ahead = start;
        for _ in 0..shift {
            ahead = perm[ahead].index();
        }

        for _ in 0..cycle_length {
            target[current] = Pt::from_index(ahead);
            current = perm[current].index();
            ahead = perm[ahead].index();
        }
    }
}

/// Returns `true` when the permutation is odd.
///
/// Every cycle of length `len` contributes `len - 1` transpositions, so the parity flips once for
/// every point of a cycle after its first.
pub fn is_odd<Pt: Point>(perm: &[Pt]) -> bool {
    let mut seen: Seen = smallvec![false; perm.len()];
    let mut odd = false;

    for start in 0..perm.len() {
        if seen[start] {
            continue;
        }
        seen[start] = true;

        let mut current = perm[start].index();
        while current != start {
            seen[current] = true;
            odd = !odd;
            current = perm[current].index();
        }
    }

    odd
}

/// Moves the element at position `i` of `data` to position `perm[i]`, for all `i`.
///
/// Works cycle by cycle using swaps, so `T` needs neither `Clone` nor `Default`. The slice must
/// have the permutation's degree as its length.
pub fn permute_slice<Pt: Point, T>(perm: &[Pt], data: &mut [T]) {
    debug_assert_eq!(perm.len(), data.len());
    let mut seen: Seen = smallvec![false; perm.len()];

    for start in 0..perm.len() {
        if seen[start] {
            continue;
        }
        seen[start] = true;

        // `data[start]` always holds the element that still has to move to `target`.
        let mut target = perm[start].index();
        while target != start {
            seen[target] = true;
            data.swap(start, target);
            target = perm[target].index();
        }
    }
}

/// Appends the non-trivial cycles of `perm` to `cycles`.
///
/// Each cycle starts at its smallest point and cycles are appended in order of these points.
pub fn push_cycles<Pt: Point>(perm: &[Pt], cycles: &mut Cycles<Pt>) {
    let mut seen: Seen = smallvec![false; perm.len()];

    for start in 0..perm.len() {
        if seen[start] || perm[start].index() == start {
            continue;
        }

        let start_pt = Pt::from_index(start);
        cycles.push(std::iter::successors(Some(start_pt), |&pt| {
            seen[pt.index()] = true;
            let next = perm[pt.index()];
            (next != start_pt).then_some(next)
        }));
    }
}
