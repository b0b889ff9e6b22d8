//! Generic sequence primitives.
//!
//! These operate on slices of any ordered element type and do not depend on [`Perm`]. The
//! permutation operations in [`crate::perm`] are built on top of them.
//!
//! [`Perm`]: crate::perm::Perm

/// Swaps the elements at positions `a` and `b`.
///
/// Swapping a position with itself leaves the slice unchanged. Panics when either position is out
/// of bounds.
#[inline]
pub fn swap<T>(data: &mut [T], a: usize, b: usize) {
    if a != b {
        data.swap(a, b);
    }
}

/// Reverses the order of the elements in `data`.
#[inline]
pub fn reverse<T>(data: &mut [T]) {
    let mut start = 0;
    let mut stop = data.len();
    while start + 1 < stop {
        stop -= 1;
        swap(data, start, stop);
        start += 1;
    }
}

/// Stably merges two sorted runs into `out` while counting cross inversions.
///
/// Returns the number of pairs `(x, y)` with `x` from `left`, `y` from `right` and `x > y`. Equal
/// elements do not count as inversions and ties are resolved by taking from `left` first.
///
/// Panics when `out.len()` differs from `left.len() + right.len()`.
pub fn merge_with_count<T: Ord + Clone>(left: &[T], right: &[T], out: &mut [T]) -> u64 {
    assert_eq!(
        out.len(),
        left.len() + right.len(),
        "merge output length must match the total input length"
    );

    let mut count = 0;
    let (mut i, mut j) = (0, 0);

    for slot in out.iter_mut() {
        let take_left = match (left.get(i), right.get(j)) {
            (Some(x), Some(y)) => x <= y,
            (Some(_), None) => true,
            (None, _) => false,
        };

        if take_left {
            slot.clone_from(&left[i]);
            i += 1;
        } else {
            // every element still pending in `left` is greater than this one
            count += (left.len() - i) as u64;
            slot.clone_from(&right[j]);
            j += 1;
        }
    }

    count
}

/// Sorts `data` and returns its number of inversions.
///
/// An inversion is a pair of positions `i < j` with `data[i] > data[j]`. This is a merge sort using
/// a single scratch buffer of the same length as `data`, running in `O(n log n)` time.
pub fn sort_with_count<T: Ord + Clone>(data: &mut [T]) -> u64 {
    if data.len() < 2 {
        return 0;
    }
    let mut scratch = data.to_vec();
    sort_with_count_impl(data, &mut scratch)
}

fn sort_with_count_impl<T: Ord + Clone>(data: &mut [T], scratch: &mut [T]) -> u64 {
    let len = data.len();
    if len < 2 {
        return 0;
    }

    let middle = len / 2;
    let scratch = &mut scratch[..len];

    let mut count = {
        let (left, right) = data.split_at_mut(middle);
        let (left_scratch, right_scratch) = scratch.split_at_mut(middle);
        sort_with_count_impl(left, left_scratch) + sort_with_count_impl(right, right_scratch)
    };

    let (left, right) = data.split_at(middle);
    count += merge_with_count(left, right, scratch);
    data.clone_from_slice(scratch);

    count
}

/// Rearranges `data` into the lexicographically next arrangement of its elements.
///
/// Repeated elements are supported, each distinct arrangement is produced once. Returns `false`
/// and leaves `data` unchanged when it already is the last arrangement, i.e. sorted in
/// non-increasing order.
pub fn next_lexicographic<T: Ord>(data: &mut [T]) -> bool {
    step_lexicographic(data, |a, b| a < b)
}

/// Rearranges `data` into the lexicographically previous arrangement of its elements.
///
/// Repeated elements are supported, each distinct arrangement is produced once. Returns `false`
/// and leaves `data` unchanged when it already is the first arrangement, i.e. sorted in
/// non-decreasing order.
pub fn prev_lexicographic<T: Ord>(data: &mut [T]) -> bool {
    step_lexicographic(data, |a, b| a > b)
}

/// Shared implementation of [`next_lexicographic`] and [`prev_lexicographic`].
///
/// `before` is the strict order in which the step advances: `<` steps forward, `>` backward.
#[inline]
fn step_lexicographic<T: Ord>(data: &mut [T], before: impl Fn(&T, &T) -> bool) -> bool {
    let len = data.len();
    if len < 2 {
        return false;
    }

    let Some(pivot) = (0..len - 1).rev().find(|&i| before(&data[i], &data[i + 1])) else {
        return false;
    };

    // The suffix after `pivot` is monotone against `before`, so the elements that can replace the
    // pivot form a prefix of it. The last of them is the closest one.
    let (head, suffix) = data.split_at(pivot + 1);
    let pivot_value = &head[pivot];
    let candidates = suffix.partition_point(|x| before(pivot_value, x));
    debug_assert!(candidates > 0);

    let successor = pivot + candidates;
    swap(data, pivot, successor);
    reverse(&mut data[pivot + 1..]);

    true
}
