//! 0-indexed Fenwick traversals over plain slices.
//!
//! Cell `i` of the tree stores the sum of the values in `(i - lowbit(i + 1), i]`. The routines in
//! this module are the only place that walks the tree; [`crate::FenwickTree`] layers validation,
//! trace recording and notifications on top of them.

use alloc::vec::Vec;
use core::ops::Range;

#[inline]
pub(crate) fn lowbit(i: usize) -> usize {
    i & i.wrapping_neg()
}

/// Adds `delta` to every cell on the update path starting at `index`.
///
/// `visit` is called with each touched cell in increasing order. Nothing is touched when
/// `index >= tree.len()`.
pub(crate) fn add(tree: &mut [i64], index: usize, delta: i64, mut visit: impl FnMut(usize)) {
    let n = tree.len();
    let mut cur = index;
    while cur < n {
        tree[cur] = tree[cur].wrapping_add(delta);
        visit(cur);
        cur |= cur + 1;
    }
}

/// Sums the first `len` values by walking the query path down from `len - 1`.
///
/// `visit` is called with each read cell in decreasing order. `len` must not exceed
/// `tree.len()`.
pub(crate) fn prefix_sum(tree: &[i64], len: usize, mut visit: impl FnMut(usize)) -> i64 {
    debug_assert!(
        len <= tree.len(),
        "prefix length out of range (len={len}, n={})",
        tree.len()
    );
    let mut sum = 0i64;
    // `remaining` is one past the next cell to read; `cur & (cur + 1)` drops the trailing ones.
    let mut remaining = len.min(tree.len());
    while remaining > 0 {
        let cur = remaining - 1;
        sum = sum.wrapping_add(tree[cur]);
        visit(cur);
        remaining = cur & (cur + 1);
    }
    sum
}

/// Recomputes `tree` from `values` by replaying one update per index into an all-zero tree.
///
/// This is `O(n log n)` on purpose: it yields exactly the cells a sequence of point updates from
/// zero would produce.
pub(crate) fn rebuild_into(tree: &mut Vec<i64>, values: &[i64]) {
    tree.clear();
    tree.resize(values.len(), 0);
    for (index, &value) in values.iter().enumerate() {
        add(tree, index, value, |_| {});
    }
}

/// Returns the row of cell `index` in the usual tree drawing: the number of trailing zero bits of
/// `index + 1`.
///
/// Cells at level `g` summarize `2^g` consecutive values.
#[inline]
pub fn level(index: usize) -> u32 {
    (index.wrapping_add(1)).trailing_zeros()
}

/// Returns the half-open range of value positions summarized by cell `index`.
///
/// `index` must be less than `usize::MAX`.
///
/// ```
/// assert_eq!(fenwick_viz::covered_range(0), 0..1);
/// assert_eq!(fenwick_viz::covered_range(3), 0..4);
/// assert_eq!(fenwick_viz::covered_range(5), 4..6);
/// ```
pub fn covered_range(index: usize) -> Range<usize> {
    let end = index + 1;
    end - lowbit(end)..end
}
