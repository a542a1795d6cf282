use alloc::sync::Arc;
use alloc::vec::Vec;

use crate::error::MAX_LEN;
use crate::fenwick;
use crate::{Error, FenwickOptions, OnChangeCallback, Snapshot, Trace};

/// A Fenwick tree over `i64` values that remembers which cells its last operation visited.
///
/// The tree owns two arrays of equal length: the user-visible `values`, and the aggregate `tree`
/// where cell `i` holds the sum of `values` over [`crate::covered_range`]`(i)`. Alongside them it
/// keeps the current [`Trace`] and the sum returned by the latest query.
///
/// All mutators take `&mut self` and validate their inputs before touching any state, so a
/// rejected call is a no-op. Arithmetic wraps on overflow.
///
/// ```
/// use fenwick_viz::{FenwickTree, Trace};
///
/// let mut t = FenwickTree::from_values([1, 2, 3, 4]).unwrap();
/// assert_eq!(t.tree(), &[1, 3, 3, 10]);
///
/// t.set_value(2, 5).unwrap();
/// assert_eq!(t.trace(), &Trace::Update { indices: vec![2, 3] });
/// assert_eq!(t.prefix_sum(4).unwrap(), 12);
/// ```
#[derive(Clone)]
pub struct FenwickTree {
    values: Vec<i64>,
    tree: Vec<i64>,
    trace: Trace,
    last_sum: i64,
    on_change: Option<OnChangeCallback>,

    notify_depth: usize,
    notify_pending: bool,
}

impl Default for FenwickTree {
    /// A single zero-valued element.
    fn default() -> Self {
        Self {
            values: alloc::vec![0],
            tree: alloc::vec![0],
            trace: Trace::Empty,
            last_sum: 0,
            on_change: None,
            notify_depth: 0,
            notify_pending: false,
        }
    }
}

impl FenwickTree {
    /// Creates a tree from options.
    ///
    /// Fails with [`Error::InvalidLength`] if `options.len` is zero.
    pub fn new(options: FenwickOptions) -> Result<Self, Error> {
        check_len(options.len)?;
        let values: Vec<i64> = (0..options.len).map(|i| (options.initial_value)(i)).collect();
        fdebug!(len = options.len, "FenwickTree::new");

        let mut tree = Vec::new();
        fenwick::rebuild_into(&mut tree, &values);
        Ok(Self {
            values,
            tree,
            on_change: options.on_change,
            ..Self::default()
        })
    }

    /// Creates a tree of `len` zeros.
    pub fn with_len(len: usize) -> Result<Self, Error> {
        Self::new(FenwickOptions::new(len))
    }

    /// Creates a tree holding `values`.
    ///
    /// Fails with [`Error::InvalidLength`] if `values` is empty.
    pub fn from_values(values: impl IntoIterator<Item = i64>) -> Result<Self, Error> {
        let mut t = Self::default();
        t.replace_values(values.into_iter().collect())?;
        Ok(t)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always `false` for a constructed tree; provided for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The user-visible values.
    pub fn values(&self) -> &[i64] {
        &self.values
    }

    /// The aggregate cells. Same length as [`Self::values`].
    pub fn tree(&self) -> &[i64] {
        &self.tree
    }

    pub fn get(&self, index: usize) -> Option<i64> {
        self.values.get(index).copied()
    }

    /// The trace of the most recent operation.
    pub fn trace(&self) -> &Trace {
        &self.trace
    }

    /// The sum returned by the latest [`Self::prefix_sum`], or 0 if anything has been mutated
    /// since.
    pub fn last_sum(&self) -> i64 {
        self.last_sum
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            values: self.values.clone(),
            tree: self.tree.clone(),
            trace: self.trace.clone(),
            last_sum: self.last_sum,
        }
    }

    pub fn set_on_change(
        &mut self,
        on_change: Option<impl Fn(&FenwickTree) + Send + Sync + 'static>,
    ) {
        self.on_change = on_change.map(|f| Arc::new(f) as _);
        self.notify();
    }

    /// Sets `values[index] = value` and propagates the difference up the tree.
    ///
    /// The visited cells become the current [`Trace::Update`], even when the value did not change.
    /// Resets [`Self::last_sum`] to 0.
    ///
    /// Fails with [`Error::InvalidIndex`] if `index >= len()`.
    pub fn set_value(&mut self, index: usize, value: i64) -> Result<&Trace, Error> {
        let old = self.checked_get(index)?;
        self.values[index] = value;
        self.apply_delta(index, value.wrapping_sub(old));
        Ok(&self.trace)
    }

    /// Adds `delta` to `values[index]`. Otherwise identical to [`Self::set_value`].
    pub fn add(&mut self, index: usize, delta: i64) -> Result<&Trace, Error> {
        let old = self.checked_get(index)?;
        self.values[index] = old.wrapping_add(delta);
        self.apply_delta(index, delta);
        Ok(&self.trace)
    }

    /// Returns the sum of the first `len` values and records the cells read as the current
    /// [`Trace::Query`].
    ///
    /// `len == 0` yields 0 with an empty query trace.
    ///
    /// Fails with [`Error::InvalidLength`] if `len > self.len()`.
    pub fn prefix_sum(&mut self, len: usize) -> Result<i64, Error> {
        self.check_prefix_len(len)?;
        let mut indices = Vec::new();
        let sum = fenwick::prefix_sum(&self.tree, len, |i| indices.push(i));
        ftrace!(len, sum, path = ?indices, "FenwickTree::prefix_sum");
        self.trace = Trace::Query { indices, sum };
        self.last_sum = sum;
        self.notify();
        Ok(sum)
    }

    /// Like [`Self::prefix_sum`], but leaves the trace and the last sum untouched.
    pub fn peek_prefix_sum(&self, len: usize) -> Result<i64, Error> {
        self.check_prefix_len(len)?;
        Ok(fenwick::prefix_sum(&self.tree, len, |_| {}))
    }

    /// The sum of all values.
    pub fn total(&self) -> i64 {
        fenwick::prefix_sum(&self.tree, self.tree.len(), |_| {})
    }

    /// Recomputes every aggregate cell from the current values.
    ///
    /// Clears the trace and resets [`Self::last_sum`]. Runs in `O(n log n)`.
    pub fn rebuild(&mut self) {
        fenwick::rebuild_into(&mut self.tree, &self.values);
        fdebug!(len = self.values.len(), "FenwickTree::rebuild");
        self.trace = Trace::Empty;
        self.last_sum = 0;
        self.notify();
    }

    /// Replaces all values and rebuilds the tree from them.
    ///
    /// The length follows `values`. Fails with [`Error::InvalidLength`] if `values` is empty.
    pub fn rebuild_from(&mut self, values: impl IntoIterator<Item = i64>) -> Result<(), Error> {
        self.replace_values(values.into_iter().collect())
    }

    /// Changes the number of elements and rebuilds.
    ///
    /// Growing appends zeros. Shrinking drops the trailing values for good: growing back later
    /// yields zeros, not the old values. Resizing to the current length still clears the trace
    /// and the last sum.
    ///
    /// Fails with [`Error::InvalidResizeLength`] if `new_len` is zero.
    pub fn resize(&mut self, new_len: usize) -> Result<(), Error> {
        if new_len == 0 || new_len > MAX_LEN {
            fwarn!(new_len, "FenwickTree::resize: rejected length");
            return Err(Error::InvalidResizeLength { len: new_len });
        }
        fdebug!(from = self.values.len(), to = new_len, "FenwickTree::resize");
        self.values.resize(new_len, 0);
        self.rebuild();
        Ok(())
    }

    /// Batches multiple operations into a single `on_change` notification.
    ///
    /// The callback fires once after `f` returns, and only if something inside `f` would have
    /// fired it.
    pub fn batch_update(&mut self, f: impl FnOnce(&mut Self)) {
        self.notify_depth = self.notify_depth.saturating_add(1);

        f(self);

        debug_assert!(self.notify_depth > 0, "notify_depth underflow");
        self.notify_depth = self.notify_depth.saturating_sub(1);

        if self.notify_depth == 0 && core::mem::take(&mut self.notify_pending) {
            self.notify_now();
        }
    }

    fn replace_values(&mut self, values: Vec<i64>) -> Result<(), Error> {
        check_len(values.len())?;
        self.values = values;
        self.rebuild();
        Ok(())
    }

    fn apply_delta(&mut self, index: usize, delta: i64) {
        let mut indices = Vec::new();
        fenwick::add(&mut self.tree, index, delta, |i| indices.push(i));
        ftrace!(index, delta, path = ?indices, "FenwickTree::update");
        self.trace = Trace::Update { indices };
        self.last_sum = 0;
        self.notify();
    }

    fn checked_get(&self, index: usize) -> Result<i64, Error> {
        match self.values.get(index) {
            Some(&v) => Ok(v),
            None => {
                fwarn!(index, len = self.values.len(), "FenwickTree: index out of bounds");
                Err(Error::InvalidIndex {
                    index,
                    len: self.values.len(),
                })
            }
        }
    }

    fn check_prefix_len(&self, len: usize) -> Result<(), Error> {
        if len > self.values.len() {
            fwarn!(len, max = self.values.len(), "FenwickTree: prefix length out of range");
            return Err(Error::InvalidLength {
                len,
                min: 0,
                max: self.values.len(),
            });
        }
        Ok(())
    }

    fn notify_now(&self) {
        if let Some(cb) = &self.on_change {
            cb(self);
        }
    }

    fn notify(&mut self) {
        if self.notify_depth > 0 {
            self.notify_pending = true;
            return;
        }
        self.notify_now();
    }
}

fn check_len(len: usize) -> Result<(), Error> {
    if len == 0 || len > MAX_LEN {
        fwarn!(len, "FenwickTree: rejected length");
        return Err(Error::InvalidLength {
            len,
            min: 1,
            max: MAX_LEN,
        });
    }
    Ok(())
}

impl core::fmt::Debug for FenwickTree {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FenwickTree")
            .field("values", &self.values)
            .field("tree", &self.tree)
            .field("trace", &self.trace)
            .field("last_sum", &self.last_sum)
            .field("on_change", &self.on_change.is_some())
            .finish_non_exhaustive()
    }
}
