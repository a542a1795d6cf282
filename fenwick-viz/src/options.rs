use alloc::sync::Arc;

use crate::tree::FenwickTree;

/// A callback fired after every successful state change of a [`FenwickTree`].
///
/// Presentation layers typically use it to schedule a re-render.
pub type OnChangeCallback = Arc<dyn Fn(&FenwickTree) + Send + Sync>;

/// Produces the initial value at each index when a tree is constructed.
pub type InitialValue = Arc<dyn Fn(usize) -> i64 + Send + Sync>;

/// Configuration for [`crate::FenwickTree`].
///
/// Cheap to clone: closures live behind `Arc`s.
pub struct FenwickOptions {
    /// Number of elements. Must be at least 1.
    pub len: usize,
    /// Initial value for each index (defaults to 0 everywhere).
    pub initial_value: InitialValue,
    /// Optional callback fired after each successful mutation or query.
    pub on_change: Option<OnChangeCallback>,
}

impl Clone for FenwickOptions {
    fn clone(&self) -> Self {
        Self {
            len: self.len,
            initial_value: Arc::clone(&self.initial_value),
            on_change: self.on_change.clone(),
        }
    }
}

impl Default for FenwickOptions {
    fn default() -> Self {
        Self::new(1)
    }
}

impl FenwickOptions {
    /// Creates options for `len` zero-valued elements.
    pub fn new(len: usize) -> Self {
        Self {
            len,
            initial_value: Arc::new(|_| 0),
            on_change: None,
        }
    }

    pub fn with_len(mut self, len: usize) -> Self {
        self.len = len;
        self
    }

    /// Fills every element with `fill`.
    pub fn with_fill(mut self, fill: i64) -> Self {
        self.initial_value = Arc::new(move |_| fill);
        self
    }

    /// Computes the value at each index with `f`.
    pub fn with_initial_value(mut self, f: impl Fn(usize) -> i64 + Send + Sync + 'static) -> Self {
        self.initial_value = Arc::new(f);
        self
    }

    pub fn with_on_change(
        mut self,
        on_change: Option<impl Fn(&FenwickTree) + Send + Sync + 'static>,
    ) -> Self {
        self.on_change = on_change.map(|f| Arc::new(f) as _);
        self
    }
}

impl core::fmt::Debug for FenwickOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FenwickOptions")
            .field("len", &self.len)
            .field("on_change", &self.on_change.is_some())
            .finish_non_exhaustive()
    }
}
