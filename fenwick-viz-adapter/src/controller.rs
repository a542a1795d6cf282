use alloc::string::ToString;
use alloc::vec::Vec;

use fenwick_viz::{FenwickOptions, FenwickTree};

use crate::{Highlight, InputError, TreeLayout};

/// Default upper bound on the element count accepted by [`Controller::resize`].
pub const DEFAULT_MAX_LEN: usize = 1 << 16;

/// A framework-neutral controller that wraps a [`FenwickTree`] and implements the calls a
/// visualization page makes.
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `on_length_input` / `on_value_input` with raw text from input fields
/// - `on_sum_button(index)` when the button under element `index` is pressed
///
/// and then render from `tree()`, `layout()` and `highlight(i)`.
#[derive(Clone, Debug)]
pub struct Controller {
    tree: FenwickTree,
    max_len: usize,
}

impl Default for Controller {
    fn default() -> Self {
        Self::from_tree(FenwickTree::default())
    }
}

impl Controller {
    pub fn new(options: FenwickOptions) -> Result<Self, InputError> {
        Ok(Self::from_tree(FenwickTree::new(options)?))
    }

    pub fn from_tree(tree: FenwickTree) -> Self {
        Self {
            tree,
            max_len: DEFAULT_MAX_LEN,
        }
    }

    /// Caps the element count accepted by [`Self::resize`]. Existing elements are kept.
    pub fn with_max_len(mut self, max_len: usize) -> Self {
        self.max_len = max_len.max(1);
        self
    }

    pub fn max_len(&self) -> usize {
        self.max_len
    }

    pub fn tree(&self) -> &FenwickTree {
        &self.tree
    }

    pub fn tree_mut(&mut self) -> &mut FenwickTree {
        &mut self.tree
    }

    pub fn into_tree(self) -> FenwickTree {
        self.tree
    }

    pub fn len(&self) -> usize {
        self.tree.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    pub fn last_sum(&self) -> i64 {
        self.tree.last_sum()
    }

    /// Changes the element count. See [`FenwickTree::resize`].
    pub fn resize(&mut self, new_len: usize) -> Result<(), InputError> {
        if new_len > self.max_len {
            adebug!(new_len, max = self.max_len, "Controller::resize: over limit");
            return Err(InputError::LengthTooLarge {
                len: new_len,
                max: self.max_len,
            });
        }
        self.tree.resize(new_len)?;
        Ok(())
    }

    /// Sets the value at `index`. See [`FenwickTree::set_value`].
    pub fn set_value(&mut self, index: usize, value: i64) -> Result<(), InputError> {
        self.tree.set_value(index, value)?;
        Ok(())
    }

    /// Sums the first `len` values. See [`FenwickTree::prefix_sum`].
    pub fn query_sum(&mut self, len: usize) -> Result<i64, InputError> {
        Ok(self.tree.prefix_sum(len)?)
    }

    /// Handles an edit of the length field.
    ///
    /// Only positive integers are applied; anything else is rejected and leaves the tree as is.
    pub fn on_length_input(&mut self, text: &str) -> Result<(), InputError> {
        let len = parse_integer(text)?;
        if len <= 0 {
            adebug!(len, "Controller::on_length_input: non-positive");
            return Err(InputError::NonPositiveLength { len });
        }
        self.resize(usize::try_from(len).unwrap_or(usize::MAX))
    }

    /// Handles an edit of the value field of element `index`.
    ///
    /// Text that is not an integer is rejected and leaves the tree as is.
    pub fn on_value_input(&mut self, index: usize, text: &str) -> Result<(), InputError> {
        let value = parse_integer(text)?;
        self.set_value(index, value)
    }

    /// Handles the sum button under element `index`: sums elements `0..=index`.
    pub fn on_sum_button(&mut self, index: usize) -> Result<i64, InputError> {
        self.query_sum(index.saturating_add(1))
    }

    /// How tree cell `index` should be drawn.
    pub fn highlight(&self, index: usize) -> Highlight {
        Highlight::of(self.tree.trace(), index)
    }

    /// Highlights for every tree cell, in index order.
    pub fn highlights(&self) -> Vec<Highlight> {
        (0..self.tree.len()).map(|i| self.highlight(i)).collect()
    }

    pub fn layout(&self) -> TreeLayout {
        TreeLayout::new(self.tree.len())
    }
}

fn parse_integer(text: &str) -> Result<i64, InputError> {
    text.trim().parse::<i64>().map_err(|_| {
        adebug!(text, "Controller: rejected non-integer input");
        InputError::NotAnInteger {
            input: text.to_string(),
        }
    })
}
