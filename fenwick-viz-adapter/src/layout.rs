use alloc::vec::Vec;

use fenwick_viz::level;

/// One slot of a [`TreeLayout`] row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LayoutCell {
    /// Tree cell `index`, spanning `span` columns and ending at column `index`.
    Node { index: usize, span: usize },
    /// An empty column.
    Gap,
}

impl LayoutCell {
    /// Number of columns this slot occupies.
    pub fn span(&self) -> usize {
        match self {
            Self::Node { span, .. } => *span,
            Self::Gap => 1,
        }
    }

    pub fn index(&self) -> Option<usize> {
        match self {
            Self::Node { index, .. } => Some(*index),
            Self::Gap => None,
        }
    }
}

/// Arranges the cells of an `n`-element tree into rows for drawing as a table.
///
/// `rows()[g]` holds every tree cell at [`fenwick_viz::level`] `g`. Such a cell summarizes `2^g`
/// values, so it spans `2^g` columns and sits right above the values it covers. All remaining
/// columns of the row are [`LayoutCell::Gap`]s, which makes every row exactly `n` columns wide.
///
/// ```
/// use fenwick_viz_adapter::{LayoutCell, TreeLayout};
///
/// let layout = TreeLayout::new(4);
/// assert_eq!(layout.rows()[2], vec![LayoutCell::Node { index: 3, span: 4 }]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TreeLayout {
    columns: usize,
    rows: Vec<Vec<LayoutCell>>,
}

impl TreeLayout {
    pub fn new(len: usize) -> Self {
        let depth = len.checked_ilog2().map_or(0, |l| l as usize + 1);
        let rows = (0..depth)
            .map(|g| {
                let span = 1usize << g;
                let mut row = Vec::new();
                for index in 0..len {
                    if level(index) as usize == g {
                        // The previous `span - 1` columns are gaps; the node absorbs them.
                        row.truncate(row.len() + 1 - span);
                        row.push(LayoutCell::Node { index, span });
                    } else {
                        row.push(LayoutCell::Gap);
                    }
                }
                row
            })
            .collect();
        Self { columns: len, rows }
    }

    /// Number of columns (the element count).
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Number of rows (the number of distinct levels).
    pub fn depth(&self) -> usize {
        self.rows.len()
    }

    pub fn rows(&self) -> &[Vec<LayoutCell>] {
        &self.rows
    }

    /// Returns `(row, first_column)` of tree cell `index`.
    pub fn position(&self, index: usize) -> Option<(usize, usize)> {
        if index >= self.columns {
            return None;
        }
        let row = level(index) as usize;
        let span = 1usize << row;
        Some((row, index + 1 - span))
    }
}
