use alloc::vec::Vec;

/// Which operation produced a [`Trace`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TraceKind {
    Update,
    Query,
}

/// The tree cells visited by the most recent operation.
///
/// Only one trace is current at a time. Every update or query replaces it wholesale, and
/// rebuilding or resizing resets it to [`Trace::Empty`], so an update path and a query path can
/// never be highlighted together.
///
/// Indices are stored in visiting order: ascending for updates, descending for queries. Each path
/// is strictly monotonic, so the list never holds duplicates.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Trace {
    /// No operation has been traced since the last rebuild/resize.
    #[default]
    Empty,
    /// Cells that received the delta of a point update.
    Update { indices: Vec<usize> },
    /// Cells that were summed by a prefix query, plus the resulting sum.
    ///
    /// A query over zero elements yields an empty `indices` list with `sum == 0`.
    Query { indices: Vec<usize>, sum: i64 },
}

impl Trace {
    pub fn kind(&self) -> Option<TraceKind> {
        match self {
            Self::Empty => None,
            Self::Update { .. } => Some(TraceKind::Update),
            Self::Query { .. } => Some(TraceKind::Query),
        }
    }

    pub fn indices(&self) -> &[usize] {
        match self {
            Self::Empty => &[],
            Self::Update { indices } | Self::Query { indices, .. } => indices,
        }
    }

    /// The sum carried by a query trace.
    pub fn sum(&self) -> Option<i64> {
        match self {
            Self::Query { sum, .. } => Some(*sum),
            _ => None,
        }
    }

    /// Returns `true` when no cell is highlighted.
    ///
    /// This is also `true` for a query over zero elements, which is still a [`TraceKind::Query`].
    pub fn is_empty(&self) -> bool {
        self.indices().is_empty()
    }

    pub fn len(&self) -> usize {
        self.indices().len()
    }

    pub fn contains(&self, index: usize) -> bool {
        // Paths are O(log n) long; a scan beats anything clever.
        self.indices().contains(&index)
    }

    /// Returns the kind of this trace if it visited `index`.
    pub fn kind_at(&self, index: usize) -> Option<TraceKind> {
        if self.contains(index) {
            self.kind()
        } else {
            None
        }
    }
}
