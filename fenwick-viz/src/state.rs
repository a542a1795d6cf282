use alloc::vec::Vec;

use crate::Trace;

/// An owned copy of everything a presentation layer reads after an operation.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Snapshot {
    /// The user-visible values.
    pub values: Vec<i64>,
    /// The aggregate cells, one per value.
    pub tree: Vec<i64>,
    pub trace: Trace,
    /// Sum returned by the latest query; 0 after any mutation.
    pub last_sum: i64,
}

impl Snapshot {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
