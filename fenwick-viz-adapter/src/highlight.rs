use fenwick_viz::{Trace, TraceKind};

/// How a tree cell should be drawn after the latest operation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Highlight {
    #[default]
    None,
    /// The cell received the delta of the latest update.
    Update,
    /// The cell was read by the latest query.
    Query,
}

impl Highlight {
    pub fn of(trace: &Trace, index: usize) -> Self {
        trace.kind_at(index).into()
    }

    pub fn is_none(self) -> bool {
        self == Self::None
    }
}

impl From<Option<TraceKind>> for Highlight {
    fn from(kind: Option<TraceKind>) -> Self {
        match kind {
            None => Self::None,
            Some(TraceKind::Update) => Self::Update,
            Some(TraceKind::Query) => Self::Query,
        }
    }
}
