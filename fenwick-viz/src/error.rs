/// The largest element count a [`crate::FenwickTree`] accepts.
///
/// Both arrays hold one `i64` per element, so this is the most a `Vec<i64>` can address.
pub const MAX_LEN: usize = isize::MAX as usize / core::mem::size_of::<i64>();

/// A rejected operation.
///
/// Every check runs before anything is mutated, so a call that returns an error leaves the tree,
/// its values, its trace and its last sum exactly as they were.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A construction length or prefix length outside `min..=max`.
    #[error("invalid length {len} (expected {min}..={max})")]
    InvalidLength { len: usize, min: usize, max: usize },

    /// A point update outside `0..len`.
    #[error("index {index} is out of bounds for {len} elements")]
    InvalidIndex { index: usize, len: usize },

    /// A resize target of zero (or beyond [`MAX_LEN`]).
    #[error("cannot resize to {len} elements (expected 1..={max})", max = MAX_LEN)]
    InvalidResizeLength { len: usize },
}
