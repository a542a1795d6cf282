use alloc::string::String;

/// Why the controller refused a call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    /// Text from an input field that does not parse as an `i64`.
    #[error("{input:?} is not an integer")]
    NotAnInteger { input: String },

    /// A length of zero or below.
    #[error("length must be positive, got {len}")]
    NonPositiveLength { len: i64 },

    /// A length above the controller's `max_len`.
    #[error("length {len} exceeds the limit of {max}")]
    LengthTooLarge { len: usize, max: usize },

    #[error(transparent)]
    Engine(#[from] fenwick_viz::Error),
}
