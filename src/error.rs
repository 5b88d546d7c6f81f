//! Error taxonomy for the synchronisation pipeline.
//!
//! Every failure here is a precondition or configuration violation: the
//! pipeline is pure and deterministic, so nothing is ever retried. Numeric
//! degeneracy (non-finite kernel output) is deliberately NOT an error; it is
//! coerced to 0 inside the kernels (see `interp`).

use thiserror::Error;

pub type Result<T> = std::result::Result<T, SyncError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SyncError {
    /// The requested interpolation method name is not in the kernel registry.
    #[error("unknown interpolation method '{0}'")]
    UnknownMethod(String),

    /// The designated reference data-set is absent from the input map.
    #[error("reference data-set '{0}' not found")]
    MissingReference(String),

    /// A data-set referenced by a shift map or sets mapping is absent.
    #[error("data-set '{0}' not found")]
    MissingDataSet(String),

    /// A resolved label or mapping source does not exist in the data-set.
    #[error("data-set '{set}' has no variable '{var}'")]
    MissingVariable { set: String, var: String },

    /// Variables within one data-set disagree on sample count.
    #[error("data-set '{set}': variable '{var}' has {actual} samples, expected {expected}")]
    LengthMismatch {
        set: String,
        var: String,
        expected: usize,
        actual: usize,
    },

    /// An alignment signal has no finite samples left after filtering.
    #[error("data-set '{set}': variable '{var}' has no finite samples")]
    EmptySignal { set: String, var: String },

    /// A kernel was given fewer known points than its order requires.
    #[error("{method} interpolation needs at least {required} points, got {actual}")]
    NotEnoughPoints {
        method: &'static str,
        required: usize,
        actual: usize,
    },

    /// A configuration document could not be deserialized.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
