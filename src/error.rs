use thiserror::Error;

/// Errors reported by `DynamicArray` operations. Index and range violations
/// are the only recoverable failures; allocation failure aborts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ArrayError {
    #[error("index {index} out of range for length {len}")]
    OutOfRange { index: usize, len: usize },

    #[error("invalid range {lo}..{hi} for length {len}")]
    InvalidRange { lo: usize, hi: usize, len: usize },

    #[error("unknown sort algorithm id {0}")]
    UnknownAlgorithm(u8),
}
