//! Errors reported by the checked span operations.
//!
//! Everything else follows the slice contract: a violated precondition panics
//! in safe code and is undefined behaviour through the `unsafe` variants.

/// A checked access asked for an index outside `[0, len)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("index {index} is out of range for span of size {len}")]
pub struct OutOfRange {
    /// The requested index.
    pub index: usize,
    /// The size of the span that was accessed.
    pub len: usize,
}

/// A fixed-extent span was requested over a run of a different length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("expected a span of exactly {expected} elements, found {actual}")]
pub struct ExtentMismatch {
    /// The fixed extent.
    pub expected: usize,
    /// The length of the source.
    pub actual: usize,
}
