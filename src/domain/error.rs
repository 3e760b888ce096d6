use thiserror::Error;

/// Failures raised by the split calculator
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SplitError {
    /// `index` is zero-based; the message shows the one-based label users see.
    #[error("saved split {} not found ({len} saved)", index + 1)]
    SnapshotNotFound { index: usize, len: usize },
}
