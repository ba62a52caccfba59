/// Errors from receipt store operations.
///
/// The in-memory backend cannot fail, but the trait seam keeps the error
/// channel open for backends that can.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The storage backend failed.
    #[error("storage backend error: {0}")]
    Backend(String),
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
