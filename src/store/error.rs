use thiserror::Error;

/// Result type for conversation store operations
pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors a store backend may report.
///
/// The in-memory backend never produces any of these.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Backend unreachable or refused the operation
    #[error("Store backend error: {0}")]
    Backend(String),
}
