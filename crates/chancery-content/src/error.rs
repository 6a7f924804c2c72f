//! Error types for Content Store access.

/// Error from Content Store query operations.
///
/// "Document not found" is not an error: queries return `Ok(None)` for
/// absent documents so callers can render the content-missing state.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    /// HTTP request failed (network error, timeout, decode failure).
    #[error("content request failed")]
    Request(#[from] reqwest::Error),

    /// Query API returned an error status.
    #[error("content query error: {status} - {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body (may contain error details).
        body: String,
    },
}
