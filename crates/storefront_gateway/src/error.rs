use thiserror::Error;

/// Gateway failure taxonomy. Every operation fails into exactly one of
/// these; none is fatal to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayError {
    /// Transport failure, timeout, unexpected status, or a body that could
    /// not be decoded.
    #[error("network error: {0}")]
    Network(String),
    /// The backend reports no record under the requested id.
    #[error("record not found")]
    NotFound,
    /// The backend rejected the payload. The reason is surfaced verbatim.
    #[error("{reason}")]
    Validation {
        field: Option<String>,
        reason: String,
    },
}
