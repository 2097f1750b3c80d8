use thiserror::Error;

/// Why a generation attempt ended without a result.
///
/// The `Display` text of each variant is exactly what the error panel shows.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UploadError {
    #[error("Please select a file")]
    NoFileSelected,

    #[error("File is too large ({size} bytes, the limit is {limit} bytes)")]
    FileTooLarge { size: u64, limit: u64 },

    #[error("{0}")]
    ServerRejected(String),

    #[error("Network error: {0}")]
    NetworkFailure(String),
}

/// A request that never produced a readable reply.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct TransportError(pub String);

impl TransportError {
    pub fn new(description: impl Into<String>) -> Self {
        Self(description.into())
    }
}

impl From<TransportError> for UploadError {
    fn from(err: TransportError) -> Self {
        UploadError::NetworkFailure(err.0)
    }
}

impl From<serde_json::Error> for UploadError {
    fn from(err: serde_json::Error) -> Self {
        UploadError::NetworkFailure(err.to_string())
    }
}
