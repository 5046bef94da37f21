//! Error types for backend communication.

use thiserror::Error;

/// Common result type for backend operations
pub type ApiResult<T> = Result<T, ApiError>;

/// Everything that can go wrong between issuing a request and decoding its payload.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The request never completed (DNS, refused connection, CORS, ...).
    #[error("network error: {0}")]
    Network(String),
    /// The backend answered with a non-success status.
    #[error("backend responded with status {status}")]
    Backend { status: u16 },
    /// The response body did not match the expected shape.
    #[error("failed to decode response: {0}")]
    Decode(String),
    /// The request body could not be serialized.
    #[error("failed to encode request: {0}")]
    Encode(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Network(err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            ApiError::Backend { status: 404 }.to_string(),
            "backend responded with status 404"
        );
        assert_eq!(
            ApiError::Network("connection refused".into()).to_string(),
            "network error: connection refused"
        );
    }

    #[test]
    fn test_json_error_maps_to_decode() {
        let err = serde_json::from_str::<u32>("\"nope\"").unwrap_err();
        assert!(matches!(ApiError::from(err), ApiError::Decode(_)));
    }
}
