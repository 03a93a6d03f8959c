use thiserror::Error;

/// Error type for JWT operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum JwtError {
    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    #[error("Token is expired")]
    ExpiredToken,

    #[error("Token signature does not match")]
    InvalidSignature,

    #[error("Token is malformed: {0}")]
    Malformed(String),
}
