use thiserror::Error;

/// Error type for password operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PasswordError {
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Stored credential hash is malformed: {0}")]
    MalformedHash(String),
}
