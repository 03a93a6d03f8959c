use std::sync::Arc;

use chrono::Duration;

use crate::clock::Clock;
use crate::jwt::Claims;
use crate::jwt::IssuedToken;
use crate::jwt::JwtError;
use crate::jwt::JwtHandler;
use crate::password::CredentialHash;
use crate::password::PasswordError;
use crate::password::PasswordHasher;

/// Authentication coordinator combining password verification and JWT issuance.
pub struct Authenticator {
    password_hasher: PasswordHasher,
    jwt_handler: JwtHandler,
}

/// Authentication operation errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Password error: {0}")]
    PasswordError(#[from] PasswordError),

    #[error("JWT error: {0}")]
    JwtError(#[from] JwtError),
}

impl Authenticator {
    /// Create a new authenticator.
    ///
    /// # Arguments
    /// * `jwt_secret` - Secret key for JWT signing
    /// * `token_ttl` - Lifetime of issued tokens
    /// * `clock` - Time source for token issuance and expiry
    pub fn new(jwt_secret: &[u8], token_ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            password_hasher: PasswordHasher::new(),
            jwt_handler: JwtHandler::new(jwt_secret, token_ttl, clock),
        }
    }

    /// Hash a password for storage.
    ///
    /// # Errors
    /// * `PasswordError` - Hashing operation failed
    pub fn hash_password(&self, password: &str) -> Result<CredentialHash, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Verify credentials and issue a token for `identity`.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to verify
    /// * `stored_hash` - Stored credential hash
    /// * `identity` - Identity claim to bind into the token
    ///
    /// # Errors
    /// * `InvalidCredentials` - Password does not match
    /// * `PasswordError` - Stored hash could not be parsed
    /// * `JwtError` - Token generation failed
    pub fn authenticate(
        &self,
        password: &str,
        stored_hash: &CredentialHash,
        identity: &str,
    ) -> Result<IssuedToken, AuthenticationError> {
        let is_valid = self.password_hasher.verify(password, stored_hash)?;

        if !is_valid {
            return Err(AuthenticationError::InvalidCredentials);
        }

        Ok(self.jwt_handler.issue(identity)?)
    }

    /// Reject a login attempt that has no stored hash.
    ///
    /// Runs a full verification of `password` against
    /// [`CredentialHash::decoy`] so the rejection costs one Argon2 run.
    pub fn reject_without_hash(&self, password: &str) -> AuthenticationError {
        let _ = self
            .password_hasher
            .verify(password, &CredentialHash::decoy());
        AuthenticationError::InvalidCredentials
    }

    /// Issue a token without password verification.
    pub fn issue_token(&self, identity: &str) -> Result<IssuedToken, JwtError> {
        self.jwt_handler.issue(identity)
    }

    /// Validate a presented token and return its claims.
    ///
    /// # Errors
    /// * `JwtError` - Signature mismatch, expiry, or malformed token
    pub fn validate_token(&self, token: &str) -> Result<Claims, JwtError> {
        self.jwt_handler.verify(token)
    }
}
