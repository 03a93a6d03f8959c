use std::fmt;
use std::sync::Arc;

use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::errors::JwtError;
use crate::clock::Clock;

/// Lifetime of an issued bearer token, in seconds.
pub const DEFAULT_TOKEN_TTL_SECS: i64 = 40;

/// Signed token handed back to a caller after login.
#[derive(Clone, PartialEq, Eq)]
pub struct IssuedToken {
    /// Compact JWT
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

impl fmt::Debug for IssuedToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IssuedToken")
            .field("token", &"<redacted>")
            .field("expires_at", &self.expires_at)
            .finish()
    }
}

/// JWT token handler for issuing and verifying bearer tokens.
///
/// Uses HS256 (HMAC with SHA-256). Expiry is checked against the injected
/// [`Clock`] with no leeway, so a token is rejected as soon as `now` reaches
/// `iat + ttl`. Claims carry whole seconds; issuance time is truncated.
pub struct JwtHandler {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
    ttl: Duration,
    clock: Arc<dyn Clock>,
}

impl JwtHandler {
    /// Create a new JWT handler.
    ///
    /// # Arguments
    /// * `secret` - Process-wide signing secret
    /// * `ttl` - Lifetime of issued tokens
    /// * `clock` - Time source for issuance and expiry checks
    ///
    /// # Security Notes
    /// - The secret should be at least 256 bits (32 bytes) for HS256
    /// - Load it from the environment or a secret store, never from code
    pub fn new(secret: &[u8], ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
            ttl,
            clock,
        }
    }

    /// Issue a token for `identity`, valid from now until now + ttl.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token encoding failed
    pub fn issue(&self, identity: &str) -> Result<IssuedToken, JwtError> {
        let claims = Claims::for_identity(identity, self.clock.now(), self.ttl);
        let header = Header::new(self.algorithm);

        let token = encode(&header, &claims, &self.encoding_key)
            .map_err(|e| JwtError::EncodingFailed(e.to_string()))?;

        Ok(IssuedToken {
            token,
            expires_at: claims.expires_at(),
        })
    }

    /// Verify signature and expiry of a presented token.
    ///
    /// # Returns
    /// Decoded claims
    ///
    /// # Errors
    /// * `InvalidSignature` - Token was not signed with this handler's secret
    /// * `ExpiredToken` - Current time is past the token's expiration
    /// * `Malformed` - Token is not a decodable JWT with the required claims
    pub fn verify(&self, token: &str) -> Result<Claims, JwtError> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation()).map_err(|e| {
                match e.kind() {
                    ErrorKind::InvalidSignature => JwtError::InvalidSignature,
                    _ => JwtError::Malformed(e.to_string()),
                }
            })?;

        let claims = token_data.claims;
        if claims.is_expired(self.clock.now()) {
            return Err(JwtError::ExpiredToken);
        }

        Ok(claims)
    }

    fn validation(&self) -> Validation {
        let mut validation = Validation::new(self.algorithm);
        // Expiry is checked against the injected clock in `verify`.
        validation.validate_exp = false;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "iat", "sub"]);
        validation
    }
}
