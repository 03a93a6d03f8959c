use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Bearer token payload.
///
/// The subject is the identity claim (an email address for this service).
/// Timestamps are Unix seconds as in RFC 7519.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (identity claim)
    pub sub: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Create claims for an identity issued at `issued_at`, expiring after `ttl`.
    pub fn for_identity(identity: impl ToString, issued_at: DateTime<Utc>, ttl: Duration) -> Self {
        let issued_at = issued_at.timestamp();

        Self {
            sub: identity.to_string(),
            iat: issued_at,
            exp: issued_at + ttl.num_seconds(),
        }
    }

    /// Identity the token was issued for.
    pub fn identity(&self) -> &str {
        &self.sub
    }

    pub fn issued_at(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.iat, 0).unwrap_or_default()
    }

    pub fn expires_at(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.exp, 0).unwrap_or_default()
    }

    /// Check if token is expired at `now`.
    ///
    /// The token stops being valid at exactly its expiration instant.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at()
    }
}
