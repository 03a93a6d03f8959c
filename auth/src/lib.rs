//! Authentication utilities library
//!
//! Provides the credential and token primitives used by the user service:
//! - Password hashing (Argon2id, salted per call)
//! - Bearer token issuance and verification (HS256 JWT, fixed TTL)
//! - An injectable clock so expiry can be tested deterministically
//! - Authentication coordination
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! let is_valid = hasher.verify("my_password", &hash).unwrap();
//! assert!(is_valid);
//! ```
//!
//! ## Bearer Tokens
//! ```
//! use std::sync::Arc;
//!
//! use auth::{JwtHandler, SystemClock, DEFAULT_TOKEN_TTL_SECS};
//! use chrono::Duration;
//!
//! let handler = JwtHandler::new(
//!     b"secret_key_at_least_32_bytes_long!",
//!     Duration::seconds(DEFAULT_TOKEN_TTL_SECS),
//!     Arc::new(SystemClock),
//! );
//! let issued = handler.issue("alice@example.com").unwrap();
//! let claims = handler.verify(&issued.token).unwrap();
//! assert_eq!(claims.identity(), "alice@example.com");
//! ```
//!
//! ## Complete Authentication Flow
//! ```
//! use std::sync::Arc;
//!
//! use auth::{Authenticator, SystemClock, DEFAULT_TOKEN_TTL_SECS};
//! use chrono::Duration;
//!
//! let auth = Authenticator::new(
//!     b"secret_key_at_least_32_bytes_long!",
//!     Duration::seconds(DEFAULT_TOKEN_TTL_SECS),
//!     Arc::new(SystemClock),
//! );
//!
//! // Register: hash password
//! let hash = auth.hash_password("password123").unwrap();
//!
//! // Login: verify and issue token
//! let issued = auth.authenticate("password123", &hash, "alice@example.com").unwrap();
//!
//! // Protected request: validate token
//! let claims = auth.validate_token(&issued.token).unwrap();
//! assert_eq!(claims.identity(), "alice@example.com");
//! ```

pub mod authenticator;
pub mod clock;
pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::Authenticator;
pub use clock::Clock;
pub use clock::ManualClock;
pub use clock::SystemClock;
pub use jwt::Claims;
pub use jwt::IssuedToken;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use jwt::DEFAULT_TOKEN_TTL_SECS;
pub use password::CredentialHash;
pub use password::PasswordError;
pub use password::PasswordHasher;
