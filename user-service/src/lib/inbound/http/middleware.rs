use auth::Authenticator;
use auth::JwtError;
use axum::extract::Request;
use axum::extract::State;
use axum::http::header::AUTHORIZATION;
use axum::http::HeaderMap;
use axum::middleware::Next;
use axum::response::Response;
use chrono::DateTime;
use chrono::Utc;
use thiserror::Error;

use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;

/// Verified identity attached to request extensions by [`authenticate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub email: String,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

/// Why a request was not admitted.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthGateError {
    /// No usable `Authorization: Bearer <token>` header.
    #[error("Missing or malformed bearer token")]
    MissingToken,

    #[error("Bearer token rejected: {0}")]
    InvalidToken(#[from] JwtError),
}

impl From<AuthGateError> for ApiError {
    fn from(err: AuthGateError) -> Self {
        match err {
            AuthGateError::MissingToken => ApiError::MissingToken,
            AuthGateError::InvalidToken(_) => ApiError::InvalidToken,
        }
    }
}

/// Middleware that admits only requests carrying a valid bearer token.
///
/// On success the verified identity is inserted as an [`AuthenticatedUser`]
/// extension for the wrapped handler.
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let user = admit(&state.authenticator, req.headers()).map_err(|e| {
        tracing::warn!(reason = %e, uri = %req.uri(), "Request not admitted");
        ApiError::from(e)
    })?;

    tracing::debug!(email = %user.email, "Request admitted");
    req.extensions_mut().insert(user);

    Ok(next.run(req).await)
}

/// Run the gate against a set of request headers.
pub fn admit(
    authenticator: &Authenticator,
    headers: &HeaderMap,
) -> Result<AuthenticatedUser, AuthGateError> {
    let token = extract_bearer_token(headers).ok_or(AuthGateError::MissingToken)?;
    let claims = authenticator.validate_token(token)?;

    Ok(AuthenticatedUser {
        email: claims.identity().to_string(),
        issued_at: claims.issued_at(),
        expires_at: claims.expires_at(),
    })
}

/// Extract `<token>` from `Authorization: Bearer <token>`.
///
/// The scheme is matched case-insensitively. Returns `None` when the header
/// is absent, not visible ASCII, uses another scheme, or carries no token.
pub fn extract_bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.trim().split_once(' ')?;

    if !scheme.eq_ignore_ascii_case("Bearer") {
        return None;
    }

    let token = token.trim();
    if token.is_empty() || token.contains(char::is_whitespace) {
        return None;
    }

    Some(token)
}
