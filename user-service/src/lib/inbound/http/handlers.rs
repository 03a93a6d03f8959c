use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::user::models::User;
use crate::user::errors::UserError;

pub mod list_users;
pub mod login;
pub mod register_user;

// Fixed client-facing messages.
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid user/password";
pub const MISSING_TOKEN_MESSAGE: &str = "Invalid user";
pub const INVALID_TOKEN_MESSAGE: &str = "Invalid Token";
pub const DUPLICATE_EMAIL_MESSAGE: &str = "Email Already Exist";
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server Error";

#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize>(StatusCode, Json<T>);

impl<T: Serialize> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(data))
    }
}

impl<T: Serialize> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

/// Boundary errors. Each variant maps to a fixed status code and body;
/// internal details are logged, never returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    InternalServerError(String),
    UnprocessableEntity(String),
    BadCredentials,
    DuplicateEmail,
    MissingToken,
    InvalidToken,
}

impl From<anyhow::Error> for ApiError {
    fn from(e: anyhow::Error) -> Self {
        Self::InternalServerError(e.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::InternalServerError(detail) => {
                tracing::error!(error = %detail, "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(StatusBody::new(INTERNAL_ERROR_MESSAGE)),
                )
                    .into_response()
            }
            ApiError::UnprocessableEntity(message) => {
                (StatusCode::UNPROCESSABLE_ENTITY, Json(StatusBody::new(message))).into_response()
            }
            ApiError::BadCredentials => (
                StatusCode::BAD_REQUEST,
                Json(StatusBody::new(INVALID_CREDENTIALS_MESSAGE)),
            )
                .into_response(),
            ApiError::DuplicateEmail => (
                StatusCode::BAD_REQUEST,
                Json(ResultMessageBody::new(DUPLICATE_EMAIL_MESSAGE)),
            )
                .into_response(),
            ApiError::MissingToken => (
                StatusCode::UNAUTHORIZED,
                Json(StatusBody::new(MISSING_TOKEN_MESSAGE)),
            )
                .into_response(),
            ApiError::InvalidToken => (
                StatusCode::FORBIDDEN,
                Json(StatusBody::new(INVALID_TOKEN_MESSAGE)),
            )
                .into_response(),
        }
    }
}

impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::EmailAlreadyExists(_) => ApiError::DuplicateEmail,
            UserError::InvalidCredentials => ApiError::BadCredentials,
            UserError::InvalidName(_) | UserError::InvalidEmail(_) => {
                ApiError::UnprocessableEntity(err.to_string())
            }
            UserError::Credential(_) | UserError::DatabaseError(_) | UserError::Unknown(_) => {
                ApiError::InternalServerError(err.to_string())
            }
        }
    }
}

/// `{ "status": "..." }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct StatusBody {
    pub status: String,
}

impl StatusBody {
    pub fn new(status: impl Into<String>) -> Self {
        Self {
            status: status.into(),
        }
    }
}

/// `{ "result": "..." }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ResultMessageBody {
    pub result: String,
}

impl ResultMessageBody {
    pub fn new(result: impl Into<String>) -> Self {
        Self {
            result: result.into(),
        }
    }
}

/// Public view of a user. The credential hash is never part of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct UserData {
    pub id: String,
    #[serde(rename = "Name")]
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl From<&User> for UserData {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            name: user.name.as_str().to_string(),
            email: user.email.as_str().to_string(),
            created_at: user.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::user::errors::EmailError;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn test_user_error_mapping() {
        assert_eq!(
            ApiError::from(UserError::EmailAlreadyExists("a@x.com".into())),
            ApiError::DuplicateEmail
        );
        assert_eq!(
            ApiError::from(UserError::InvalidCredentials),
            ApiError::BadCredentials
        );
        assert!(matches!(
            ApiError::from(UserError::InvalidEmail(EmailError::InvalidFormat("x".into()))),
            ApiError::UnprocessableEntity(_)
        ));
        assert!(matches!(
            ApiError::from(UserError::DatabaseError("down".into())),
            ApiError::InternalServerError(_)
        ));
    }

    #[tokio::test]
    async fn test_gate_errors_status_and_body() {
        let response = ApiError::MissingToken.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(body_json(response).await["status"], "Invalid user");

        let response = ApiError::InvalidToken.into_response();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        assert_eq!(body_json(response).await["status"], "Invalid Token");
    }

    #[tokio::test]
    async fn test_duplicate_email_body() {
        let response = ApiError::DuplicateEmail.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["result"], "Email Already Exist");
    }

    #[tokio::test]
    async fn test_internal_error_is_opaque() {
        let response =
            ApiError::InternalServerError("password authentication failed for user pg".into())
                .into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body["status"], "Internal server Error");
        assert!(!body.to_string().contains("pg"));
    }
}
