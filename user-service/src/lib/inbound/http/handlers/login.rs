use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;
use utoipa::ToSchema;

use super::ApiError;
use super::ApiSuccess;
use super::StatusBody;
use crate::domain::user::models::LoginCommand;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::router::AppState;

/// Log in and receive a bearer token
///
/// Unknown email and wrong password produce the same response.
#[utoipa::path(
    post,
    path = "/user/login",
    tag = "Users",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "The user was successfully logged in", body = LoginResponse),
        (status = 400, description = "Invalid email/password", body = StatusBody),
        (status = 500, description = "Internal server error", body = StatusBody),
    )
)]
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<ApiSuccess<LoginResponse>, ApiError> {
    let Json(body) = payload.map_err(|rejection| {
        tracing::debug!(reason = %rejection.body_text(), "Login body rejected");
        ApiError::BadCredentials
    })?;

    let issued = state
        .user_service
        .login(LoginCommand::new(body.email, body.password))
        .await
        .map_err(ApiError::from)?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        LoginResponse {
            status: "success".to_string(),
            token: issued.token,
        },
    ))
}

#[derive(Clone, PartialEq, Eq, Deserialize, ToSchema)]
pub struct LoginRequest {
    #[schema(example = "mk@gmail.com")]
    email: String,
    #[schema(example = "password123")]
    password: String,
}

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct LoginResponse {
    #[schema(example = "success")]
    pub status: String,
    pub token: String,
}
