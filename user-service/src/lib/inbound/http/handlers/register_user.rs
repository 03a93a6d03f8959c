use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

use super::ApiError;
use super::ApiSuccess;
use super::ResultMessageBody;
use super::StatusBody;
use super::UserData;
use crate::domain::user::models::DisplayName;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::router::AppState;
use crate::user::errors::EmailError;
use crate::user::errors::NameError;

/// Create a new user
#[utoipa::path(
    post,
    path = "/user/Newuser",
    tag = "Users",
    request_body = RegisterUserRequest,
    responses(
        (status = 200, description = "The user was successfully created", body = RegisterUserResponse),
        (status = 400, description = "Email already exists", body = ResultMessageBody),
        (status = 422, description = "Malformed body, invalid name or email", body = StatusBody),
        (status = 500, description = "Internal server error", body = StatusBody),
    )
)]
pub async fn register_user(
    State(state): State<AppState>,
    payload: Result<Json<RegisterUserRequest>, JsonRejection>,
) -> Result<ApiSuccess<RegisterUserResponse>, ApiError> {
    let Json(body) =
        payload.map_err(|rejection| ApiError::UnprocessableEntity(rejection.body_text()))?;

    state
        .user_service
        .register(body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref user| {
            ApiSuccess::new(
                StatusCode::OK,
                RegisterUserResponse {
                    result: user.into(),
                },
            )
        })
}

/// HTTP request body for registering a user (raw JSON)
#[derive(Clone, PartialEq, Eq, Deserialize, ToSchema)]
pub struct RegisterUserRequest {
    #[serde(rename = "Name")]
    #[schema(example = "Mohammed")]
    name: String,
    #[schema(example = "mk@gmail.com")]
    email: String,
    #[schema(example = "password123")]
    password: String,
}

#[derive(Debug, Clone, Error)]
enum ParseRegisterUserRequestError {
    #[error("Invalid name: {0}")]
    Name(#[from] NameError),

    #[error("Invalid email: {0}")]
    Email(#[from] EmailError),
}

impl RegisterUserRequest {
    fn try_into_command(self) -> Result<RegisterUserCommand, ParseRegisterUserRequestError> {
        let name = DisplayName::new(self.name)?;
        let email = EmailAddress::new(self.email)?;
        Ok(RegisterUserCommand::new(name, email, self.password))
    }
}

impl From<ParseRegisterUserRequestError> for ApiError {
    fn from(err: ParseRegisterUserRequestError) -> Self {
        ApiError::UnprocessableEntity(err.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct RegisterUserResponse {
    pub result: UserData,
}
