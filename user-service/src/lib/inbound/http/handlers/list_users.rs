use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use serde::Serialize;
use utoipa::ToSchema;

use super::ApiError;
use super::ApiSuccess;
use super::StatusBody;
use super::UserData;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

/// Returns the list of all users
#[utoipa::path(
    get,
    path = "/user/users",
    tag = "Users",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "The list of users", body = ListUsersResponse),
        (status = 401, description = "Missing bearer token", body = StatusBody),
        (status = 403, description = "Invalid or expired token", body = StatusBody),
        (status = 500, description = "Internal server error", body = StatusBody),
    )
)]
pub async fn list_users(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthenticatedUser>,
) -> Result<ApiSuccess<ListUsersResponse>, ApiError> {
    let users = state.user_service.list_users().await?;
    tracing::debug!(requested_by = %caller.email, count = users.len(), "Listing users");

    Ok(ApiSuccess::new(
        StatusCode::OK,
        ListUsersResponse {
            user: users.iter().map(UserData::from).collect(),
        },
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ListUsersResponse {
    pub user: Vec<UserData>,
}
