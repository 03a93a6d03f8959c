use utoipa::openapi::security::HttpAuthScheme;
use utoipa::openapi::security::HttpBuilder;
use utoipa::openapi::security::SecurityScheme;
use utoipa::Modify;
use utoipa::OpenApi;

use super::handlers;

/// OpenAPI document for the user API, served at `/api-docs/openapi.json`
/// with Swagger UI at `/api-docs/`.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "RESTAPI",
        version = "1.0.0",
        description = "User registration, login and listing"
    ),
    paths(
        handlers::register_user::register_user,
        handlers::login::login,
        handlers::list_users::list_users,
    ),
    components(schemas(
        handlers::register_user::RegisterUserRequest,
        handlers::register_user::RegisterUserResponse,
        handlers::login::LoginRequest,
        handlers::login::LoginResponse,
        handlers::list_users::ListUsersResponse,
        handlers::UserData,
        handlers::StatusBody,
        handlers::ResultMessageBody,
    )),
    modifiers(&BearerSecurity),
    tags((name = "Users", description = "The users managing API"))
)]
pub struct ApiDoc;

struct BearerSecurity;

impl Modify for BearerSecurity {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}
