use std::sync::Arc;

use async_trait::async_trait;
use auth::AuthenticationError;
use auth::Authenticator;
use auth::IssuedToken;
use chrono::Utc;

use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::LoginCommand;
use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::user::errors::UserError;
use crate::user::ports::UserRepository;
use crate::user::ports::UserServicePort;

/// Domain service implementation for user operations.
///
/// Password hashing and verification run on tokio's blocking pool.
pub struct UserService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    authenticator: Arc<Authenticator>,
}

impl<UR> UserService<UR>
where
    UR: UserRepository,
{
    /// Create a new user service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - User persistence implementation
    /// * `authenticator` - Credential hashing and token issuance
    pub fn new(repository: Arc<UR>, authenticator: Arc<Authenticator>) -> Self {
        Self {
            repository,
            authenticator,
        }
    }
}

#[async_trait]
impl<UR> UserServicePort for UserService<UR>
where
    UR: UserRepository,
{
    async fn register(&self, command: RegisterUserCommand) -> Result<User, UserError> {
        // Skip the expensive hash for an email we already know is taken. The
        // repository still enforces uniqueness for concurrent registrations.
        if self
            .repository
            .find_by_email(&command.email)
            .await?
            .is_some()
        {
            tracing::info!(email = %command.email, "Registration rejected, email already registered");
            return Err(UserError::EmailAlreadyExists(command.email.to_string()));
        }

        let authenticator = Arc::clone(&self.authenticator);
        let password = command.password;
        let password_hash =
            tokio::task::spawn_blocking(move || authenticator.hash_password(&password))
                .await?
                .map_err(|e| UserError::Credential(e.to_string()))?;

        let user = User {
            id: UserId::new(),
            name: command.name,
            email: command.email,
            password_hash,
            created_at: Utc::now(),
        };

        let created_user = self.repository.save(user).await?;
        tracing::info!(user_id = %created_user.id, "User registered");

        Ok(created_user)
    }

    async fn login(&self, command: LoginCommand) -> Result<IssuedToken, UserError> {
        let LoginCommand { email, password } = command;

        let user = match EmailAddress::new(email) {
            Ok(email) => self.repository.find_by_email(&email).await?,
            Err(_) => None,
        };

        let authenticator = Arc::clone(&self.authenticator);
        let Some(user) = user else {
            // Unknown and malformed emails still pay for one verification.
            tokio::task::spawn_blocking(move || authenticator.reject_without_hash(&password))
                .await?;
            tracing::info!("Login rejected");
            return Err(UserError::InvalidCredentials);
        };

        let stored_hash = user.password_hash;
        let identity = user.email.as_str().to_string();
        let result = tokio::task::spawn_blocking(move || {
            authenticator.authenticate(&password, &stored_hash, &identity)
        })
        .await?;

        match result {
            Ok(issued) => {
                tracing::info!(user_id = %user.id, expires_at = %issued.expires_at, "Token issued");
                Ok(issued)
            }
            Err(AuthenticationError::InvalidCredentials) => {
                tracing::info!("Login rejected");
                Err(UserError::InvalidCredentials)
            }
            Err(e) => {
                tracing::error!(user_id = %user.id, error = %e, "Login failed");
                Err(UserError::Credential(e.to_string()))
            }
        }
    }

    async fn list_users(&self) -> Result<Vec<User>, UserError> {
        self.repository.list_all().await
    }
}
