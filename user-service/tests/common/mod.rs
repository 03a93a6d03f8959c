use std::sync::Arc;

use auth::Authenticator;
use auth::ManualClock;
use auth::DEFAULT_TOKEN_TTL_SECS;
use chrono::Duration;
use serde_json::json;
use user_service::domain::user::service::UserService;
use user_service::inbound::http::router::create_router;
use user_service::outbound::repositories::InMemoryUserRepository;

pub const JWT_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";

/// Test application that spawns a real server
pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
    pub repository: InMemoryUserRepository,
    /// Drives token issuance and expiry for the spawned server
    pub clock: Arc<ManualClock>,
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let address = format!("http://127.0.0.1:{}", listener.local_addr().unwrap().port());

        let clock = Arc::new(ManualClock::starting_now());
        let authenticator = Arc::new(Authenticator::new(
            JWT_SECRET,
            Duration::seconds(DEFAULT_TOKEN_TTL_SECS),
            clock.clone(),
        ));

        let repository = InMemoryUserRepository::new();
        let user_service = Arc::new(UserService::new(
            Arc::new(repository.clone()),
            Arc::clone(&authenticator),
        ));

        let router = create_router(user_service, authenticator);

        // Spawn server in background
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            api_client: reqwest::Client::new(),
            repository,
            clock,
        }
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    /// Helper to make GET request with Bearer token
    pub fn get_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.get(path).bearer_auth(token)
    }

    pub async fn register(&self, name: &str, email: &str, password: &str) -> reqwest::Response {
        self.post("/user/Newuser")
            .json(&json!({
                "Name": name,
                "email": email,
                "password": password
            }))
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn login(&self, email: &str, password: &str) -> reqwest::Response {
        self.post("/user/login")
            .json(&json!({
                "email": email,
                "password": password
            }))
            .send()
            .await
            .expect("Failed to execute request")
    }

    /// Register a user, log in, and return the issued token.
    pub async fn token_for(&self, email: &str, password: &str) -> String {
        self.register("A", email, password).await;
        let body: serde_json::Value = self
            .login(email, password)
            .await
            .json()
            .await
            .expect("Failed to parse response");

        body["token"]
            .as_str()
            .expect("Login response has no token")
            .to_string()
    }
}
