mod common;

use auth::DEFAULT_TOKEN_TTL_SECS;
use chrono::Duration;
use common::TestApp;
use reqwest::StatusCode;
use serde_json::json;
use user_service::domain::user::models::EmailAddress;
use user_service::domain::user::ports::UserRepository;

#[tokio::test]
async fn test_index() {
    let app = TestApp::spawn().await;

    let response = app.get("/").send().await.expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.text().await.unwrap().contains("Rest API Server!"));
}

#[tokio::test]
async fn test_register_success() {
    let app = TestApp::spawn().await;

    let response = app.register("A", "a@x.com", "pw123").await;

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["result"]["Name"], "A");
    assert_eq!(body["result"]["email"], "a@x.com");
    assert!(body["result"]["id"].is_string());
    assert!(body["result"]["created_at"].is_string());
    assert!(body["result"].get("password").is_none());
    assert!(body["result"].get("password_hash").is_none());

    let email = EmailAddress::new("a@x.com".to_string()).unwrap();
    let stored = app
        .repository
        .find_by_email(&email)
        .await
        .unwrap()
        .expect("User was not stored");
    assert_ne!(stored.password_hash.as_str(), "pw123");
}

#[tokio::test]
async fn test_register_duplicate_email() {
    let app = TestApp::spawn().await;

    app.register("A", "a@x.com", "pw123").await;
    let response = app.register("B", "a@x.com", "other").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body, json!({ "result": "Email Already Exist" }));
    assert_eq!(app.repository.len().await, 1);
}

#[tokio::test]
async fn test_concurrent_duplicate_registration_stores_one_user() {
    let app = TestApp::spawn().await;

    let (first, second) = tokio::join!(
        app.register("A", "race@x.com", "pw123"),
        app.register("B", "race@x.com", "pw456"),
    );

    let mut statuses = [first.status(), second.status()];
    statuses.sort();
    assert_eq!(statuses, [StatusCode::OK, StatusCode::BAD_REQUEST]);
    assert_eq!(app.repository.len().await, 1);
}

#[tokio::test]
async fn test_register_invalid_email() {
    let app = TestApp::spawn().await;

    let response = app.register("A", "not-an-email", "pw123").await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert!(body["status"]
        .as_str()
        .unwrap()
        .to_lowercase()
        .contains("email"));
}

#[tokio::test]
async fn test_login_success() {
    let app = TestApp::spawn().await;
    app.register("A", "a@x.com", "pw123").await;

    let response = app.login("a@x.com", "pw123").await;

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "success");
    assert!(!body["token"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn test_login_wrong_password() {
    let app = TestApp::spawn().await;
    app.register("A", "a@x.com", "pw123").await;

    let response = app.login("a@x.com", "wrong").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body, json!({ "status": "Invalid user/password" }));
    assert!(body.get("token").is_none());
}

#[tokio::test]
async fn test_login_unknown_email_looks_like_wrong_password() {
    let app = TestApp::spawn().await;
    app.register("A", "a@x.com", "pw123").await;

    let wrong_password = app.login("a@x.com", "wrong").await;
    let unknown_email = app.login("nobody@x.com", "pw123").await;

    assert_eq!(wrong_password.status(), unknown_email.status());

    let wrong_password: serde_json::Value = wrong_password.json().await.unwrap();
    let unknown_email: serde_json::Value = unknown_email.json().await.unwrap();
    assert_eq!(wrong_password, unknown_email);
}

#[tokio::test]
async fn test_list_users_with_token() {
    let app = TestApp::spawn().await;
    let token = app.token_for("a@x.com", "pw123").await;
    app.register("B", "b@x.com", "pw456").await;

    let response = app
        .get_authenticated("/user/users", &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    let users = body["user"].as_array().expect("Expected a user array");
    assert_eq!(users.len(), 2);
    for user in users {
        assert!(user["email"].is_string());
        assert!(user.get("password_hash").is_none());
        assert!(user.get("password").is_none());
    }
}

#[tokio::test]
async fn test_list_users_without_token() {
    let app = TestApp::spawn().await;

    let response = app
        .get("/user/users")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body, json!({ "status": "Invalid user" }));
}

#[tokio::test]
async fn test_list_users_with_malformed_header() {
    let app = TestApp::spawn().await;
    let token = app.token_for("a@x.com", "pw123").await;

    let response = app
        .get("/user/users")
        .header("Authorization", token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_list_users_with_invalid_token() {
    let app = TestApp::spawn().await;

    let response = app
        .get_authenticated("/user/users", "not.a.token")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body, json!({ "status": "Invalid Token" }));
}

#[tokio::test]
async fn test_token_expires_after_ttl() {
    let app = TestApp::spawn().await;
    let token = app.token_for("a@x.com", "pw123").await;

    app.clock.advance(Duration::seconds(DEFAULT_TOKEN_TTL_SECS - 1));
    let response = app
        .get_authenticated("/user/users", &token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK);

    app.clock.advance(Duration::seconds(1));
    let response = app
        .get_authenticated("/user/users", &token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "Invalid Token");
}

#[tokio::test]
async fn test_openapi_document() {
    let app = TestApp::spawn().await;

    let response = app
        .get("/api-docs/openapi.json")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert!(body["openapi"].as_str().unwrap().starts_with("3."));
    assert!(body["paths"]["/user/users"].is_object());
}

#[tokio::test]
async fn test_swagger_ui() {
    let app = TestApp::spawn().await;

    let response = app
        .get("/api-docs/")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers()["content-type"]
        .to_str()
        .unwrap()
        .starts_with("text/html"));
    assert!(response.text().await.unwrap().contains("swagger-ui"));
}

#[tokio::test]
async fn test_login_malformed_body() {
    let app = TestApp::spawn().await;

    let missing_password = app
        .post("/user/login")
        .json(&json!({ "email": "a@x.com" }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(missing_password.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = missing_password.json().await.unwrap();
    assert_eq!(body, json!({ "status": "Invalid user/password" }));

    let not_json = app
        .post("/user/login")
        .header("Content-Type", "application/json")
        .body("{not json")
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(not_json.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = not_json.json().await.unwrap();
    assert_eq!(body, json!({ "status": "Invalid user/password" }));
}

#[tokio::test]
async fn test_register_malformed_body() {
    let app = TestApp::spawn().await;

    let missing_name = app
        .post("/user/Newuser")
        .json(&json!({ "email": "a@x.com", "password": "pw123" }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(missing_name.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: serde_json::Value = missing_name.json().await.unwrap();
    assert!(body["status"].is_string());

    let no_content_type = app
        .post("/user/Newuser")
        .body(r#"{"Name":"A","email":"a@x.com","password":"pw123"}"#)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(no_content_type.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: serde_json::Value = no_content_type.json().await.unwrap();
    assert!(body["status"].is_string());

    assert!(app.repository.is_empty().await);
}
