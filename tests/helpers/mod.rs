//! Shared test helpers for integration tests.
//!
//! The app runs against the in-memory store and a temporary upload
//! directory, so no database is needed.

#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::{Body, Bytes};
use axum::http::{HeaderMap, Request, StatusCode};
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

use folio_api::{AppState, build_app};
use folio_auth::{CredentialVerifier, PasswordHasher, TokenService};
use folio_core::config::{CorsConfig, SigningSecret};
use folio_database::{MemoryStore, UserStore};
use folio_entity::CreateUser;
use folio_storage::LocalStorageProvider;

/// Secret the test app signs tokens with.
pub const TEST_SECRET: &str = "integration-test-secret";

const BOUNDARY: &str = "folio-test-boundary";

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Backing store, for seeding and direct assertions
    pub store: Arc<MemoryStore>,
    /// Token service sharing the app's secret
    pub tokens: Arc<TokenService>,
    _data_dir: TempDir,
}

/// Response captured from the test app
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub bytes: Bytes,
    pub body: Value,
}

impl TestApp {
    /// Create a new test application
    pub async fn new() -> Self {
        let store = Arc::new(MemoryStore::new());
        Self::with_users(store.clone(), store).await
    }

    /// Create a test application whose user lookups go to `users`.
    pub async fn with_users(store: Arc<MemoryStore>, users: Arc<dyn UserStore>) -> Self {
        let data_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let storage = LocalStorageProvider::new(data_dir.path().join("uploads"))
            .await
            .expect("Failed to init storage");

        let tokens = Arc::new(TokenService::new(&SigningSecret::new(TEST_SECRET)));
        let credentials = Arc::new(CredentialVerifier::new(
            Arc::clone(&users),
            PasswordHasher::new(),
        ));

        let state = AppState {
            tokens: Arc::clone(&tokens),
            credentials,
            database: store.clone(),
            users,
            categories: store.clone(),
            folders: store.clone(),
            cv_files: store.clone(),
            storage: Arc::new(storage),
            upload_limit_bytes: 1024 * 1024,
        };

        Self {
            router: build_app(state, &CorsConfig::default()),
            store,
            tokens,
            _data_dir: data_dir,
        }
    }

    /// Create a test user and return their ID
    pub async fn create_test_user(&self, username: &str, password: &str) -> i32 {
        let password_hash = PasswordHasher::new()
            .hash_password(password)
            .expect("Failed to hash password");

        UserStore::create(
            self.store.as_ref(),
            CreateUser {
                username: username.to_string(),
                password_hash,
            },
        )
        .await
        .expect("Failed to create test user")
        .id
    }

    /// Login and return the session token
    pub async fn login(&self, username: &str, password: &str) -> String {
        let body = serde_json::json!({
            "username": username,
            "password": password,
        });

        let response = self
            .request("POST", "/api/auth/login", Some(body), None)
            .await;

        assert_eq!(
            response.status,
            StatusCode::OK,
            "Login failed: {:?}",
            response.body
        );

        response
            .body
            .get("token")
            .and_then(|v| v.as_str())
            .expect("No token in login response")
            .to_string()
    }

    /// Make a JSON request, optionally with a bearer token
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let authorization = token.map(|t| format!("Bearer {t}"));
        self.request_with_authorization(method, path, body, authorization.as_deref())
            .await
    }

    /// Make a JSON request with a raw `Authorization` header value
    pub async fn request_with_authorization(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        authorization: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(value) = authorization {
            req = req.header("Authorization", value);
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        self.send(req).await
    }

    /// Upload a file as multipart field `file`
    pub async fn upload(
        &self,
        path: &str,
        token: Option<&str>,
        file_name: &str,
        data: &[u8],
    ) -> TestResponse {
        let mut body = Vec::new();
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"{file_name}\"\r\nContent-Type: application/octet-stream\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(data);
        body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

        let mut req = Request::builder()
            .method("POST")
            .uri(path)
            .header(
                "Content-Type",
                format!("multipart/form-data; boundary={BOUNDARY}"),
            );

        if let Some(token) = token {
            req = req.header("Authorization", format!("Bearer {token}"));
        }

        let req = req.body(Body::from(body)).expect("Failed to build request");
        self.send(req).await
    }

    /// Send a prepared request
    pub async fn send(&self, req: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = axum::body::to_bytes(response.into_body(), 16 * 1024 * 1024)
            .await
            .expect("Failed to read body");
        let body: Value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

        TestResponse {
            status,
            headers,
            bytes,
            body,
        }
    }
}

impl TestResponse {
    /// The `error` field of an error body
    pub fn error(&self) -> Option<&str> {
        self.body.get("error").and_then(|v| v.as_str())
    }
}
