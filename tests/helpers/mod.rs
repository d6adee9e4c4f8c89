//! Harness shared by the integration tests.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;
use uuid::Uuid;

use warden_auth::audit::ChannelAuditSink;
use warden_auth::jwt::{JwtDecoder, JwtEncoder};
use warden_auth::password::PasswordHasher;
use warden_auth::session::{RefreshTokenStore, SessionManager};
use warden_auth::validator::TokenValidator;
use warden_core::config::AppConfig;
use warden_core::traits::AuditSink;
use warden_database::StorageBackend;
use warden_entity::user::CreateUser;

/// In-process application instance, fully wired, no network.
pub struct TestApp {
    /// Router under test.
    pub router: Router,
    /// Storage backend shared with the router, for direct seeding.
    pub storage: StorageBackend,
    pub config: AppConfig,
}

impl TestApp {
    /// Build an app over the memory backend using `config/test.toml`.
    pub async fn new() -> Self {
        let config = AppConfig::load("test").expect("test config loads");
        Self::with_config(config).await
    }

    /// Build an app with an explicit configuration.
    pub async fn with_config(config: AppConfig) -> Self {
        let storage = StorageBackend::connect(&config.database)
            .await
            .expect("storage backend initializes");

        let password_hasher = Arc::new(PasswordHasher::new());
        let jwt_encoder = Arc::new(JwtEncoder::new(&config.auth));
        let jwt_decoder = Arc::new(JwtDecoder::new(&config.auth));
        let refresh_store =
            RefreshTokenStore::new(Arc::clone(&storage.refresh_tokens), &config.auth);

        let (channel_sink, _audit_handle) =
            ChannelAuditSink::spawn(Arc::clone(&storage.audit_logs), config.audit.queue_capacity);
        let audit_sink: Arc<dyn AuditSink> = Arc::new(channel_sink);

        let session_manager = Arc::new(SessionManager::new(
            Arc::clone(&storage.users),
            refresh_store,
            jwt_encoder,
            password_hasher,
            Arc::clone(&audit_sink),
        ));
        let validator = Arc::new(TokenValidator::new(jwt_decoder, Arc::clone(&storage.users)));

        let app_state = warden_api::AppState {
            config: Arc::new(config.clone()),
            storage: storage.clone(),
            session_manager,
            validator,
            audit_sink,
        };

        let router = warden_api::build_router(app_state);

        Self {
            router,
            storage,
            config,
        }
    }

    /// Seed a principal directly through the store; returns its ID.
    pub async fn create_test_user(&self, email: &str, password: &str, role: &str) -> Uuid {
        let hasher = PasswordHasher::new();
        let hash = hasher.hash_password(password).expect("password hashes");

        let user = self
            .storage
            .users
            .insert(CreateUser {
                email: email.to_string(),
                full_name: format!("Test User <{email}>"),
                password_hash: hash,
                role: role.parse().expect("test role parses"),
            })
            .await
            .expect("user inserts");

        user.id
    }

    /// Disable a principal directly through the store.
    pub async fn disable_user(&self, id: Uuid) {
        self.storage
            .users
            .set_enabled(id, false)
            .await
            .expect("disable succeeds")
            .expect("user exists");
    }

    /// Log in through the API and return the access token.
    pub async fn login(&self, email: &str, password: &str) -> String {
        let (access, _refresh) = self.login_tokens(email, password).await;
        access
    }

    /// Log in through the API and return `(access, refresh)`.
    pub async fn login_tokens(&self, email: &str, password: &str) -> (String, String) {
        let body = serde_json::json!({
            "email": email,
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

        let access = response.body["data"]["access_token"]
            .as_str()
            .expect("login response carries access_token")
            .to_string();
        let refresh = response.body["data"]["refresh_token"]
            .as_str()
            .expect("login response carries refresh_token")
            .to_string();

        (access, refresh)
    }

    /// Issue a request against the router, optionally as a bearer.
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        match token {
            Some(token) => {
                let bearer = format!("Bearer {token}");
                self.request_with_headers(
                    method,
                    path,
                    body,
                    &[("Authorization", bearer.as_str())],
                )
                .await
            }
            None => self.request_with_headers(method, path, body, &[]).await,
        }
    }

    /// Issue a request with explicit extra headers.
    pub async fn request_with_headers(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        headers: &[(&str, &str)],
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("body serializes"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        for (name, value) in headers {
            req = req.header(*name, *value);
        }

        let req = req.body(Body::from(body_str)).expect("request builds");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("router accepts the request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("body is readable");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }
}

/// Status plus parsed JSON body of one response.
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
}

impl TestResponse {
    /// The `data` payload of a success envelope.
    pub fn data(&self) -> &Value {
        &self.body["data"]
    }

    /// The machine-readable code of an error envelope.
    pub fn error_code(&self) -> &str {
        self.body["error"].as_str().unwrap_or("")
    }
}
