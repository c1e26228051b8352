//! Common test utilities and fixtures
#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Request, Response},
    Router,
};
use hamal_core::ReportLifecycle;
use hamal_server::{create_router, AppState, AuthService, Language};
use hamal_storage::Database;
use std::sync::Arc;
use tempfile::TempDir;
use tower::util::ServiceExt;

/// Test application wired to a real SQLite file
pub struct TestApp {
    pub router: Router,
    pub db: Arc<Database>,
    _temp_dir: TempDir,
}

impl TestApp {
    /// Create a test app; `require_auth` puts `/admin*` behind Basic auth
    pub async fn new(require_auth: bool) -> Self {
        let temp_dir = TempDir::new().unwrap();
        let db_url = format!("sqlite://{}", temp_dir.path().join("test.db").display());

        let db = Arc::new(hamal_storage::open(&db_url).await.unwrap());

        // Minimum bcrypt cost keeps the tests fast
        let auth_service = Arc::new(AuthService::new(4));
        let lifecycle = Arc::new(ReportLifecycle::new(db.clone(), auth_service));

        let app_state = AppState::new(lifecycle, Language::Arabic, require_auth);

        Self {
            router: create_router(app_state),
            db,
            _temp_dir: temp_dir,
        }
    }

    pub async fn send(&self, request: Request<Body>) -> Response<Body> {
        self.router.clone().oneshot(request).await.unwrap()
    }

    pub async fn get(&self, uri: &str) -> Response<Body> {
        self.send(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
    }

    pub async fn get_with_cookie(&self, uri: &str, cookie: &str) -> Response<Body> {
        self.send(
            Request::builder()
                .uri(uri)
                .header(header::COOKIE, cookie)
                .body(Body::empty())
                .unwrap(),
        )
        .await
    }

    pub async fn post_form(&self, uri: &str, form: &str) -> Response<Body> {
        self.send(form_request(uri, form)).await
    }

    pub async fn register(&self, username: &str, password: &str) -> Response<Body> {
        self.post_form(
            "/register",
            &format!("username={username}&password={password}"),
        )
        .await
    }

    pub async fn submit(&self, title: &str, content: &str) -> Response<Body> {
        self.post_form("/add", &format!("title={title}&content={content}"))
            .await
    }
}

pub fn form_request(uri: &str, form: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .method("POST")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(form.to_string()))
        .unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub fn location(response: &Response<Body>) -> &str {
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
}

/// Test user credentials
pub mod fixtures {
    pub const ADMIN_USERNAME: &str = "admin";
    pub const ADMIN_PASSWORD: &str = "AdminPassword456";

    pub const TEST_USERNAME: &str = "testuser";
    pub const TEST_PASSWORD: &str = "TestPassword123";
}
