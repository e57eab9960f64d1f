#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use gradebook::router::init_router;
use gradebook::state::AppState;
use gradebook_config::{CorsConfig, JwtConfig};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use sqlx::PgPool;
use tower::ServiceExt;
use uuid::Uuid;

pub const TEST_PASSWORD: &str = "testpass123";

pub fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: "integration-test-secret-0123456789abcdef".to_string(),
        token_expiry: 86_400,
    }
}

pub fn setup_test_app(pool: PgPool) -> axum::Router {
    let state = AppState::new(
        pool,
        test_jwt_config(),
        CorsConfig::from_origins("http://localhost:3000"),
    );
    init_router(state)
}

pub fn generate_unique_email() -> String {
    format!("test-{}@test.com", Uuid::new_v4())
}

/// Sends one request through a fresh router and returns the status and the
/// JSON body (`Value::Null` for an empty body).
pub async fn send(
    pool: &PgPool,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {}", token));
    }

    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_string(&body).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = setup_test_app(pool.clone())
        .oneshot(request)
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };

    (status, body)
}

pub async fn register(pool: &PgPool, email: &str, password: &str) -> (StatusCode, Value) {
    send(
        pool,
        Method::POST,
        "/register",
        None,
        Some(json!({ "email": email, "password": password })),
    )
    .await
}

pub async fn login(pool: &PgPool, email: &str, password: &str) -> (StatusCode, Value) {
    send(
        pool,
        Method::POST,
        "/login",
        None,
        Some(json!({ "email": email, "password": password })),
    )
    .await
}

/// Registers a fresh teacher and returns a session token for it.
pub async fn get_auth_token(pool: &PgPool) -> String {
    let email = generate_unique_email();
    let (status, _) = register(pool, &email, TEST_PASSWORD).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = login(pool, &email, TEST_PASSWORD).await;
    assert_eq!(status, StatusCode::OK);
    body["token"].as_str().unwrap().to_string()
}

pub async fn create_student(pool: &PgPool, token: &str, name: &str) -> i64 {
    let (status, body) = send(
        pool,
        Method::POST,
        "/students",
        Some(token),
        Some(json!({ "name": name })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "create student failed: {}", body);
    body["id"].as_i64().unwrap()
}

pub async fn create_subject(pool: &PgPool, token: &str, name: &str, student_ids: &[i64]) -> Value {
    let (status, body) = send(
        pool,
        Method::POST,
        "/subjects",
        Some(token),
        Some(json!({ "name": name, "studentIds": student_ids })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "create subject failed: {}", body);
    body
}

pub async fn create_mark(
    pool: &PgPool,
    token: &str,
    score: i64,
    student_id: i64,
    subject_id: i64,
) -> (StatusCode, Value) {
    send(
        pool,
        Method::POST,
        "/marks",
        Some(token),
        Some(json!({ "score": score, "studentId": student_id, "subjectId": subject_id })),
    )
    .await
}

pub async fn count_rows(pool: &PgPool, table: &str) -> i64 {
    sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {}", table))
        .fetch_one(pool)
        .await
        .unwrap()
}
