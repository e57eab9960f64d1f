mod common;

use axum::http::{Method, StatusCode};
use common::send;
use sqlx::PgPool;

#[sqlx::test(migrations = "./migrations")]
async fn test_health_check_reports_ok(pool: PgPool) {
    let (status, body) = send(&pool, Method::GET, "/health", None, None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_openapi_document_is_public(pool: PgPool) {
    let (status, body) = send(&pool, Method::GET, "/api-docs/openapi.json", None, None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["info"]["title"], "Gradebook API");
    assert!(body["paths"]["/marks"].is_object());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_metrics_without_recorder_is_not_found(pool: PgPool) {
    let (status, body) = send(&pool, Method::GET, "/metrics", None, None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Metrics are disabled");
}
