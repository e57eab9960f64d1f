mod common;

use axum::http::{Method, StatusCode};
use common::{count_rows, create_mark, create_student, create_subject, get_auth_token, send};
use serde_json::{Value, json};
use sqlx::PgPool;

fn enrolled_ids(subject: &Value) -> Vec<i64> {
    subject["students"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["studentId"].as_i64().unwrap())
        .collect()
}

#[sqlx::test(migrations = "./migrations")]
async fn test_create_subject_enrolls_students(pool: PgPool) {
    let token = get_auth_token(&pool).await;
    let alice = create_student(&pool, &token, "Alice").await;
    let bob = create_student(&pool, &token, "Bob").await;

    let subject = create_subject(&pool, &token, "Math", &[bob, alice]).await;

    assert_eq!(subject["name"], "Math");
    assert_eq!(enrolled_ids(&subject), vec![alice, bob]);
    assert_eq!(subject["students"][0]["subjectId"], subject["id"]);
    assert_eq!(subject["students"][0]["student"]["name"], "Alice");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_create_subject_without_students(pool: PgPool) {
    let token = get_auth_token(&pool).await;

    let (status, body) = send(
        &pool,
        Method::POST,
        "/subjects",
        Some(&token),
        Some(json!({ "name": "Art" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["students"].as_array().unwrap().is_empty());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_duplicate_and_string_ids_enroll_once(pool: PgPool) {
    let token = get_auth_token(&pool).await;
    let alice = create_student(&pool, &token, "Alice").await;

    let (status, body) = send(
        &pool,
        Method::POST,
        "/subjects",
        Some(&token),
        Some(json!({ "name": "Math", "studentIds": [alice, alice.to_string()] })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(enrolled_ids(&body), vec![alice]);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_create_subject_with_unknown_student_is_atomic(pool: PgPool) {
    let token = get_auth_token(&pool).await;
    let alice = create_student(&pool, &token, "Alice").await;

    let (status, body) = send(
        &pool,
        Method::POST,
        "/subjects",
        Some(&token),
        Some(json!({ "name": "Math", "studentIds": [alice, 404] })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("404"));
    assert_eq!(count_rows(&pool, "subjects").await, 0);
    assert_eq!(count_rows(&pool, "subject_students").await, 0);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_list_subjects_nests_enrollments(pool: PgPool) {
    let token = get_auth_token(&pool).await;
    let alice = create_student(&pool, &token, "Alice").await;
    let bob = create_student(&pool, &token, "Bob").await;
    create_subject(&pool, &token, "Math", &[alice, bob]).await;
    create_subject(&pool, &token, "Art", &[bob]).await;
    create_subject(&pool, &token, "Music", &[]).await;

    let (status, body) = send(&pool, Method::GET, "/subjects", Some(&token), None).await;

    assert_eq!(status, StatusCode::OK);
    let subjects = body.as_array().unwrap();
    assert_eq!(subjects.len(), 3);
    assert_eq!(subjects[0]["name"], "Math");
    assert_eq!(enrolled_ids(&subjects[0]), vec![alice, bob]);
    assert_eq!(enrolled_ids(&subjects[1]), vec![bob]);
    assert!(enrolled_ids(&subjects[2]).is_empty());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_update_subject_replaces_enrollments(pool: PgPool) {
    let token = get_auth_token(&pool).await;
    let alice = create_student(&pool, &token, "Alice").await;
    let bob = create_student(&pool, &token, "Bob").await;
    let carol = create_student(&pool, &token, "Carol").await;
    let id = create_subject(&pool, &token, "Math", &[alice, bob]).await["id"]
        .as_i64()
        .unwrap();

    let (status, body) = send(
        &pool,
        Method::PUT,
        &format!("/subjects/{}", id),
        Some(&token),
        Some(json!({ "name": "Mathematics", "studentIds": [bob, carol] })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Mathematics");
    assert_eq!(enrolled_ids(&body), vec![bob, carol]);

    let stored: Vec<i32> = sqlx::query_scalar(
        "SELECT student_id FROM subject_students WHERE subject_id = $1 ORDER BY student_id",
    )
    .bind(id as i32)
    .fetch_all(&pool)
    .await
    .unwrap();
    assert_eq!(stored, vec![bob as i32, carol as i32]);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_update_subject_keeps_marks_of_unenrolled_students(pool: PgPool) {
    let token = get_auth_token(&pool).await;
    let alice = create_student(&pool, &token, "Alice").await;
    let id = create_subject(&pool, &token, "Math", &[alice]).await["id"]
        .as_i64()
        .unwrap();
    create_mark(&pool, &token, 88, alice, id).await;

    let (status, body) = send(
        &pool,
        Method::PUT,
        &format!("/subjects/{}", id),
        Some(&token),
        Some(json!({ "name": "Math", "studentIds": [] })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(enrolled_ids(&body).is_empty());
    assert_eq!(count_rows(&pool, "marks").await, 1);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_update_subject_with_unknown_student_rolls_back(pool: PgPool) {
    let token = get_auth_token(&pool).await;
    let alice = create_student(&pool, &token, "Alice").await;
    let id = create_subject(&pool, &token, "Math", &[alice]).await["id"]
        .as_i64()
        .unwrap();

    let (status, _) = send(
        &pool,
        Method::PUT,
        &format!("/subjects/{}", id),
        Some(&token),
        Some(json!({ "name": "Renamed", "studentIds": [999] })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let name: String = sqlx::query_scalar("SELECT name FROM subjects WHERE id = $1")
        .bind(id as i32)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(name, "Math");
    assert_eq!(count_rows(&pool, "subject_students").await, 1);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_update_missing_subject_is_not_found(pool: PgPool) {
    let token = get_auth_token(&pool).await;

    let (status, body) = send(
        &pool,
        Method::PUT,
        "/subjects/77",
        Some(&token),
        Some(json!({ "name": "Ghost", "studentIds": [] })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Subject not found");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_delete_subject_cascades(pool: PgPool) {
    let token = get_auth_token(&pool).await;
    let alice = create_student(&pool, &token, "Alice").await;
    let math = create_subject(&pool, &token, "Math", &[alice]).await["id"]
        .as_i64()
        .unwrap();
    let art = create_subject(&pool, &token, "Art", &[alice]).await["id"]
        .as_i64()
        .unwrap();
    create_mark(&pool, &token, 90, alice, math).await;
    create_mark(&pool, &token, 60, alice, art).await;

    let (status, _) = send(
        &pool,
        Method::DELETE,
        &format!("/subjects/{}", math),
        Some(&token),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let mark_subjects: Vec<i32> = sqlx::query_scalar("SELECT subject_id FROM marks")
        .fetch_all(&pool)
        .await
        .unwrap();
    assert_eq!(mark_subjects, vec![art as i32]);
    let enrollment_subjects: Vec<i32> = sqlx::query_scalar("SELECT subject_id FROM subject_students")
        .fetch_all(&pool)
        .await
        .unwrap();
    assert_eq!(enrollment_subjects, vec![art as i32]);
    assert_eq!(count_rows(&pool, "students").await, 1);

    let (again, _) = send(
        &pool,
        Method::DELETE,
        &format!("/subjects/{}", math),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(again, StatusCode::NOT_FOUND);
}
