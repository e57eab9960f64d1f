use sqlx::PgPool;

use gradebook_core::AppError;
use gradebook_models::Teacher;

use crate::errors::is_unique_violation;

/// Inserts a teacher with an already hashed password. A taken email is
/// reported as [`AppError::duplicate_email`].
pub async fn insert_teacher(
    db: &PgPool,
    email: &str,
    password_hash: &str,
) -> Result<Teacher, AppError> {
    sqlx::query_as::<_, Teacher>(
        "INSERT INTO teachers (email, password)
         VALUES ($1, $2)
         RETURNING id, email, created_at",
    )
    .bind(email)
    .bind(password_hash)
    .fetch_one(db)
    .await
    .map_err(|e| {
        if is_unique_violation(&e) {
            AppError::duplicate_email()
        } else {
            AppError::database(e)
        }
    })
}
