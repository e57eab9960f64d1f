use sqlx::PgPool;

use gradebook_core::{AppError, hash_password};
use gradebook_db::teachers::insert_teacher;
use gradebook_models::Teacher;

/// Creates a teacher with a bcrypt-hashed password.
///
/// A taken email is reported as a duplicate, the same way `/register` does.
pub async fn create_teacher(db: &PgPool, email: &str, password: &str) -> Result<Teacher, AppError> {
    if email.trim().is_empty() || password.is_empty() {
        return Err(AppError::validation(anyhow::anyhow!(
            "email and password are required"
        )));
    }

    let hashed_password = hash_password(password)?;

    insert_teacher(db, email.trim(), &hashed_password).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use gradebook_core::{ErrorKind, verify_password};

    #[sqlx::test(migrations = "../../migrations")]
    async fn test_create_teacher_hashes_password(pool: PgPool) {
        let teacher = create_teacher(&pool, " admin@school.test ", "secret").await.unwrap();
        assert_eq!(teacher.email, "admin@school.test");

        let stored: String = sqlx::query_scalar("SELECT password FROM teachers WHERE id = $1")
            .bind(teacher.id)
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_ne!(stored, "secret");
        assert!(verify_password("secret", &stored).unwrap());
    }

    #[sqlx::test(migrations = "../../migrations")]
    async fn test_create_teacher_twice_is_duplicate_email(pool: PgPool) {
        create_teacher(&pool, "admin@school.test", "secret").await.unwrap();

        let err = create_teacher(&pool, "admin@school.test", "other")
            .await
            .unwrap_err();

        assert_eq!(err.kind, ErrorKind::DuplicateEmail);
    }

    #[sqlx::test(migrations = "../../migrations")]
    async fn test_create_teacher_requires_credentials(pool: PgPool) {
        let err = create_teacher(&pool, "  ", "secret").await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);

        let err = create_teacher(&pool, "admin@school.test", "").await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
    }
}
