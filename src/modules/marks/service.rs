use anyhow::Context;
use sqlx::PgPool;
use tracing::instrument;

use gradebook_core::AppError;
use gradebook_observability::track_mark_created;

use gradebook_db::errors::classify_write_error;

use super::model::{Mark, MarkDto, MarkId};

pub struct MarkService;

impl MarkService {
    #[instrument(skip(db))]
    pub async fn get_marks(db: &PgPool) -> Result<Vec<Mark>, AppError> {
        let marks = sqlx::query_as::<_, Mark>(
            "SELECT id, score, student_id, subject_id FROM marks ORDER BY id",
        )
        .fetch_all(db)
        .await
        .context("Failed to fetch marks")
        .map_err(AppError::database)?;

        Ok(marks)
    }

    /// Records a mark. `UNIQUE (student_id, subject_id)` rejects a second mark
    /// for the same pair, including concurrent ones.
    #[instrument(skip(db), fields(student_id = %dto.student_id, subject_id = %dto.subject_id))]
    pub async fn create_mark(db: &PgPool, dto: MarkDto) -> Result<Mark, AppError> {
        let mark = sqlx::query_as::<_, Mark>(
            "INSERT INTO marks (score, student_id, subject_id)
             VALUES ($1, $2, $3)
             RETURNING id, score, student_id, subject_id",
        )
        .bind(dto.score)
        .bind(dto.student_id)
        .bind(dto.subject_id)
        .fetch_one(db)
        .await
        .map_err(|e| {
            classify_write_error(e, AppError::duplicate_mark, || {
                AppError::invalid_reference(anyhow::anyhow!("Student or subject does not exist"))
            })
        })?;

        track_mark_created();
        Ok(mark)
    }

    /// Sets the score of the mark identified by its (student, subject) pair.
    #[instrument(skip(db), fields(student_id = %dto.student_id, subject_id = %dto.subject_id))]
    pub async fn update_mark(db: &PgPool, dto: MarkDto) -> Result<Mark, AppError> {
        sqlx::query_as::<_, Mark>(
            "UPDATE marks SET score = $1
             WHERE student_id = $2 AND subject_id = $3
             RETURNING id, score, student_id, subject_id",
        )
        .bind(dto.score)
        .bind(dto.student_id)
        .bind(dto.subject_id)
        .fetch_optional(db)
        .await
        .context("Failed to update mark")
        .map_err(AppError::database)?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Mark not found")))
    }

    #[instrument(skip(db))]
    pub async fn delete_mark(db: &PgPool, id: MarkId) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM marks WHERE id = $1")
            .bind(id)
            .execute(db)
            .await
            .context("Failed to delete mark")
            .map_err(AppError::database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow::anyhow!("Mark not found")));
        }

        Ok(())
    }
}
