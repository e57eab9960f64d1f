use anyhow::Context;
use sqlx::PgPool;
use tracing::instrument;

use gradebook_core::AppError;
use gradebook_models::TeacherId;

use gradebook_db::errors::is_foreign_key_violation;

use super::model::{CreateStudentDto, Student, StudentId, UpdateStudentDto};

pub struct StudentService;

impl StudentService {
    #[instrument(skip(db, dto))]
    pub async fn create_student(
        db: &PgPool,
        dto: CreateStudentDto,
        teacher_id: TeacherId,
    ) -> Result<Student, AppError> {
        let student = sqlx::query_as::<_, Student>(
            "INSERT INTO students (name, teacher_id)
             VALUES ($1, $2)
             RETURNING id, name, teacher_id, created_at",
        )
        .bind(&dto.name)
        .bind(teacher_id)
        .fetch_one(db)
        .await
        .map_err(|e| {
            if is_foreign_key_violation(&e) {
                AppError::invalid_reference(anyhow::anyhow!("Teacher does not exist"))
            } else {
                AppError::database(e)
            }
        })?;

        Ok(student)
    }

    /// Every student, regardless of which teacher created it.
    #[instrument(skip(db))]
    pub async fn get_students(db: &PgPool) -> Result<Vec<Student>, AppError> {
        let students = sqlx::query_as::<_, Student>(
            "SELECT id, name, teacher_id, created_at FROM students ORDER BY id",
        )
        .fetch_all(db)
        .await
        .context("Failed to fetch students")
        .map_err(AppError::database)?;

        Ok(students)
    }

    #[instrument(skip(db, dto))]
    pub async fn update_student(
        db: &PgPool,
        id: StudentId,
        dto: UpdateStudentDto,
    ) -> Result<Student, AppError> {
        sqlx::query_as::<_, Student>(
            "UPDATE students SET name = $1
             WHERE id = $2
             RETURNING id, name, teacher_id, created_at",
        )
        .bind(&dto.name)
        .bind(id)
        .fetch_optional(db)
        .await
        .context("Failed to update student")
        .map_err(AppError::database)?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Student not found")))
    }

    /// Removes a student together with its marks and enrollments.
    ///
    /// The student row is locked first so inserts referencing it wait for this
    /// transaction and then fail their foreign-key check.
    #[instrument(skip(db))]
    pub async fn delete_student(db: &PgPool, id: StudentId) -> Result<(), AppError> {
        let mut tx = db.begin().await.map_err(AppError::database)?;

        sqlx::query_scalar::<_, StudentId>("SELECT id FROM students WHERE id = $1 FOR UPDATE")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(AppError::database)?
            .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Student not found")))?;

        let marks = sqlx::query("DELETE FROM marks WHERE student_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(AppError::database)?
            .rows_affected();

        let enrollments = sqlx::query("DELETE FROM subject_students WHERE student_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(AppError::database)?
            .rows_affected();

        sqlx::query("DELETE FROM students WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(AppError::database)?;

        tx.commit().await.map_err(AppError::database)?;

        tracing::info!(student_id = %id, marks, enrollments, "Student deleted");
        Ok(())
    }
}
