use anyhow::Context;
use sqlx::{PgConnection, PgPool};
use tracing::instrument;

use gradebook_core::AppError;

use gradebook_db::errors::is_foreign_key_violation;

use super::model::{EnrollmentRow, Subject, SubjectDto, SubjectId, SubjectWithStudents};

pub struct SubjectService;

impl SubjectService {
    #[instrument(skip(db, dto), fields(name = %dto.name))]
    pub async fn create_subject(
        db: &PgPool,
        dto: SubjectDto,
    ) -> Result<SubjectWithStudents, AppError> {
        let student_ids = dto.distinct_student_ids();
        let mut tx = db.begin().await.map_err(AppError::database)?;

        let subject = sqlx::query_as::<_, Subject>(
            "INSERT INTO subjects (name) VALUES ($1) RETURNING id, name, created_at",
        )
        .bind(&dto.name)
        .fetch_one(&mut *tx)
        .await
        .map_err(AppError::database)?;

        enroll_students(&mut tx, subject.id, &student_ids).await?;
        let rows = enrollment_rows(&mut tx, subject.id).await?;

        tx.commit().await.map_err(AppError::database)?;

        tracing::info!(subject_id = %subject.id, enrolled = rows.len(), "Subject created");
        Ok(with_students(subject, rows))
    }

    /// All subjects with their enrollments, read from one snapshot.
    #[instrument(skip(db))]
    pub async fn get_subjects(db: &PgPool) -> Result<Vec<SubjectWithStudents>, AppError> {
        let mut tx = db.begin().await.map_err(AppError::database)?;

        sqlx::query("SET TRANSACTION ISOLATION LEVEL REPEATABLE READ, READ ONLY")
            .execute(&mut *tx)
            .await
            .map_err(AppError::database)?;

        let subjects = sqlx::query_as::<_, Subject>(
            "SELECT id, name, created_at FROM subjects ORDER BY id",
        )
        .fetch_all(&mut *tx)
        .await
        .context("Failed to fetch subjects")
        .map_err(AppError::database)?;

        let rows = sqlx::query_as::<_, EnrollmentRow>(
            "SELECT ss.subject_id, ss.student_id, s.name, s.teacher_id, s.created_at
             FROM subject_students ss
             JOIN students s ON s.id = ss.student_id
             ORDER BY ss.subject_id, ss.student_id",
        )
        .fetch_all(&mut *tx)
        .await
        .context("Failed to fetch enrollments")
        .map_err(AppError::database)?;

        tx.commit().await.map_err(AppError::database)?;

        Ok(SubjectWithStudents::assemble(subjects, rows))
    }

    /// Renames the subject and replaces its enrollment set with
    /// `dto.student_ids`. Marks of students dropped from the set are kept.
    #[instrument(skip(db, dto))]
    pub async fn update_subject(
        db: &PgPool,
        id: SubjectId,
        dto: SubjectDto,
    ) -> Result<SubjectWithStudents, AppError> {
        let student_ids = dto.distinct_student_ids();
        let mut tx = db.begin().await.map_err(AppError::database)?;

        let subject = sqlx::query_as::<_, Subject>(
            "UPDATE subjects SET name = $1 WHERE id = $2 RETURNING id, name, created_at",
        )
        .bind(&dto.name)
        .bind(id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(AppError::database)?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Subject not found")))?;

        sqlx::query("DELETE FROM subject_students WHERE subject_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(AppError::database)?;

        enroll_students(&mut tx, id, &student_ids).await?;
        let rows = enrollment_rows(&mut tx, id).await?;

        tx.commit().await.map_err(AppError::database)?;

        tracing::info!(subject_id = %id, enrolled = rows.len(), "Subject updated");
        Ok(with_students(subject, rows))
    }

    /// Removes a subject together with its marks and enrollments.
    #[instrument(skip(db))]
    pub async fn delete_subject(db: &PgPool, id: SubjectId) -> Result<(), AppError> {
        let mut tx = db.begin().await.map_err(AppError::database)?;

        sqlx::query_scalar::<_, SubjectId>("SELECT id FROM subjects WHERE id = $1 FOR UPDATE")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(AppError::database)?
            .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Subject not found")))?;

        let marks = sqlx::query("DELETE FROM marks WHERE subject_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(AppError::database)?
            .rows_affected();

        let enrollments = sqlx::query("DELETE FROM subject_students WHERE subject_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(AppError::database)?
            .rows_affected();

        sqlx::query("DELETE FROM subjects WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(AppError::database)?;

        tx.commit().await.map_err(AppError::database)?;

        tracing::info!(subject_id = %id, marks, enrollments, "Subject deleted");
        Ok(())
    }
}

/// Inserts one enrollment per id. Unknown ids fail the whole call with an
/// `InvalidReference` naming them.
async fn enroll_students(
    conn: &mut PgConnection,
    subject_id: SubjectId,
    student_ids: &[i32],
) -> Result<(), AppError> {
    if student_ids.is_empty() {
        return Ok(());
    }

    // FOR KEY SHARE keeps the students from being deleted before the insert.
    let existing: Vec<i32> = sqlx::query_scalar(
        "SELECT id FROM students WHERE id = ANY($1) ORDER BY id FOR KEY SHARE",
    )
    .bind(student_ids)
    .fetch_all(&mut *conn)
    .await
    .map_err(AppError::database)?;

    let missing: Vec<String> = student_ids
        .iter()
        .filter(|id| !existing.contains(id))
        .map(|id| id.to_string())
        .collect();

    if !missing.is_empty() {
        return Err(AppError::invalid_reference(anyhow::anyhow!(
            "Students not found: {}",
            missing.join(", ")
        )));
    }

    sqlx::query(
        "INSERT INTO subject_students (subject_id, student_id)
         SELECT $1, student_id FROM UNNEST($2::int4[]) AS t(student_id)",
    )
    .bind(subject_id)
    .bind(student_ids)
    .execute(&mut *conn)
    .await
    .map_err(|e| {
        if is_foreign_key_violation(&e) {
            AppError::invalid_reference(anyhow::anyhow!("Subject or student does not exist"))
        } else {
            AppError::database(e)
        }
    })?;

    Ok(())
}

async fn enrollment_rows(
    conn: &mut PgConnection,
    subject_id: SubjectId,
) -> Result<Vec<EnrollmentRow>, AppError> {
    sqlx::query_as::<_, EnrollmentRow>(
        "SELECT ss.subject_id, ss.student_id, s.name, s.teacher_id, s.created_at
         FROM subject_students ss
         JOIN students s ON s.id = ss.student_id
         WHERE ss.subject_id = $1
         ORDER BY ss.student_id",
    )
    .bind(subject_id)
    .fetch_all(&mut *conn)
    .await
    .context("Failed to fetch enrollments")
    .map_err(AppError::database)
}

fn with_students(subject: Subject, rows: Vec<EnrollmentRow>) -> SubjectWithStudents {
    SubjectWithStudents {
        id: subject.id,
        name: subject.name,
        created_at: subject.created_at,
        students: rows.into_iter().map(Into::into).collect(),
    }
}
