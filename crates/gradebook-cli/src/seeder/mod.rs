//! Demo-data seeding.
//!
//! Everything is inserted in one transaction: either the whole data set
//! lands or nothing does.

pub mod generate;

use std::time::Instant;

use anyhow::Context;
use sqlx::{PgPool, Postgres, Transaction};

use gradebook_models::{StudentId, SubjectId, TeacherId};

use generate::{PlannedMark, plan_marks, student_names, subject_names};

#[derive(Debug, Clone, Copy)]
pub struct SeedConfig {
    pub students: usize,
    pub subjects: usize,
}

impl SeedConfig {
    pub fn new(students: usize, subjects: usize) -> Self {
        Self { students, subjects }
    }
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self::new(20, 5)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub students: usize,
    pub subjects: usize,
    pub enrollments: usize,
    pub marks: usize,
}

/// Resolves the owner of seeded students: the teacher with `email`, or the
/// first registered teacher when no email is given.
pub async fn find_teacher(db: &PgPool, email: Option<&str>) -> anyhow::Result<TeacherId> {
    let teacher = match email {
        Some(email) => sqlx::query_scalar::<_, TeacherId>("SELECT id FROM teachers WHERE email = $1")
            .bind(email)
            .fetch_optional(db)
            .await?
            .with_context(|| format!("No teacher with email {}", email))?,
        None => sqlx::query_scalar::<_, TeacherId>("SELECT id FROM teachers ORDER BY id LIMIT 1")
            .fetch_optional(db)
            .await?
            .context("No teachers found, run create-teacher first")?,
    };

    Ok(teacher)
}

pub async fn seed_database(
    db: &PgPool,
    teacher_id: TeacherId,
    config: SeedConfig,
) -> anyhow::Result<SeedSummary> {
    let start_time = Instant::now();
    println!("🌱 Starting database seeding...");
    println!("   - Students: {}", config.students);
    println!("   - Subjects: {}", config.subjects);

    let names = student_names(config.students);
    let titles = subject_names(config.subjects);
    let planned = plan_marks(config.students, config.subjects, &mut rand::thread_rng());

    let mut tx = db.begin().await?;

    let student_ids = insert_students(&mut tx, teacher_id, &names).await?;
    let subject_ids = insert_subjects(&mut tx, &titles).await?;
    let (enrollments, marks) =
        insert_enrollments_and_marks(&mut tx, &student_ids, &subject_ids, &planned).await?;

    tx.commit().await?;

    let summary = SeedSummary {
        students: student_ids.len(),
        subjects: subject_ids.len(),
        enrollments,
        marks,
    };

    println!(
        "   ✓ Inserted {} students, {} subjects, {} enrollments and {} marks in {:?}",
        summary.students,
        summary.subjects,
        summary.enrollments,
        summary.marks,
        start_time.elapsed()
    );

    Ok(summary)
}

async fn insert_students(
    tx: &mut Transaction<'_, Postgres>,
    teacher_id: TeacherId,
    names: &[String],
) -> anyhow::Result<Vec<StudentId>> {
    let ids = sqlx::query_scalar::<_, StudentId>(
        "INSERT INTO students (name, teacher_id)
         SELECT name, $2 FROM UNNEST($1::text[]) WITH ORDINALITY AS t(name, ord)
         ORDER BY ord
         RETURNING id",
    )
    .bind(names)
    .bind(teacher_id)
    .fetch_all(&mut **tx)
    .await
    .context("Failed to insert students")?;

    Ok(ids)
}

async fn insert_subjects(
    tx: &mut Transaction<'_, Postgres>,
    names: &[String],
) -> anyhow::Result<Vec<SubjectId>> {
    let ids = sqlx::query_scalar::<_, SubjectId>(
        "INSERT INTO subjects (name)
         SELECT name FROM UNNEST($1::text[]) WITH ORDINALITY AS t(name, ord)
         ORDER BY ord
         RETURNING id",
    )
    .bind(names)
    .fetch_all(&mut **tx)
    .await
    .context("Failed to insert subjects")?;

    Ok(ids)
}

async fn insert_enrollments_and_marks(
    tx: &mut Transaction<'_, Postgres>,
    student_ids: &[StudentId],
    subject_ids: &[SubjectId],
    planned: &[PlannedMark],
) -> anyhow::Result<(usize, usize)> {
    let mut students = Vec::with_capacity(planned.len());
    let mut subjects = Vec::with_capacity(planned.len());
    let mut scores = Vec::with_capacity(planned.len());

    for mark in planned {
        let (Some(student), Some(subject)) = (
            student_ids.get(mark.student_idx),
            subject_ids.get(mark.subject_idx),
        ) else {
            continue;
        };
        students.push(student.into_inner());
        subjects.push(subject.into_inner());
        scores.push(mark.score);
    }

    let enrollments = sqlx::query(
        "INSERT INTO subject_students (subject_id, student_id)
         SELECT * FROM UNNEST($1::int4[], $2::int4[])",
    )
    .bind(&subjects)
    .bind(&students)
    .execute(&mut **tx)
    .await
    .context("Failed to insert enrollments")?
    .rows_affected();

    let marks = sqlx::query(
        "INSERT INTO marks (score, student_id, subject_id)
         SELECT * FROM UNNEST($1::int4[], $2::int4[], $3::int4[])",
    )
    .bind(&scores)
    .bind(&students)
    .bind(&subjects)
    .execute(&mut **tx)
    .await
    .context("Failed to insert marks")?
    .rows_affected();

    Ok((enrollments as usize, marks as usize))
}

/// Deletes marks, enrollments, subjects and students, children first.
/// Teachers are kept.
pub async fn clear_seeded_data(db: &PgPool) -> anyhow::Result<SeedSummary> {
    let start_time = Instant::now();
    println!("🗑️  Clearing gradebook data...");

    let mut tx = db.begin().await?;

    let marks = sqlx::query("DELETE FROM marks").execute(&mut *tx).await?.rows_affected();
    let enrollments = sqlx::query("DELETE FROM subject_students")
        .execute(&mut *tx)
        .await?
        .rows_affected();
    let subjects = sqlx::query("DELETE FROM subjects")
        .execute(&mut *tx)
        .await?
        .rows_affected();
    let students = sqlx::query("DELETE FROM students")
        .execute(&mut *tx)
        .await?
        .rows_affected();

    tx.commit().await?;

    println!(
        "   ✓ Removed {} marks, {} enrollments, {} subjects and {} students in {:?}",
        marks,
        enrollments,
        subjects,
        students,
        start_time.elapsed()
    );

    Ok(SeedSummary {
        students: students as usize,
        subjects: subjects as usize,
        enrollments: enrollments as usize,
        marks: marks as usize,
    })
}
