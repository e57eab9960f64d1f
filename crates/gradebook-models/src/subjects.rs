//! Subject entity, enrollment join rows and DTOs.
//!
//! A subject is listed together with its enrollments; each enrollment row
//! carries the `(subjectId, studentId)` pair and the enrolled student:
//!
//! ```json
//! {
//!   "id": 1,
//!   "name": "Math",
//!   "students": [
//!     { "subjectId": 1, "studentId": 4, "student": { "id": 4, "name": "Alice", ... } }
//!   ]
//! }
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::collections::{BTreeSet, HashMap};
use utoipa::ToSchema;
use validator::Validate;

use crate::ids::{StudentId, SubjectId, TeacherId};
use crate::students::Student;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Subject {
    pub id: SubjectId,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// One enrollment row with the enrolled student attached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Enrollment {
    pub subject_id: SubjectId,
    pub student_id: StudentId,
    pub student: Student,
}

/// Flat row of `subject_students JOIN students`.
#[derive(Debug, Clone, FromRow)]
pub struct EnrollmentRow {
    pub subject_id: SubjectId,
    pub student_id: StudentId,
    pub name: String,
    pub teacher_id: TeacherId,
    pub created_at: DateTime<Utc>,
}

impl From<EnrollmentRow> for Enrollment {
    fn from(row: EnrollmentRow) -> Self {
        Self {
            subject_id: row.subject_id,
            student_id: row.student_id,
            student: Student {
                id: row.student_id,
                name: row.name,
                teacher_id: row.teacher_id,
                created_at: row.created_at,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubjectWithStudents {
    pub id: SubjectId,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub students: Vec<Enrollment>,
}

impl SubjectWithStudents {
    /// Groups enrollment rows under their subjects, keeping the order of
    /// `subjects`. Rows whose subject is not in `subjects` are dropped.
    pub fn assemble(subjects: Vec<Subject>, rows: Vec<EnrollmentRow>) -> Vec<Self> {
        let mut by_subject: HashMap<SubjectId, Vec<Enrollment>> = HashMap::new();
        for row in rows {
            by_subject
                .entry(row.subject_id)
                .or_default()
                .push(Enrollment::from(row));
        }

        subjects
            .into_iter()
            .map(|subject| Self {
                students: by_subject.remove(&subject.id).unwrap_or_default(),
                id: subject.id,
                name: subject.name,
                created_at: subject.created_at,
            })
            .collect()
    }

    pub fn enrolled_student_ids(&self) -> Vec<StudentId> {
        self.students.iter().map(|e| e.student_id).collect()
    }
}

/// Body of `POST /subjects` and `PUT /subjects/{id}`.
///
/// On update, `studentIds` is the complete new enrollment set.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubjectDto {
    #[validate(length(min = 1, max = 255, message = "name must be 1-255 characters"))]
    #[schema(example = "Math")]
    pub name: String,
    #[serde(default)]
    #[schema(value_type = Vec<i32>)]
    pub student_ids: Vec<StudentId>,
}

impl SubjectDto {
    /// Distinct student ids as raw integers, ready to bind as `int4[]`.
    pub fn distinct_student_ids(&self) -> Vec<i32> {
        self.student_ids
            .iter()
            .map(|id| id.into_inner())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}
