//! Mark entity and DTOs.
//!
//! A mark is a score bound to exactly one `(student, subject)` pair; the pair
//! is unique across all marks.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use gradebook_core::serde::i32_or_string;

use crate::ids::{MarkId, StudentId, SubjectId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Mark {
    pub id: MarkId,
    pub score: i32,
    pub student_id: StudentId,
    pub subject_id: SubjectId,
}

/// Body of `POST /marks` and `PUT /marks`. Updates are keyed by the pair.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MarkDto {
    #[serde(deserialize_with = "i32_or_string")]
    #[schema(example = 90)]
    pub score: i32,
    pub student_id: StudentId,
    pub subject_id: SubjectId,
}
