//! Student entity and DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::ids::{StudentId, TeacherId};

/// A student, attributed to the teacher who created it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: StudentId,
    pub name: String,
    pub teacher_id: TeacherId,
    pub created_at: DateTime<Utc>,
}

/// Body of `POST /students`. The owning teacher comes from the session token.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateStudentDto {
    #[validate(length(min = 1, max = 255, message = "name must be 1-255 characters"))]
    #[schema(example = "Alice")]
    pub name: String,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateStudentDto {
    #[validate(length(min = 1, max = 255, message = "name must be 1-255 characters"))]
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_student_serializes_camel_case() {
        let student = Student {
            id: StudentId::new(1),
            name: "Alice".to_string(),
            teacher_id: TeacherId::new(3),
            created_at: Utc::now(),
        };
        let json = serde_json::to_value(&student).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["teacherId"], 3);
        assert!(json.get("teacher_id").is_none());
    }

    #[test]
    fn test_create_student_dto_validation() {
        assert!(
            CreateStudentDto {
                name: "Alice".to_string()
            }
            .validate()
            .is_ok()
        );
        assert!(
            CreateStudentDto {
                name: String::new()
            }
            .validate()
            .is_err()
        );
        assert!(
            UpdateStudentDto {
                name: "x".repeat(256)
            }
            .validate()
            .is_err()
        );
    }
}
