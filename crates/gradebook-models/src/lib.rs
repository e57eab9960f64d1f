//! # Gradebook Models
//!
//! Domain models and DTOs for the Gradebook API: database entities,
//! request/response bodies and their validation rules.
//!
//! All JSON bodies use camelCase field names (`teacherId`, `studentIds`, ...).
//!
//! # Modules
//!
//! - [`ids`]: Strongly-typed integer ids
//! - [`auth`]: Registration and login bodies
//! - [`teachers`]: Teacher entity
//! - [`students`]: Student entity and DTOs
//! - [`subjects`]: Subject entity, enrollments and DTOs
//! - [`marks`]: Mark entity and DTOs

pub mod auth;
pub mod ids;
pub mod marks;
pub mod students;
pub mod subjects;
pub mod teachers;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub use auth::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse};
pub use ids::{MarkId, StudentId, SubjectId, TeacherId};
pub use marks::{Mark, MarkDto};
pub use students::{CreateStudentDto, Student, UpdateStudentDto};
pub use subjects::{Enrollment, Subject, SubjectDto, SubjectWithStudents};
pub use teachers::Teacher;

/// Plain confirmation body returned by delete endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
