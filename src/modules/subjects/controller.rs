use axum::{Json, extract::State};
use tracing::instrument;

use gradebook_core::{AppError, ErrorResponse};

use crate::state::AppState;
use crate::validator::{ValidatedJson, ValidatedPath};

use super::model::{MessageResponse, SubjectDto, SubjectId, SubjectWithStudents};
use super::service::SubjectService;

/// Create a subject and enroll the given students
#[utoipa::path(
    post,
    path = "/subjects",
    request_body = SubjectDto,
    responses(
        (status = 200, description = "Subject created", body = SubjectWithStudents),
        (status = 400, description = "Unknown student id or malformed body", body = ErrorResponse),
        (status = 401, description = "Missing token", body = ErrorResponse),
        (status = 403, description = "Invalid or expired token", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Subjects"
)]
#[instrument(skip(state, dto))]
pub async fn create_subject(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<SubjectDto>,
) -> Result<Json<SubjectWithStudents>, AppError> {
    let subject = SubjectService::create_subject(&state.db, dto).await?;
    Ok(Json(subject))
}

/// List subjects with their enrolled students
#[utoipa::path(
    get,
    path = "/subjects",
    responses(
        (status = 200, description = "All subjects", body = Vec<SubjectWithStudents>),
        (status = 401, description = "Missing token", body = ErrorResponse),
        (status = 403, description = "Invalid or expired token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Subjects"
)]
#[instrument(skip(state))]
pub async fn get_subjects(
    State(state): State<AppState>,
) -> Result<Json<Vec<SubjectWithStudents>>, AppError> {
    let subjects = SubjectService::get_subjects(&state.db).await?;
    Ok(Json(subjects))
}

/// Rename a subject and replace its enrollments
#[utoipa::path(
    put,
    path = "/subjects/{id}",
    params(
        ("id" = i32, Path, description = "Subject ID")
    ),
    request_body = SubjectDto,
    responses(
        (status = 200, description = "Subject updated", body = SubjectWithStudents),
        (status = 400, description = "Unknown student id or malformed body", body = ErrorResponse),
        (status = 401, description = "Missing token", body = ErrorResponse),
        (status = 403, description = "Invalid or expired token", body = ErrorResponse),
        (status = 404, description = "Subject not found", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Subjects"
)]
#[instrument(skip(state, dto))]
pub async fn update_subject(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<SubjectId>,
    ValidatedJson(dto): ValidatedJson<SubjectDto>,
) -> Result<Json<SubjectWithStudents>, AppError> {
    let subject = SubjectService::update_subject(&state.db, id, dto).await?;
    Ok(Json(subject))
}

#[utoipa::path(
    delete,
    path = "/subjects/{id}",
    params(
        ("id" = i32, Path, description = "Subject ID")
    ),
    responses(
        (status = 200, description = "Subject, its marks and enrollments deleted", body = MessageResponse),
        (status = 401, description = "Missing token", body = ErrorResponse),
        (status = 403, description = "Invalid or expired token", body = ErrorResponse),
        (status = 404, description = "Subject not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Subjects"
)]
#[instrument(skip(state))]
pub async fn delete_subject(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<SubjectId>,
) -> Result<Json<MessageResponse>, AppError> {
    SubjectService::delete_subject(&state.db, id).await?;
    Ok(Json(MessageResponse::new("Subject deleted")))
}
