use axum::{Json, extract::State};
use tracing::instrument;

use gradebook_core::{AppError, ErrorResponse};

use crate::state::AppState;
use crate::validator::{ValidatedJson, ValidatedPath};

use super::model::{Mark, MarkDto, MarkId, MessageResponse};
use super::service::MarkService;

#[utoipa::path(
    get,
    path = "/marks",
    responses(
        (status = 200, description = "All marks", body = Vec<Mark>),
        (status = 401, description = "Missing token", body = ErrorResponse),
        (status = 403, description = "Invalid or expired token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Marks"
)]
#[instrument(skip(state))]
pub async fn get_marks(State(state): State<AppState>) -> Result<Json<Vec<Mark>>, AppError> {
    let marks = MarkService::get_marks(&state.db).await?;
    Ok(Json(marks))
}

/// Record a mark for a student in a subject
#[utoipa::path(
    post,
    path = "/marks",
    request_body = MarkDto,
    responses(
        (status = 200, description = "Mark created", body = Mark),
        (status = 400, description = "Pair already marked, unknown student/subject or malformed body", body = ErrorResponse),
        (status = 401, description = "Missing token", body = ErrorResponse),
        (status = 403, description = "Invalid or expired token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Marks"
)]
#[instrument(skip(state, dto))]
pub async fn create_mark(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<MarkDto>,
) -> Result<Json<Mark>, AppError> {
    let mark = MarkService::create_mark(&state.db, dto).await?;
    Ok(Json(mark))
}

/// Change the score of an existing mark, located by student and subject
#[utoipa::path(
    put,
    path = "/marks",
    request_body = MarkDto,
    responses(
        (status = 200, description = "Mark updated", body = Mark),
        (status = 400, description = "Malformed body", body = ErrorResponse),
        (status = 401, description = "Missing token", body = ErrorResponse),
        (status = 403, description = "Invalid or expired token", body = ErrorResponse),
        (status = 404, description = "No mark for this student and subject", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Marks"
)]
#[instrument(skip(state, dto))]
pub async fn update_mark(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<MarkDto>,
) -> Result<Json<Mark>, AppError> {
    let mark = MarkService::update_mark(&state.db, dto).await?;
    Ok(Json(mark))
}

#[utoipa::path(
    delete,
    path = "/marks/{id}",
    params(
        ("id" = i32, Path, description = "Mark ID")
    ),
    responses(
        (status = 200, description = "Mark deleted", body = MessageResponse),
        (status = 401, description = "Missing token", body = ErrorResponse),
        (status = 403, description = "Invalid or expired token", body = ErrorResponse),
        (status = 404, description = "Mark not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Marks"
)]
#[instrument(skip(state))]
pub async fn delete_mark(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<MarkId>,
) -> Result<Json<MessageResponse>, AppError> {
    MarkService::delete_mark(&state.db, id).await?;
    Ok(Json(MessageResponse::new("Mark deleted")))
}
