//! Application error type shared by every layer of the API.
//!
//! An [`AppError`] pairs a typed [`ErrorKind`] with the HTTP status it maps to
//! and an [`anyhow::Error`] carrying the message. Handlers return
//! `Result<_, AppError>` and axum turns the error into a JSON body of the form
//! `{"error": "<message>"}`.
//!
//! Server-side failures (`ErrorKind::Internal`) are logged here and the caller
//! only ever sees a generic message.

use anyhow::Error;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::json;
use utoipa::ToSchema;

const GENERIC_FAILURE: &str = "Internal server error";

/// The failure categories surfaced by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// No token, or a header that does not carry a bearer token.
    Unauthenticated,
    /// Token present but its signature, expiry or claims do not check out.
    InvalidToken,
    DuplicateEmail,
    InvalidCredentials,
    NotFound,
    /// A foreign id in the request does not exist.
    InvalidReference,
    /// A mark already exists for the (student, subject) pair.
    DuplicateMark,
    /// Request body failed to parse or validate.
    Validation,
    Internal,
}

impl ErrorKind {
    pub fn status(self) -> StatusCode {
        match self {
            ErrorKind::Unauthenticated | ErrorKind::InvalidCredentials => StatusCode::UNAUTHORIZED,
            ErrorKind::InvalidToken => StatusCode::FORBIDDEN,
            ErrorKind::DuplicateEmail => StatusCode::CONFLICT,
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::InvalidReference | ErrorKind::DuplicateMark => StatusCode::BAD_REQUEST,
            ErrorKind::Validation => StatusCode::UNPROCESSABLE_ENTITY,
            ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error body returned by every failing endpoint.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug)]
pub struct AppError {
    pub kind: ErrorKind,
    pub status: StatusCode,
    pub error: Error,
}

impl AppError {
    pub fn new<E>(kind: ErrorKind, err: E) -> Self
    where
        E: Into<Error>,
    {
        Self {
            kind,
            status: kind.status(),
            error: err.into(),
        }
    }

    /// Overrides the status while keeping the kind, e.g. a malformed JSON body
    /// is a validation failure answered with 400 rather than 422.
    pub fn with_status(mut self, status: StatusCode) -> Self {
        self.status = status;
        self
    }

    pub fn internal<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(ErrorKind::Internal, err)
    }

    pub fn database<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(ErrorKind::Internal, err)
    }

    pub fn not_found<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(ErrorKind::NotFound, err)
    }

    pub fn validation<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(ErrorKind::Validation, err)
    }

    pub fn invalid_reference<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(ErrorKind::InvalidReference, err)
    }

    pub fn duplicate_mark() -> Self {
        Self::new(
            ErrorKind::DuplicateMark,
            anyhow::anyhow!("Mark already exists for this student and subject"),
        )
    }

    pub fn duplicate_email() -> Self {
        Self::new(
            ErrorKind::DuplicateEmail,
            anyhow::anyhow!("A teacher with this email already exists"),
        )
    }

    pub fn invalid_credentials() -> Self {
        Self::new(
            ErrorKind::InvalidCredentials,
            anyhow::anyhow!("Invalid credentials"),
        )
    }

    pub fn unauthenticated(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unauthenticated, anyhow::anyhow!(message.into()))
    }

    pub fn invalid_token(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidToken, anyhow::anyhow!(message.into()))
    }

    pub fn message(&self) -> String {
        self.error.to_string()
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.error)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = if self.kind == ErrorKind::Internal {
            tracing::error!(error = ?self.error, "Request failed with internal error");
            GENERIC_FAILURE.to_string()
        } else {
            self.error.to_string()
        };

        let body = Json(json!({ "error": message }));

        (self.status, body).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<Error>,
{
    fn from(err: E) -> Self {
        AppError::internal(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn test_kind_status_mapping() {
        assert_eq!(ErrorKind::Unauthenticated.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(ErrorKind::InvalidToken.status(), StatusCode::FORBIDDEN);
        assert_eq!(ErrorKind::DuplicateEmail.status(), StatusCode::CONFLICT);
        assert_eq!(ErrorKind::InvalidCredentials.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(ErrorKind::NotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(ErrorKind::InvalidReference.status(), StatusCode::BAD_REQUEST);
        assert_eq!(ErrorKind::DuplicateMark.status(), StatusCode::BAD_REQUEST);
        assert_eq!(ErrorKind::Validation.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(ErrorKind::Internal.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_from_anyhow_is_internal() {
        let err: AppError = anyhow::anyhow!("boom").into();
        assert_eq!(err.kind, ErrorKind::Internal);
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_with_status_keeps_kind() {
        let err = AppError::validation(anyhow::anyhow!("Invalid request body"))
            .with_status(StatusCode::BAD_REQUEST);
        assert_eq!(err.kind, ErrorKind::Validation);
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_internal_error_hides_details() {
        let response = AppError::internal(anyhow::anyhow!("connection refused")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body["error"], GENERIC_FAILURE);
    }

    #[tokio::test]
    async fn test_client_error_keeps_message() {
        let response = AppError::duplicate_mark().into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(
            body["error"],
            "Mark already exists for this student and subject"
        );
    }
}
