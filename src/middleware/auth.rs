use axum::{
    extract::{FromRequestParts, Request, State},
    http::{HeaderMap, header, request::Parts},
    middleware::Next,
    response::Response,
};

use gradebook_auth::verify_session_token;
use gradebook_config::JwtConfig;
use gradebook_core::AppError;
use gradebook_models::TeacherId;

use crate::state::AppState;

/// The teacher a request was authenticated as.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthUser {
    pub teacher_id: TeacherId,
    pub email: String,
}

/// Pulls the token out of an `Authorization: Bearer <token>` header.
///
/// A missing header, a non-bearer scheme or an empty token all count as "no
/// token supplied".
pub fn bearer_token(headers: &HeaderMap) -> Result<&str, AppError> {
    let value = headers
        .get(header::AUTHORIZATION)
        .ok_or_else(|| AppError::unauthenticated("Missing authorization header"))?
        .to_str()
        .map_err(|_| AppError::unauthenticated("Invalid authorization header format"))?;

    let (scheme, token) = value
        .split_once(' ')
        .ok_or_else(|| AppError::unauthenticated("Invalid authorization header format"))?;

    if !scheme.eq_ignore_ascii_case("bearer") {
        return Err(AppError::unauthenticated(
            "Invalid authorization header format",
        ));
    }

    let token = token.trim();
    if token.is_empty() {
        return Err(AppError::unauthenticated("Missing bearer token"));
    }

    Ok(token)
}

pub fn authenticate(headers: &HeaderMap, jwt_config: &JwtConfig) -> Result<AuthUser, AppError> {
    let token = bearer_token(headers)?;
    let claims = verify_session_token(token, jwt_config)?;

    let teacher_id = claims
        .teacher_id()
        .ok_or_else(|| AppError::invalid_token("Invalid subject in token"))?;

    Ok(AuthUser {
        teacher_id: TeacherId::new(teacher_id),
        email: claims.email,
    })
}

/// Rejects requests without a valid session token and stores the
/// [`AuthUser`] in the request extensions for handlers further down.
///
/// ```rust,ignore
/// let students = init_students_router()
///     .route_layer(middleware::from_fn_with_state(state.clone(), require_auth));
/// ```
pub async fn require_auth(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let auth_user = authenticate(req.headers(), &state.jwt_config)?;
    tracing::debug!(teacher_id = %auth_user.teacher_id, "Request authenticated");

    req.extensions_mut().insert(auth_user);
    Ok(next.run(req).await)
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        if let Some(auth_user) = parts.extensions.get::<AuthUser>() {
            return Ok(auth_user.clone());
        }

        authenticate(&parts.headers, &state.jwt_config)
    }
}
