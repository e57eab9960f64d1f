//! Session token issuing and verification.
//!
//! Tokens are HS256 JWTs signed with [`JwtConfig::secret`]. A token binds the
//! teacher id and email and expires [`JwtConfig::token_expiry`] seconds after
//! it was issued.

use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};

use gradebook_config::JwtConfig;
use gradebook_core::AppError;

use crate::claims::Claims;

/// Issues a session token for a teacher.
///
/// # Errors
///
/// Returns an internal error if encoding fails.
pub fn create_session_token(
    teacher_id: i32,
    email: &str,
    jwt_config: &JwtConfig,
) -> Result<String, AppError> {
    let now = Utc::now().timestamp();
    let exp = (now + jwt_config.token_expiry).max(0) as usize;

    let claims = Claims {
        sub: teacher_id.to_string(),
        email: email.to_string(),
        exp,
        iat: now as usize,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_config.secret.as_bytes()),
    )
    .map_err(|e| AppError::internal(anyhow::anyhow!("Failed to create token: {}", e)))
}

/// Verifies a session token's signature and expiry and returns its claims.
///
/// Any failure (bad signature, expired, garbled, non-numeric subject) is an
/// `InvalidToken` error. Callers decide earlier whether a token was supplied
/// at all.
pub fn verify_session_token(token: &str, jwt_config: &JwtConfig) -> Result<Claims, AppError> {
    let claims = decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt_config.secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|_| AppError::invalid_token("Invalid or expired token"))?;

    if claims.teacher_id().is_none() {
        return Err(AppError::invalid_token("Invalid subject in token"));
    }

    Ok(claims)
}
