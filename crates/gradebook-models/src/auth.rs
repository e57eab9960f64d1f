//! Registration and login bodies.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::teachers::Teacher;

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct RegisterRequest {
    #[validate(email(message = "email must be a valid email address"))]
    #[schema(example = "teacher@example.com")]
    pub email: String,
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RegisterResponse {
    pub teacher: Teacher,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(email(message = "email must be a valid email address"))]
    pub email: String,
    #[validate(length(min = 1, message = "password is required"))]
    #[schema(example = "password123")]
    pub password: String,
}

/// Successful login: an opaque bearer token valid for 24 hours.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginResponse {
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_request_accepts_short_password() {
        let dto = RegisterRequest {
            email: "a@x.com".to_string(),
            password: "pw".to_string(),
        };
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_register_request_rejects_bad_email() {
        let dto = RegisterRequest {
            email: "not-an-email".to_string(),
            password: "pw".to_string(),
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_login_request_rejects_empty_password() {
        let dto = LoginRequest {
            email: "a@x.com".to_string(),
            password: String::new(),
        };
        assert!(dto.validate().is_err());
    }
}
