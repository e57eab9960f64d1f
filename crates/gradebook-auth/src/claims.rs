//! JWT claims carried by session tokens.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Claims embedded in a teacher's session token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Claims {
    /// Teacher id (subject claim), stored as a decimal string
    pub sub: String,
    /// Teacher's email address
    pub email: String,
    /// Token expiration timestamp (Unix timestamp)
    pub exp: usize,
    /// Token issued-at timestamp (Unix timestamp)
    pub iat: usize,
}

impl Claims {
    /// The teacher id in `sub`, or `None` if the subject is not numeric.
    pub fn teacher_id(&self) -> Option<i32> {
        self.sub.parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claims_serialize() {
        let claims = Claims {
            sub: "42".to_string(),
            email: "test@example.com".to_string(),
            exp: 1234567890,
            iat: 1234567800,
        };
        let serialized = serde_json::to_string(&claims).unwrap();
        assert!(serialized.contains(r#""sub":"42""#));
        assert!(serialized.contains(r#""email":"test@example.com""#));
    }

    #[test]
    fn test_claims_deserialize() {
        let json = r#"{"sub":"7","email":"user@test.com","exp":9999999999,"iat":9999999900}"#;
        let claims: Claims = serde_json::from_str(json).unwrap();
        assert_eq!(claims.teacher_id(), Some(7));
        assert_eq!(claims.email, "user@test.com");
        assert_eq!(claims.exp, 9999999999);
    }

    #[test]
    fn test_non_numeric_subject_has_no_teacher_id() {
        let claims = Claims {
            sub: "not-a-number".to_string(),
            email: "x@example.com".to_string(),
            exp: 0,
            iat: 0,
        };
        assert_eq!(claims.teacher_id(), None);
    }
}
