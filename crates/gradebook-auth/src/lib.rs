//! # Gradebook Auth
//!
//! Session token types and JWT utilities for the Gradebook API.
//!
//! - [`claims`]: The claims a session token binds (teacher id and email)
//! - [`jwt`]: Token issuing and verification
//!
//! Verification is stateless: there is no server-side session table, a token
//! is valid exactly when its signature checks out and it has not expired.
//!
//! # Example
//!
//! ```ignore
//! use gradebook_auth::{create_session_token, verify_session_token};
//! use gradebook_config::JwtConfig;
//!
//! let config = JwtConfig::from_env();
//! let token = create_session_token(1, "teacher@example.com", &config)?;
//! let claims = verify_session_token(&token, &config)?;
//! assert_eq!(claims.teacher_id(), Some(1));
//! ```

pub mod claims;
pub mod jwt;

// Re-export commonly used types at crate root
pub use claims::Claims;
pub use jwt::{create_session_token, verify_session_token};
