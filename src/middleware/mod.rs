//! Authentication middleware and extractors.
//!
//! Protected routers are wrapped with [`auth::require_auth`]:
//!
//! 1. Client sends `Authorization: Bearer <token>`
//! 2. No usable token yields 401, a token that fails verification 403
//! 3. On success the [`auth::AuthUser`] is stored in the request extensions
//!    and handlers can take it as an extractor
//!
//! ```ignore
//! use crate::middleware::auth::AuthUser;
//!
//! async fn create_student(auth_user: AuthUser) -> impl IntoResponse {
//!     // auth_user.teacher_id owns the new student
//! }
//! ```

pub mod auth;
