//! Maps constraint violations reported by Postgres onto typed API errors.
//!
//! The database is the source of truth for uniqueness and referential
//! integrity; callers attempt the write and classify the failure here instead
//! of pre-checking.

use gradebook_core::AppError;

pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db_err) if db_err.is_unique_violation())
}

pub fn is_foreign_key_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db_err) if db_err.is_foreign_key_violation())
}

/// Converts a write error, letting the caller pick the errors for unique and
/// foreign-key violations. Anything else is an internal database error.
pub fn classify_write_error(
    err: sqlx::Error,
    on_unique: impl FnOnce() -> AppError,
    on_foreign_key: impl FnOnce() -> AppError,
) -> AppError {
    if is_unique_violation(&err) {
        on_unique()
    } else if is_foreign_key_violation(&err) {
        on_foreign_key()
    } else {
        AppError::database(err)
    }
}
