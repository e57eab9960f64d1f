//! # Gradebook Core
//!
//! Core types, errors, and utilities for the Gradebook API.
//!
//! - [`errors`]: Application error type and the typed [`ErrorKind`] taxonomy
//! - [`password`]: Password hashing and verification
//! - [`serde`]: Lenient deserializers for numeric request fields
//!
//! # Example
//!
//! ```ignore
//! use gradebook_core::{AppError, hash_password};
//!
//! let error = AppError::not_found(anyhow::anyhow!("Student not found"));
//! let hash = hash_password("secure_password")?;
//! ```

pub mod errors;
pub mod password;
pub mod serde;

// Re-export commonly used types at crate root
pub use errors::{AppError, ErrorKind, ErrorResponse};
pub use password::{hash_password, verify_password, verify_password_or_dummy};
