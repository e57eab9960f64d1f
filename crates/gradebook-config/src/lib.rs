//! # Gradebook Config
//!
//! Configuration structures loaded from environment variables:
//!
//! - [`jwt`]: Session token signing configuration
//! - [`cors`]: CORS (Cross-Origin Resource Sharing) configuration
//! - [`server`]: Listen address and database pool sizing
//!
//! # Example
//!
//! ```ignore
//! use gradebook_config::{CorsConfig, JwtConfig, ServerConfig};
//!
//! let jwt_config = JwtConfig::from_env();
//! let cors_config = CorsConfig::from_env();
//! let server_config = ServerConfig::from_env();
//! ```

pub mod cors;
pub mod jwt;
pub mod server;

// Re-export commonly used types at crate root
pub use cors::CorsConfig;
pub use jwt::{JwtConfig, SESSION_TOKEN_TTL_SECS};
pub use server::ServerConfig;
