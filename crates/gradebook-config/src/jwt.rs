use std::env;

/// Session tokens are valid for exactly one day.
pub const SESSION_TOKEN_TTL_SECS: i64 = 24 * 60 * 60;

const DEV_SECRET: &str = "gradebook-dev-secret-change-in-production";

#[derive(Clone, Debug)]
pub struct JwtConfig {
    pub secret: String,
    /// Token lifetime in seconds. Always [`SESSION_TOKEN_TTL_SECS`] when loaded
    /// from the environment; tests construct shorter or expired values directly.
    pub token_expiry: i64,
}

impl JwtConfig {
    pub fn from_env() -> Self {
        let secret = match env::var("JWT_SECRET") {
            Ok(secret) if !secret.trim().is_empty() => secret,
            _ => {
                tracing::warn!("JWT_SECRET is not set, falling back to the development secret");
                DEV_SECRET.to_string()
            }
        };

        Self {
            secret,
            token_expiry: SESSION_TOKEN_TTL_SECS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ttl_is_one_day() {
        assert_eq!(SESSION_TOKEN_TTL_SECS, 86_400);
    }
}
