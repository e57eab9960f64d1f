use gradebook_config::{CorsConfig, JwtConfig, ServerConfig};
use gradebook_observability::PrometheusHandle;
use sqlx::PgPool;

/// Shared, immutable application state cloned into every handler.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub jwt_config: JwtConfig,
    pub cors_config: CorsConfig,
    pub metrics: Option<PrometheusHandle>,
}

impl AppState {
    pub fn new(db: PgPool, jwt_config: JwtConfig, cors_config: CorsConfig) -> Self {
        Self {
            db,
            jwt_config,
            cors_config,
            metrics: None,
        }
    }

    pub fn with_metrics(mut self, handle: Option<PrometheusHandle>) -> Self {
        self.metrics = handle;
        self
    }
}

/// Connects the pool and loads configuration from the environment.
pub async fn init_app_state(server_config: &ServerConfig) -> anyhow::Result<AppState> {
    let database_url = server_config
        .database_url
        .as_deref()
        .ok_or_else(|| anyhow::anyhow!("DATABASE_URL must be set"))?;

    let db =
        gradebook_db::init_db_pool(database_url, server_config.database_max_connections).await?;

    Ok(AppState::new(
        db,
        JwtConfig::from_env(),
        CorsConfig::from_env(),
    ))
}
