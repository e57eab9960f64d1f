use sqlx::PgPool;

pub struct SystemService;

impl SystemService {
    /// True when the pool can round-trip `SELECT 1`.
    pub async fn database_reachable(db: &PgPool) -> bool {
        match gradebook_db::ping(db).await {
            Ok(()) => true,
            Err(e) => {
                tracing::error!(error = %e, "Health check failed to reach the database");
                false
            }
        }
    }
}
