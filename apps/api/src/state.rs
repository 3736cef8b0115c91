use sqlx::PgPool;

use crate::config::Config;
use crate::inference::InferenceClient;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub inference: InferenceClient,
    /// Runtime settings, constructed once at startup.
    #[allow(dead_code)]
    pub config: Config,
}

#[cfg(test)]
impl AppState {
    /// State backed by a lazily-connected pool: usable by any test that
    /// never reaches the store (validation paths, health).
    pub fn for_tests() -> Self {
        let config = Config {
            db_host: "localhost".to_string(),
            db_user: "school".to_string(),
            db_password: "school".to_string(),
            db_name: "records_test".to_string(),
            hf_token: "hf_dummy".to_string(),
            port: 0,
            rust_log: "info".to_string(),
        };
        let db = sqlx::postgres::PgPoolOptions::new()
            .acquire_timeout(std::time::Duration::from_millis(200))
            .connect_lazy(&config.database_url())
            .unwrap();
        AppState {
            db,
            inference: InferenceClient::new(config.hf_token.clone()),
            config,
        }
    }
}
