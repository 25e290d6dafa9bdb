//! Server configuration from environment variables.

/// Runtime configuration, sourced from the environment (a `.env` file is
/// honored in development).
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub db_path: String,
    /// CORS allowlist; `None` means any origin.
    pub allowed_origins: Option<Vec<String>>,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let listen_addr =
            std::env::var("FISCUS_LISTEN_ADDR").unwrap_or_else(|_| "0.0.0.0:3001".to_string());
        let db_path = std::env::var("FISCUS_DB_PATH").unwrap_or_else(|_| "fiscus.db".to_string());
        let allowed_origins = std::env::var("FISCUS_ALLOWED_ORIGINS")
            .ok()
            .map(|origins| {
                origins
                    .split(',')
                    .map(|origin| origin.trim().to_string())
                    .filter(|origin| !origin.is_empty())
                    .collect::<Vec<_>>()
            })
            .filter(|origins| !origins.is_empty());
        Config {
            listen_addr,
            db_path,
            allowed_origins,
        }
    }
}
