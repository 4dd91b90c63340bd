use datalab_core::case_id::{CaseIdFormat, DEFAULT_MAX_ATTEMPTS, DEFAULT_PREFIX};
use datalab_core::config::EstimationConfig;

use crate::auth::jwt::JwtConfig;

/// Credentials of the single staff account.
#[derive(Debug, Clone)]
pub struct AdminCredentials {
    pub username: String,
    /// Argon2id PHC string, produced by the `hash-password` binary.
    pub password_hash: String,
}

/// Server configuration loaded from environment variables.
///
/// All fields except the secrets have defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    pub jwt: JwtConfig,
    pub admin: AdminCredentials,
    pub case_id_format: CaseIdFormat,
    /// Upper bound on case id minting attempts per intake.
    pub case_id_max_attempts: u32,
    /// Progress, SLA and pricing tables. Fixed for the life of the process.
    pub estimation: EstimationConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                  | Default                    |
    /// |--------------------------|----------------------------|
    /// | `HOST`                   | `0.0.0.0`                  |
    /// | `PORT`                   | `3000`                     |
    /// | `CORS_ORIGINS`           | `http://localhost:3000`    |
    /// | `REQUEST_TIMEOUT_SECS`   | `30`                       |
    /// | `ADMIN_USERNAME`         | `admin`                    |
    /// | `ADMIN_PASSWORD_HASH`    | **required**               |
    /// | `CASE_ID_PREFIX`         | `DL`                       |
    /// | `CASE_ID_MAX_ATTEMPTS`   | `10`                       |
    /// | `ESTIMATION_CONFIG_PATH` | built-in tables            |
    ///
    /// # Panics
    ///
    /// Panics on any malformed value so misconfiguration fails at startup.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:3000".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let admin = AdminCredentials {
            username: std::env::var("ADMIN_USERNAME").unwrap_or_else(|_| "admin".into()),
            password_hash: std::env::var("ADMIN_PASSWORD_HASH")
                .expect("ADMIN_PASSWORD_HASH must be set in the environment"),
        };

        let case_id_format = CaseIdFormat::new(
            std::env::var("CASE_ID_PREFIX").unwrap_or_else(|_| DEFAULT_PREFIX.into()),
        )
        .expect("CASE_ID_PREFIX must consist of ASCII letters");

        let case_id_max_attempts: u32 = std::env::var("CASE_ID_MAX_ATTEMPTS")
            .unwrap_or_else(|_| DEFAULT_MAX_ATTEMPTS.to_string())
            .parse()
            .expect("CASE_ID_MAX_ATTEMPTS must be a valid u32");

        let estimation = match std::env::var("ESTIMATION_CONFIG_PATH") {
            Ok(path) => load_estimation_config(&path),
            Err(_) => EstimationConfig::default(),
        };

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            jwt: JwtConfig::from_env(),
            admin,
            case_id_format,
            case_id_max_attempts,
            estimation,
        }
    }
}

fn load_estimation_config(path: &str) -> EstimationConfig {
    let raw = std::fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("Failed to read ESTIMATION_CONFIG_PATH '{path}': {e}"));
    let config = EstimationConfig::from_json(&raw)
        .unwrap_or_else(|e| panic!("Invalid estimation config '{path}': {e}"));
    tracing::info!(%path, "Loaded estimation tables");
    config
}
