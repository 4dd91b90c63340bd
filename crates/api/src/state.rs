use std::sync::Arc;

use datalab_core::case_id::CaseIdGenerator;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: datalab_db::DbPool,
    /// Server configuration, including the estimation tables.
    pub config: Arc<ServerConfig>,
    /// Case ID minting policy (prefix and retry bound).
    pub case_ids: Arc<CaseIdGenerator>,
}

impl AppState {
    pub fn new(pool: datalab_db::DbPool, config: ServerConfig) -> Self {
        let case_ids = CaseIdGenerator::new(config.case_id_format.clone(), config.case_id_max_attempts);
        Self {
            pool,
            config: Arc::new(config),
            case_ids: Arc::new(case_ids),
        }
    }
}
