//! PostgreSQL-backed [`CaseIdStore`].

use datalab_core::case_id::CaseIdStore;
use datalab_core::error::CoreError;

use crate::repositories::{CaseIdCounterRepo, ServiceRequestRepo};
use crate::DbPool;

/// Draws sequence numbers from `case_id_counters` and checks candidates
/// against `service_requests`.
#[derive(Clone, Copy)]
pub struct PgCaseIdStore<'a> {
    pool: &'a DbPool,
}

impl<'a> PgCaseIdStore<'a> {
    pub fn new(pool: &'a DbPool) -> Self {
        Self { pool }
    }
}

impl CaseIdStore for PgCaseIdStore<'_> {
    async fn next_sequence(&self, year: i32) -> Result<u64, CoreError> {
        let value = CaseIdCounterRepo::next_value(self.pool, year)
            .await
            .map_err(|e| store_error("advance case id counter", e))?;
        u64::try_from(value)
            .map_err(|_| CoreError::Internal(format!("Case id counter went negative: {value}")))
    }

    async fn case_id_exists(&self, case_id: &str) -> Result<bool, CoreError> {
        ServiceRequestRepo::case_id_exists(self.pool, case_id)
            .await
            .map_err(|e| store_error("check case id", e))
    }
}

fn store_error(action: &str, err: sqlx::Error) -> CoreError {
    tracing::error!(error = %err, action, "Case id store failure");
    CoreError::Internal(format!("Failed to {action}: {err}"))
}
