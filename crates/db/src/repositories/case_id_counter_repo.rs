//! Repository for the `case_id_counters` table.

use sqlx::PgPool;

/// Per-year sequence behind case IDs.
pub struct CaseIdCounterRepo;

impl CaseIdCounterRepo {
    /// Advance the counter for `year` and return the new value (1 for the
    /// first call of a year).
    ///
    /// A single upsert statement, so concurrent callers always receive
    /// distinct values.
    pub async fn next_value(pool: &PgPool, year: i32) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(
            "INSERT INTO case_id_counters (year, last_value) VALUES ($1, 1) \
             ON CONFLICT (year) DO UPDATE SET \
                last_value = case_id_counters.last_value + 1, \
                updated_at = NOW() \
             RETURNING last_value",
        )
        .bind(year)
        .fetch_one(pool)
        .await
    }
}
