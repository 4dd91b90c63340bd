//! Repository for the `contact_messages` table.

use datalab_core::domain::{ContactStatus, DbId};
use datalab_core::pagination::{clamp_limit, clamp_offset, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
use sqlx::PgPool;

use crate::models::contact_message::{
    ContactMessage, ContactMessageFilter, ContactStats, CreateContactMessage,
};

const COLUMNS: &str = "id, name, email, subject, message, status, created_at, updated_at";

pub struct ContactMessageRepo;

impl ContactMessageRepo {
    /// Store an inbound message with status `new`.
    pub async fn create(
        pool: &PgPool,
        input: &CreateContactMessage,
    ) -> Result<ContactMessage, sqlx::Error> {
        let query = format!(
            "INSERT INTO contact_messages (name, email, subject, message) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ContactMessage>(&query)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.subject)
            .bind(&input.message)
            .fetch_one(pool)
            .await
    }

    /// List messages newest first, optionally filtered by status.
    pub async fn list(
        pool: &PgPool,
        filter: &ContactMessageFilter,
    ) -> Result<Vec<ContactMessage>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM contact_messages \
             WHERE ($1::TEXT IS NULL OR status = $1) \
             ORDER BY created_at DESC, id DESC \
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, ContactMessage>(&query)
            .bind(filter.status.map(|s| s.as_str()))
            .bind(clamp_limit(filter.limit, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE))
            .bind(clamp_offset(filter.offset))
            .fetch_all(pool)
            .await
    }

    /// Move a message to a new inbox status.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update_status(
        pool: &PgPool,
        id: DbId,
        status: ContactStatus,
    ) -> Result<Option<ContactMessage>, sqlx::Error> {
        let query = format!(
            "UPDATE contact_messages SET status = $2, updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ContactMessage>(&query)
            .bind(id)
            .bind(status.as_str())
            .fetch_optional(pool)
            .await
    }

    /// Count messages per status.
    pub async fn stats(pool: &PgPool) -> Result<ContactStats, sqlx::Error> {
        let rows = sqlx::query_as::<_, (String, i64)>(
            "SELECT status, COUNT(*) FROM contact_messages GROUP BY status",
        )
        .fetch_all(pool)
        .await?;

        let mut stats = ContactStats::default();
        for (status, count) in rows {
            stats.total += count;
            match status.parse::<ContactStatus>() {
                Ok(ContactStatus::New) => stats.new = count,
                Ok(ContactStatus::Read) => stats.read = count,
                Ok(ContactStatus::Replied) => stats.replied = count,
                Err(_) => tracing::warn!(%status, count, "Unexpected contact message status"),
            }
        }
        Ok(stats)
    }
}
