//! Contact inbox model and DTOs.

use datalab_core::domain::{ContactStatus, DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `contact_messages` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ContactMessage {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for the public contact form.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateContactMessage {
    #[validate(length(min = 2, max = 100))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1, max = 200))]
    pub subject: String,
    #[validate(length(min = 10, max = 5000))]
    pub message: String,
}

/// Body of `PUT /contact/{id}/status`.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateContactStatus {
    pub status: ContactStatus,
}

/// Filter for the inbox listing.
#[derive(Debug, Clone, Default)]
pub struct ContactMessageFilter {
    pub status: Option<ContactStatus>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// Message counts per inbox status.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactStats {
    pub total: i64,
    pub new: i64,
    pub read: i64,
    pub replied: i64,
}
