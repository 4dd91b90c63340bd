//! Handlers for the contact inbox.

use axum::extract::{Path, Query, State};
use axum::Json;
use datalab_core::domain::{ContactStatus, DbId, Timestamp};
use datalab_core::error::CoreError;
use datalab_db::models::contact_message::{
    ContactMessage, ContactMessageFilter, ContactStats, CreateContactMessage, UpdateContactStatus,
};
use datalab_db::repositories::ContactMessageRepo;
use serde::Serialize;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::query::StatusListParams;
use crate::state::AppState;

/// Acknowledgement returned to the sender.
#[derive(Debug, Serialize)]
pub struct ContactReceipt {
    pub message_id: DbId,
    pub status: &'static str,
    pub timestamp: Timestamp,
}

/// POST /api/contact
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateContactMessage>,
) -> AppResult<Json<ContactReceipt>> {
    input.validate()?;
    let message = ContactMessageRepo::create(&state.pool, &input).await?;
    tracing::info!(id = message.id, "Contact message received");
    Ok(Json(ContactReceipt {
        message_id: message.id,
        status: "received",
        timestamp: message.created_at,
    }))
}

/// GET /api/contact?status=&limit=&offset=
pub async fn list(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Query(params): Query<StatusListParams<ContactStatus>>,
) -> AppResult<Json<Vec<ContactMessage>>> {
    let filter = ContactMessageFilter {
        status: params.status,
        limit: params.limit,
        offset: params.offset,
    };
    let messages = ContactMessageRepo::list(&state.pool, &filter).await?;
    Ok(Json(messages))
}

/// GET /api/contact/stats
pub async fn stats(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<Json<ContactStats>> {
    Ok(Json(ContactMessageRepo::stats(&state.pool).await?))
}

/// PUT /api/contact/{id}/status
pub async fn update_status(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateContactStatus>,
) -> AppResult<Json<ContactMessage>> {
    let message = ContactMessageRepo::update_status(&state.pool, id, input.status)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Contact message", id)))?;
    Ok(Json(message))
}
