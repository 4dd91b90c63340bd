//! Handlers for the `/service-requests` resource.
//!
//! Intake and tracking are public; listing and updates are staff-only.

use axum::extract::{Path, Query, State};
use axum::Json;
use chrono::{Datelike, Utc};
use datalab_core::case_id::{CaseIdGenerator, CaseIdStore};
use datalab_core::domain::{DbId, RequestStatus, Timestamp};
use datalab_core::error::CoreError;
use datalab_db::models::service_request::{
    CreateServiceRequest, ServiceRequest, ServiceRequestFilter, UpdateServiceRequest,
    CASE_ID_CONSTRAINT,
};
use datalab_db::repositories::ServiceRequestRepo;
use datalab_db::{is_unique_violation, DbPool, PgCaseIdStore};
use serde::Serialize;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::query::StatusListParams;
use crate::state::AppState;

/// Date format used for the customer-facing tracking view.
const TRACKING_DATE_FORMAT: &str = "%Y-%m-%d";

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct IntakeResponse {
    pub success: bool,
    pub message: &'static str,
    pub case_id: String,
    pub estimated_completion: Timestamp,
}

/// What a customer sees when tracking a case. Contact details are omitted.
#[derive(Debug, Serialize)]
pub struct CaseTrackingResponse {
    pub case_id: String,
    pub device_type: String,
    pub status: String,
    /// Percentage derived from `status` at read time.
    pub progress: u8,
    pub created_at: String,
    pub estimated_completion: Option<String>,
    pub price: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct UpdateResponse {
    pub success: bool,
    pub message: &'static str,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/service-requests
///
/// Accept an intake, compute the SLA deadline from its urgency and store it
/// under a freshly minted case id.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateServiceRequest>,
) -> AppResult<Json<IntakeResponse>> {
    input.validate()?;

    let now = Utc::now();
    let estimated_completion = state
        .config
        .estimation
        .sla
        .estimated_completion(input.urgency, now)?;

    let record = insert_with_fresh_case_id(
        &state.pool,
        &state.case_ids,
        &PgCaseIdStore::new(&state.pool),
        &input,
        now.year(),
        estimated_completion,
    )
    .await?;

    tracing::info!(
        case_id = %record.case_id,
        device_type = %input.device_type,
        urgency = %input.urgency,
        "Service request created",
    );

    Ok(Json(IntakeResponse {
        success: true,
        message: "Service request created successfully",
        case_id: record.case_id,
        estimated_completion,
    }))
}

/// GET /api/service-requests/{case_id}
pub async fn get_by_case_id(
    State(state): State<AppState>,
    Path(case_id): Path<String>,
) -> AppResult<Json<CaseTrackingResponse>> {
    let record = ServiceRequestRepo::find_by_case_id(&state.pool, &case_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Service request", &case_id)))?;

    let progress = state
        .config
        .estimation
        .progress
        .calculate_progress(&record.status);

    Ok(Json(CaseTrackingResponse {
        progress,
        created_at: record.created_at.format(TRACKING_DATE_FORMAT).to_string(),
        estimated_completion: record
            .estimated_completion
            .map(|d| d.format(TRACKING_DATE_FORMAT).to_string()),
        price: record.price,
        case_id: record.case_id,
        device_type: record.device_type,
        status: record.status,
    }))
}

/// GET /api/service-requests?status=&limit=&offset=
pub async fn list(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Query(params): Query<StatusListParams<RequestStatus>>,
) -> AppResult<Json<Vec<ServiceRequest>>> {
    let filter = ServiceRequestFilter {
        status: params.status,
        limit: params.limit,
        offset: params.offset,
    };
    let records = ServiceRequestRepo::list(&state.pool, &filter).await?;
    Ok(Json(records))
}

/// PUT /api/service-requests/{id}
pub async fn update(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateServiceRequest>,
) -> AppResult<Json<UpdateResponse>> {
    if input.is_empty() {
        return Err(AppError::BadRequest("No valid fields to update".into()));
    }
    input.validate()?;

    let record = ServiceRequestRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Service request", id)))?;

    tracing::info!(
        id,
        case_id = %record.case_id,
        status = %record.status,
        by = %admin.subject,
        "Service request updated",
    );

    Ok(Json(UpdateResponse {
        success: true,
        message: "Service request updated successfully",
    }))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Mint a case id and insert the record, re-minting when the unique
/// constraint rejects the candidate. A concurrent writer can claim a
/// candidate between the existence check and the insert.
///
/// All mints of one intake share a single budget of `max_attempts` counter
/// draws.
pub async fn insert_with_fresh_case_id<S>(
    pool: &DbPool,
    case_ids: &CaseIdGenerator,
    store: &S,
    input: &CreateServiceRequest,
    year: i32,
    estimated_completion: Timestamp,
) -> AppResult<ServiceRequest>
where
    S: CaseIdStore,
{
    let mut budget = case_ids.budget();

    loop {
        let case_id = case_ids.generate_within(store, year, &mut budget).await?;
        match ServiceRequestRepo::create(pool, input, case_id.as_str(), estimated_completion).await
        {
            Ok(record) => return Ok(record),
            Err(e) if is_unique_violation(&e, CASE_ID_CONSTRAINT) => {
                tracing::warn!(
                    %case_id,
                    remaining = budget.remaining(),
                    "Case id taken at insert, minting another",
                );
            }
            Err(e) => return Err(e.into()),
        }
    }
}
