//! Repository for the `service_requests` table.

use datalab_core::domain::{DbId, Timestamp};
use datalab_core::pagination::{clamp_limit, clamp_offset, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
use sqlx::PgPool;

use crate::models::service_request::{
    CreateServiceRequest, ServiceRequest, ServiceRequestFilter, UpdateServiceRequest,
};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, case_id, name, email, phone, device_type, problem_description, \
                       urgency, status, estimated_completion, price, created_at, updated_at";

/// Provides CRUD operations for service requests.
pub struct ServiceRequestRepo;

impl ServiceRequestRepo {
    /// Insert a new request under an already-minted case ID, returning the
    /// created row. Fails with a unique violation on
    /// `uq_service_requests_case_id` if the case ID is taken.
    pub async fn create(
        pool: &PgPool,
        input: &CreateServiceRequest,
        case_id: &str,
        estimated_completion: Timestamp,
    ) -> Result<ServiceRequest, sqlx::Error> {
        let query = format!(
            "INSERT INTO service_requests \
                (case_id, name, email, phone, device_type, problem_description, urgency, \
                 estimated_completion) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ServiceRequest>(&query)
            .bind(case_id)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(input.device_type.as_str())
            .bind(&input.problem_description)
            .bind(input.urgency.as_str())
            .bind(estimated_completion)
            .fetch_one(pool)
            .await
    }

    /// Find a request by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<ServiceRequest>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM service_requests WHERE id = $1");
        sqlx::query_as::<_, ServiceRequest>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a request by its public case ID.
    pub async fn find_by_case_id(
        pool: &PgPool,
        case_id: &str,
    ) -> Result<Option<ServiceRequest>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM service_requests WHERE case_id = $1");
        sqlx::query_as::<_, ServiceRequest>(&query)
            .bind(case_id)
            .fetch_optional(pool)
            .await
    }

    pub async fn case_id_exists(pool: &PgPool, case_id: &str) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM service_requests WHERE case_id = $1)",
        )
        .bind(case_id)
        .fetch_one(pool)
        .await
    }

    /// List requests newest first, optionally filtered by status.
    pub async fn list(
        pool: &PgPool,
        filter: &ServiceRequestFilter,
    ) -> Result<Vec<ServiceRequest>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM service_requests \
             WHERE ($1::TEXT IS NULL OR status = $1) \
             ORDER BY created_at DESC, id DESC \
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, ServiceRequest>(&query)
            .bind(filter.status.map(|s| s.as_str()))
            .bind(clamp_limit(filter.limit, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE))
            .bind(clamp_offset(filter.offset))
            .fetch_all(pool)
            .await
    }

    /// Update a request. Only non-`None` fields are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateServiceRequest,
    ) -> Result<Option<ServiceRequest>, sqlx::Error> {
        let query = format!(
            "UPDATE service_requests SET \
                status = COALESCE($2, status), \
                estimated_completion = COALESCE($3, estimated_completion), \
                price = COALESCE($4, price), \
                updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ServiceRequest>(&query)
            .bind(id)
            .bind(input.status.map(|s| s.as_str()))
            .bind(input.estimated_completion)
            .bind(input.price)
            .fetch_optional(pool)
            .await
    }
}
