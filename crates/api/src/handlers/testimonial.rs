//! Handlers for testimonials.
//!
//! The public list only ever shows active entries. Deletion is a soft
//! deactivation; staff can reactivate through the update endpoint.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use datalab_core::domain::DbId;
use datalab_core::error::CoreError;
use datalab_db::models::testimonial::{CreateTestimonial, Testimonial, UpdateTestimonial};
use datalab_db::repositories::TestimonialRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

/// GET /api/testimonials
pub async fn list_active(State(state): State<AppState>) -> AppResult<Json<Vec<Testimonial>>> {
    let testimonials = TestimonialRepo::list(&state.pool, false).await?;
    Ok(Json(testimonials))
}

/// POST /api/testimonials
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateTestimonial>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    let testimonial = TestimonialRepo::create(&state.pool, &input).await?;
    tracing::info!(id = testimonial.id, rating = testimonial.rating, "Testimonial submitted");
    Ok((StatusCode::CREATED, Json(testimonial)))
}

/// GET /api/admin/testimonials
///
/// Every testimonial, including deactivated ones.
pub async fn list_all(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<Testimonial>>> {
    let testimonials = TestimonialRepo::list(&state.pool, true).await?;
    Ok(Json(testimonials))
}

/// PUT /api/testimonials/{id}
pub async fn update(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateTestimonial>,
) -> AppResult<Json<Testimonial>> {
    if input.is_empty() {
        return Err(AppError::BadRequest("No valid fields to update".into()));
    }
    input.validate()?;
    let testimonial = TestimonialRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Testimonial", id)))?;
    Ok(Json(testimonial))
}

/// DELETE /api/testimonials/{id}
///
/// Deactivating an already inactive testimonial succeeds; an unknown id is 404.
pub async fn deactivate(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if TestimonialRepo::deactivate(&state.pool, id).await? {
        tracing::info!(id, "Testimonial deactivated");
        return Ok(StatusCode::NO_CONTENT);
    }

    TestimonialRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Testimonial", id)))?;
    Ok(StatusCode::NO_CONTENT)
}
