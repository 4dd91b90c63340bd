//! Service request model and DTOs.
//!
//! Enum-valued columns are stored as their text form and surfaced as
//! `String` on the row so that reads never fail on an unexpected value;
//! inbound DTOs use the typed enums so bad input is rejected at the edge.

use datalab_core::domain::{DbId, DeviceType, RequestStatus, Timestamp, Urgency};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Unique constraint guarding `service_requests.case_id`.
pub const CASE_ID_CONSTRAINT: &str = "uq_service_requests_case_id";

/// A row from the `service_requests` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ServiceRequest {
    pub id: DbId,
    pub case_id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub device_type: String,
    pub problem_description: String,
    pub urgency: String,
    pub status: String,
    pub estimated_completion: Option<Timestamp>,
    pub price: Option<f64>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Intake form submitted by a customer.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateServiceRequest {
    #[validate(length(min = 2, max = 100))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 9, max = 20))]
    pub phone: String,
    pub device_type: DeviceType,
    #[validate(length(min = 10, max = 1000))]
    pub problem_description: String,
    pub urgency: Urgency,
}

/// Staff update. All fields optional; at least one must be present.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateServiceRequest {
    pub status: Option<RequestStatus>,
    pub estimated_completion: Option<Timestamp>,
    #[validate(range(min = 0.0))]
    pub price: Option<f64>,
}

impl UpdateServiceRequest {
    pub fn is_empty(&self) -> bool {
        self.status.is_none() && self.estimated_completion.is_none() && self.price.is_none()
    }
}

/// Filter for the staff listing.
#[derive(Debug, Clone, Default)]
pub struct ServiceRequestFilter {
    pub status: Option<RequestStatus>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}
