pub mod admin;
pub mod auth;
pub mod contact;
pub mod health;
pub mod price_estimate;
pub mod service_request;
pub mod testimonial;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /auth/login                       login (public)
///
/// /service-requests                 create (public), list (admin)
/// /service-requests/{case_id}       track by case id (public)
/// /service-requests/{id}            update (admin, PUT)
///
/// /price-estimate                   quote (public, POST)
/// /price-estimate/pricing-info      active pricing table (public)
///
/// /testimonials                     list active, create (public)
/// /testimonials/{id}                update, deactivate (admin)
///
/// /contact                          send (public), inbox (admin)
/// /contact/stats                    counts per status (admin)
/// /contact/{id}/status              set inbox status (admin, PUT)
///
/// /admin/testimonials               all testimonials incl. inactive (admin)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/service-requests", service_request::router())
        .nest("/price-estimate", price_estimate::router())
        .nest("/testimonials", testimonial::router())
        .nest("/contact", contact::router())
        .nest("/admin", admin::router())
}
