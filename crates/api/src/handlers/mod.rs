pub mod auth;
pub mod contact;
pub mod price_estimate;
pub mod service_request;
pub mod testimonial;
