//! Row models and request DTOs, one module per table.

pub mod contact_message;
pub mod service_request;
pub mod testimonial;
