//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod case_id_counter_repo;
pub mod contact_message_repo;
pub mod service_request_repo;
pub mod testimonial_repo;

pub use case_id_counter_repo::CaseIdCounterRepo;
pub use contact_message_repo::ContactMessageRepo;
pub use service_request_repo::ServiceRequestRepo;
pub use testimonial_repo::TestimonialRepo;
