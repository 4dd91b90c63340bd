//! Domain logic for the data-recovery service backend.
//!
//! Pure code only: no database or HTTP types live here. The `db` and `api`
//! crates supply the I/O around these modules.

pub mod case_id;
pub mod config;
pub mod domain;
pub mod error;
pub mod pagination;
pub mod pricing;
pub mod progress;
pub mod roles;
