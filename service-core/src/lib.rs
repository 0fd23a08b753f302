//! service-core: Shared infrastructure for the profile services.
pub mod config;
pub mod error;
pub mod observability;
