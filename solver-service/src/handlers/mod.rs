//! HTTP handlers for the solver service.

pub mod health;
pub mod metrics;
pub mod models;
pub mod solve;

pub use health::{health_check, hello, not_found, readiness_check};
pub use models::list_models;
pub use solve::solve_math;
