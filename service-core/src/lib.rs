//! service-core: shared error, telemetry and middleware for the registry dashboard.
pub mod error;
pub mod middleware;
pub mod observability;

pub use axum;
pub use tracing;
pub use validator;
