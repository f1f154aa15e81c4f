//! Analysis HTTP adapter module.
//!
//! Provides REST API endpoints for ranking computations.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::ErrorResponse;
pub use handlers::{AnalysisApiError, AnalysisAppState};
pub use routes::analysis_routes;
