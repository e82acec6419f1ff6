//! HTTP API module for the Labor Cost Quotation Engine.
//!
//! This module provides the REST endpoints for the interactive quotation
//! operations: adding staff groups, updating markup rates, resetting the
//! session, and fetching the report and its export.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{AddGroupRequest, RatesRequest};
pub use response::{AddGroupResponse, ApiError, ReportResponse, ResetResponse};
pub use state::AppState;
