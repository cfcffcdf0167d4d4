//! HTTP API module for the reconciliation engine.
//!
//! This module exposes the reconciliation pipeline over a single REST
//! endpoint, `POST /reconcile`.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::ReconciliationRequest;
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
