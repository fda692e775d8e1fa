//! HTTP server module
//!
//! This module handles HTTP request routing and handling:
//! - Axum router with the transcript and list endpoints
//! - Request handlers and JSON error responses
//! - CORS and request tracing middleware

pub mod handlers;
pub mod routes;

pub use routes::create_router;
