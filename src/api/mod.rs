//! HTTP API layer for the portfolio backend.
//!
//! Read-only JSON endpoints plus the frontend bundle.

pub mod handlers;
mod routes;

pub use routes::build_router;
