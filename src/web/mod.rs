//! HTTP trigger for the filter function.
//!
//! Adapts axum requests to [`crate::handler::handle`] and serves a health
//! check alongside it.

pub mod cors;
pub mod handlers;
pub mod router;
pub mod server;

pub use router::create_router;
pub use server::WebServer;
