//! HTTP middleware for the shop widget.
//!
//! # Middleware Order (bottom to top in Router)
//!
//! 1. Sentry layers (capture errors)
//! 2. `TraceLayer` (request tracing)
//! 3. Request ID (add unique ID to each request)

pub mod request_id;

pub use request_id::request_id_middleware;
