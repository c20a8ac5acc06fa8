//! Observability for the solar panel data service
//!
//! Structured logging via `tracing`. Request spans are added by the HTTP
//! server's trace layer.

mod logger;

pub use logger::{init_tracing, LogFormat, DEFAULT_FILTER};
