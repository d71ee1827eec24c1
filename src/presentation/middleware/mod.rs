//! Middleware
//!
//! Tower middleware for request processing.

pub mod logging;
pub mod metrics;

pub use metrics::track_metrics;
