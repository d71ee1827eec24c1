//! Infrastructure Layer
//!
//! Contains process-level facilities that sit outside the catalog logic:
//! - Prometheus metrics registry and recording helpers

pub mod metrics;
