//! HTTP Handlers
//!
//! Request handlers for all HTTP endpoints.

pub mod catalog;
pub mod health;
