//! Presentation Layer
//!
//! HTTP routes, request middleware and the HTML view renderer.

pub mod http;
pub mod middleware;
pub mod views;
