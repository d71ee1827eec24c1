//! Application Layer
//!
//! Contains the catalog service and the data transfer objects (form input
//! and view-models). This layer orchestrates the flow of data between the
//! presentation and domain layers.

pub mod services;
pub mod dto;
