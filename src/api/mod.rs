//! REST API Server Module
//!
//! This module provides the HTTP API of the discount service: counterparty
//! search and bonus balance lookup, both behind the auth token gate.

// Auth token gate applied to every route
pub mod auth;

// Counterparty search and detail handlers
pub mod counterparty;

// Server, route assembly and rejection handling
mod generic;

pub use generic::{handle_rejection, ApiServer};
