//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::routing::{app_routes, Route};

/// The full editor route table — routing tests exercise the real table
/// rather than a synthetic one, so table changes show up in matcher tests.
pub fn test_routes() -> Vec<Route> {
    app_routes()
}
