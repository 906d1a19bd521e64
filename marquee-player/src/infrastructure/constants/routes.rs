//! Movie service routes
//!
//! Paths are joined onto the configured base URL by the API client.

/// Movie listing endpoint
pub const MOVIES: &str = "/movies";
