//! Marquee Player library
//!
//! This crate contains the movie list surfaces used by the executable in
//! `src/main.rs`: the movie list domain, the HTTP client for the movie service,
//! and the iced application shell.
//!
//! Notes
//! - Public items are subject to change while the UI stabilizes.
//! - The library is exposed mainly to enable testing.

pub mod app;
pub mod domains;
pub mod infrastructure;
