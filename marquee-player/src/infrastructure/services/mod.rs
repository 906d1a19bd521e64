//! Service traits used by the player domains

pub mod api;

pub use api::{FetchError, FetchErrorKind, FetchResult, MovieService};
