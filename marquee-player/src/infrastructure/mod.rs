//! Infrastructure module containing the movie service client and test stubs
//!
//! Domains depend on the [`services::MovieService`] trait; the HTTP
//! implementation lives in [`api_client`].

pub mod api_client;
pub mod constants;
pub mod services;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use api_client::{ApiClient, ApiConfig};
pub use services::{FetchError, FetchErrorKind, MovieService};
