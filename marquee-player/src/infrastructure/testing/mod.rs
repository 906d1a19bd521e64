//! Scriptable stand-ins for infrastructure services
//!
//! Used by the integration tests to drive views without a network.

pub mod stubs;

pub use stubs::TestMovieService;
