//! Core data model definitions shared across Marquee crates.
#![allow(missing_docs)]

pub mod error;
pub mod ids;
pub mod media;
pub mod prelude;
pub mod responses;

pub use error::{ModelError, Result as ModelResult};
pub use ids::MovieId;
pub use media::{Movie, MovieCollection};
pub use responses::{MoviesEnvelope, decode_movies};
