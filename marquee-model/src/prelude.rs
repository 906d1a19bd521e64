//! Convenience re-exports for downstream crates.

pub use crate::error::{ModelError, Result as ModelResult};
pub use crate::ids::MovieId;
pub use crate::media::{Movie, MovieCollection};
pub use crate::responses::{MoviesEnvelope, decode_movies};
