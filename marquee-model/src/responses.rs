//! Wire envelopes returned by the movie service.

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};
use crate::media::{Movie, MovieCollection};

/// Body of `GET /movies`: `{ "movies": [ { "id": .., "title": .. }, .. ] }`.
///
/// `movies` is kept optional on the wire so a missing or `null` field is
/// reported as [`ModelError::MissingField`] instead of a generic decode error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoviesEnvelope {
    #[serde(default)]
    pub movies: Option<Vec<Movie>>,
}

impl MoviesEnvelope {
    pub fn new(movies: Vec<Movie>) -> Self {
        Self {
            movies: Some(movies),
        }
    }

    /// Validate the envelope and hand back the collection it carries.
    pub fn into_collection(self) -> Result<MovieCollection> {
        let movies = self.movies.ok_or(ModelError::MissingField("movies"))?;
        MovieCollection::try_from_vec(movies)
    }
}

/// Decode and validate a raw `GET /movies` body.
pub fn decode_movies(body: &[u8]) -> Result<MovieCollection> {
    let envelope: MoviesEnvelope = serde_json::from_slice(body)?;
    envelope.into_collection()
}
