use thiserror::Error;

use crate::ids::MovieId;

/// Errors produced while decoding and validating movie payloads.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("payload could not be decoded: {0}")]
    Decode(String),

    #[error("payload is missing required field `{0}`")]
    MissingField(&'static str),

    #[error("movie id {0} appears more than once")]
    DuplicateMovieId(MovieId),
}

impl From<serde_json::Error> for ModelError {
    fn from(err: serde_json::Error) -> Self {
        ModelError::Decode(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ModelError>;
