//! Movie service trait and error types
//!
//! Abstracts the movie listing behind a trait so views never talk to
//! `reqwest` directly and tests can script responses.

use async_trait::async_trait;
use marquee_model::{ModelError, MovieCollection};
use thiserror::Error;

/// Coarse classification of a failed fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchErrorKind {
    /// Network unreachable, timeout, invalid URL or non-2xx response
    Transport,
    /// The body arrived but is not a valid movie listing
    Payload,
}

/// Failure of a movie listing request.
///
/// Carries strings rather than source errors so it can travel inside
/// `Clone` messages.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(String),

    #[error("request failed with status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("malformed movie payload: {0}")]
    MalformedPayload(String),
}

impl FetchError {
    pub fn kind(&self) -> FetchErrorKind {
        match self {
            FetchError::Transport(_) | FetchError::Status { .. } => {
                FetchErrorKind::Transport
            }
            FetchError::MalformedPayload(_) => FetchErrorKind::Payload,
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            FetchError::MalformedPayload(err.to_string())
        } else {
            FetchError::Transport(err.to_string())
        }
    }
}

impl From<ModelError> for FetchError {
    fn from(err: ModelError) -> Self {
        FetchError::MalformedPayload(err.to_string())
    }
}

pub type FetchResult<T> = Result<T, FetchError>;

/// Read access to the movie service.
#[async_trait]
pub trait MovieService: Send + Sync + std::fmt::Debug {
    /// Fetch the full movie listing (`GET {base}/movies`)
    async fn fetch_movies(&self) -> FetchResult<MovieCollection>;

    /// Base URL requests are issued against
    fn base_url(&self) -> &str;
}
