use std::sync::Arc;
use std::time::Duration;

use iced::Task;
use parking_lot::Mutex;

use super::State;
use crate::domains::movies::{ConfigError, MovieListView, messages::Message};
use crate::infrastructure::api_client::ApiConfig;
use crate::infrastructure::constants::DEFAULT_REQUEST_TIMEOUT;

/// Base URL of the movie service
pub const MOVIE_API_URL_ENV: &str = "MOVIE_API_URL";
/// Request timeout, humantime syntax (`10s`, `1m 30s`)
pub const MOVIE_API_TIMEOUT_ENV: &str = "MOVIE_API_TIMEOUT";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub movie_api_url: Arc<str>,
    pub request_timeout: Duration,
}

impl AppConfig {
    pub fn new(movie_api_url: impl Into<String>) -> Self {
        Self {
            movie_api_url: Arc::from(movie_api_url.into()),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }

    pub fn from_environment() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve configuration through `lookup`.
    ///
    /// A missing base URL is not an error here: it surfaces later as a failed
    /// fetch.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let movie_api_url = lookup(MOVIE_API_URL_ENV)
            .map(|value| value.trim().to_string())
            .unwrap_or_default();

        if movie_api_url.is_empty() {
            log::warn!(
                "{} is not set; movie requests will fail",
                MOVIE_API_URL_ENV
            );
        } else if let Err(e) = url::Url::parse(&movie_api_url) {
            log::warn!(
                "{}={} is not an absolute URL ({}); movie requests will fail",
                MOVIE_API_URL_ENV,
                movie_api_url,
                e
            );
        }

        log::info!("API URL: {}", movie_api_url);

        let request_timeout = match lookup(MOVIE_API_TIMEOUT_ENV) {
            Some(raw) => match humantime::parse_duration(raw.trim()) {
                Ok(timeout) if !timeout.is_zero() => timeout,
                Ok(_) => {
                    log::warn!(
                        "{} must be positive, using {:?}",
                        MOVIE_API_TIMEOUT_ENV,
                        DEFAULT_REQUEST_TIMEOUT
                    );
                    DEFAULT_REQUEST_TIMEOUT
                }
                Err(e) => {
                    log::warn!(
                        "Invalid {}={:?} ({}), using {:?}",
                        MOVIE_API_TIMEOUT_ENV,
                        raw,
                        e,
                        DEFAULT_REQUEST_TIMEOUT
                    );
                    DEFAULT_REQUEST_TIMEOUT
                }
            },
            None => DEFAULT_REQUEST_TIMEOUT,
        };

        Self {
            movie_api_url: Arc::from(movie_api_url),
            request_timeout,
        }
    }

    pub fn movie_api_url(&self) -> &str {
        &self.movie_api_url
    }

    pub fn api_config(&self) -> ApiConfig {
        ApiConfig::new(self.movie_api_url.to_string())
            .with_timeout(self.request_timeout)
    }
}

/// Build the application state and the mount task of its movie list.
pub fn runtime_boot(
    config: &AppConfig,
) -> Result<(State, Task<Message>), ConfigError> {
    let selection = Arc::new(Mutex::new(None));

    let slot = Arc::clone(&selection);
    let mut movie_list = MovieListView::builder()
        .config(config.api_config())
        .on_select(move |movie| {
            log::info!("Selected movie {} ({})", movie.title, movie.id);
            *slot.lock() = Some(movie);
        })
        .build()?;

    let task = movie_list.mount();

    Ok((
        State {
            movie_list,
            selection,
        },
        task,
    ))
}
