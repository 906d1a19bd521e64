use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use log::{debug, info};
use marquee_model::{MovieCollection, decode_movies};
use reqwest::{Client, header::ACCEPT};

use crate::infrastructure::constants::{DEFAULT_REQUEST_TIMEOUT, routes};
use crate::infrastructure::services::api::{
    FetchError, FetchResult, MovieService,
};

/// Connection settings for the movie service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: Arc<str>,
    pub timeout: Duration,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: Arc::from(base_url.into()),
            timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// HTTP client for the movie service
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Arc<str>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl ApiClient {
    /// Create a new API client
    pub fn new(config: &ApiConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(config.timeout).build()?;

        info!(
            "[ApiClient] Creating new API client with base URL: {}",
            config.base_url
        );

        Ok(Self {
            client,
            base_url: Arc::clone(&config.base_url),
        })
    }

    /// Join a route onto the base URL.
    ///
    /// An empty base URL yields a relative path, which fails at request time
    /// rather than here.
    pub fn build_url(&self, path: impl AsRef<str>) -> String {
        let path = path.as_ref().trim_start_matches('/');
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }

    /// GET the movie listing and validate it
    pub async fn get_movies(&self) -> FetchResult<MovieCollection> {
        let url = self.build_url(routes::MOVIES);
        debug!("[ApiClient] GET request to: {}", url);

        let response = self
            .client
            .get(&url)
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(FetchError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.bytes().await?;
        let movies = decode_movies(&body)?;
        debug!("[ApiClient] Received {} movies from {}", movies.len(), url);
        Ok(movies)
    }
}

#[async_trait]
impl MovieService for ApiClient {
    async fn fetch_movies(&self) -> FetchResult<MovieCollection> {
        self.get_movies().await
    }

    fn base_url(&self) -> &str {
        &self.base_url
    }
}
