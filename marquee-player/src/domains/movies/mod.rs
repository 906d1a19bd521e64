//! Movie list domain
//!
//! [`MovieListView`] fetches the movie listing once per mount, keeps the
//! result as view-local state and forwards clicks on its entries to the
//! caller's select handler.

pub mod messages;
pub mod types;
pub mod update;
pub mod view;

use std::sync::Arc;

use iced::Task;
use marquee_model::{Movie, MovieCollection};
use thiserror::Error;

use self::messages::Message;
use self::types::{ListEntry, MountEpoch, MoviesLoadState, PendingFetch};
use crate::infrastructure::api_client::{ApiClient, ApiConfig};
use crate::infrastructure::services::api::{FetchError, MovieService};

/// Invoked with the full record of a clicked entry
pub type SelectHandler = Arc<dyn Fn(Movie) + Send + Sync>;

/// Invoked with the error of a failed fetch, after it has been logged
pub type ErrorHandler = Arc<dyn Fn(&FetchError) + Send + Sync>;

/// Misconfiguration detected while building a view
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("a select handler is required to build the movie list")]
    MissingSelectHandler,

    #[error("either a movie service or an API config is required")]
    MissingService,

    #[error("failed to create HTTP client: {0}")]
    HttpClient(String),
}

/// View-local state of the movie list
pub struct MovieListView {
    service: Arc<dyn MovieService>,
    on_select: SelectHandler,
    on_error: Option<ErrorHandler>,

    movies: MovieCollection,
    load_state: MoviesLoadState,
    last_error: Option<FetchError>,

    mounted: Option<MountEpoch>,
    next_epoch: u64,
}

impl std::fmt::Debug for MovieListView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MovieListView")
            .field("service", &self.service)
            .field("movies", &self.movies.len())
            .field("load_state", &self.load_state)
            .field("mounted", &self.mounted)
            .field("has_error_handler", &self.on_error.is_some())
            .finish()
    }
}

impl MovieListView {
    pub fn builder() -> MovieListViewBuilder {
        MovieListViewBuilder::default()
    }

    /// Mount the view and start its single fetch.
    ///
    /// Returns `None` when the view is already mounted; a mounted view never
    /// fetches again until it is unmounted and mounted afresh.
    pub fn begin_mount(&mut self) -> Option<PendingFetch> {
        if let Some(epoch) = self.mounted {
            log::warn!(
                "Movie list already mounted ({}), ignoring repeated mount",
                epoch
            );
            return None;
        }

        let epoch = MountEpoch(self.next_epoch);
        self.next_epoch += 1;

        self.mounted = Some(epoch);
        self.movies = MovieCollection::empty();
        self.last_error = None;
        self.load_state = MoviesLoadState::Fetching;

        log::info!(
            "Mounting movie list {} - loading movies from {}",
            epoch,
            self.service.base_url()
        );

        let service = Arc::clone(&self.service);
        Some(PendingFetch::new(epoch, async move {
            let result = service.fetch_movies().await;
            Message::MoviesLoaded { epoch, result }
        }))
    }

    /// Mount the view, scheduling the fetch on the iced runtime
    pub fn mount(&mut self) -> Task<Message> {
        match self.begin_mount() {
            Some(pending) => pending.into_task(),
            None => Task::none(),
        }
    }

    /// Tear the view down, discarding its state.
    ///
    /// A fetch still in flight settles into a no-op.
    pub fn unmount(&mut self) {
        if let Some(epoch) = self.mounted.take() {
            log::debug!("Unmounting movie list {}", epoch);
        }
        self.movies = MovieCollection::empty();
        self.last_error = None;
        self.load_state = MoviesLoadState::Idle;
    }

    /// Headless render model: one entry per movie, in delivery order
    pub fn entries(&self) -> Vec<ListEntry> {
        self.movies.iter().map(ListEntry::from_movie).collect()
    }

    pub fn movies(&self) -> &MovieCollection {
        &self.movies
    }

    pub fn load_state(&self) -> &MoviesLoadState {
        &self.load_state
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted.is_some()
    }

    pub fn mount_epoch(&self) -> Option<MountEpoch> {
        self.mounted
    }

    /// Error of the current mount's fetch, if it failed
    pub fn last_error(&self) -> Option<&FetchError> {
        self.last_error.as_ref()
    }
}

/// Builder for [`MovieListView`].
///
/// A select handler is mandatory. The movie service is either supplied
/// directly or created from an [`ApiConfig`].
#[derive(Default)]
pub struct MovieListViewBuilder {
    config: Option<ApiConfig>,
    service: Option<Arc<dyn MovieService>>,
    on_select: Option<SelectHandler>,
    on_error: Option<ErrorHandler>,
}

impl std::fmt::Debug for MovieListViewBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MovieListViewBuilder")
            .field("config", &self.config)
            .field("service", &self.service)
            .field("has_select_handler", &self.on_select.is_some())
            .field("has_error_handler", &self.on_error.is_some())
            .finish()
    }
}

impl MovieListViewBuilder {
    pub fn config(mut self, config: ApiConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Use `service` instead of an HTTP client; takes precedence over
    /// [`Self::config`]
    pub fn service(mut self, service: Arc<dyn MovieService>) -> Self {
        self.service = Some(service);
        self
    }

    pub fn on_select<F>(mut self, handler: F) -> Self
    where
        F: Fn(Movie) + Send + Sync + 'static,
    {
        self.on_select = Some(Arc::new(handler));
        self
    }

    pub fn on_error<F>(mut self, handler: F) -> Self
    where
        F: Fn(&FetchError) + Send + Sync + 'static,
    {
        self.on_error = Some(Arc::new(handler));
        self
    }

    pub fn build(self) -> Result<MovieListView, ConfigError> {
        let on_select = self.on_select.ok_or(ConfigError::MissingSelectHandler)?;

        let service: Arc<dyn MovieService> = match (self.service, self.config) {
            (Some(service), _) => service,
            (None, Some(config)) => Arc::new(
                ApiClient::new(&config)
                    .map_err(|e| ConfigError::HttpClient(e.to_string()))?,
            ),
            (None, None) => return Err(ConfigError::MissingService),
        };

        Ok(MovieListView {
            service,
            on_select,
            on_error: self.on_error,
            movies: MovieCollection::empty(),
            load_state: MoviesLoadState::Idle,
            last_error: None,
            mounted: None,
            next_epoch: 0,
        })
    }
}
