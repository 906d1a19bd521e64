use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use marquee_model::{Movie, MovieCollection};

use crate::infrastructure::services::api::{
    FetchError, FetchResult, MovieService,
};

/// In-memory movie service with scripted responses.
///
/// Queued responses are served first, in order; once the queue is empty
/// every fetch returns the fallback response.
#[derive(Debug, Clone)]
pub struct TestMovieService {
    inner: Arc<RwLock<InnerMovieState>>,
    fetches: Arc<AtomicUsize>,
    base_url: Arc<str>,
}

#[derive(Debug, Clone)]
struct InnerMovieState {
    queued: VecDeque<FetchResult<MovieCollection>>,
    fallback: FetchResult<MovieCollection>,
}

impl Default for TestMovieService {
    fn default() -> Self {
        Self::new("http://localhost:3000")
    }
}

impl TestMovieService {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(InnerMovieState {
                queued: VecDeque::new(),
                fallback: Ok(MovieCollection::empty()),
            })),
            fetches: Arc::new(AtomicUsize::new(0)),
            base_url: Arc::from(base_url.into()),
        }
    }

    /// Service that always answers with `movies`.
    ///
    /// Panics if `movies` contains a duplicate id.
    pub fn with_movies(movies: Vec<Movie>) -> Self {
        let service = Self::default();
        let movies = MovieCollection::try_from_vec(movies)
            .expect("fixture movies must have unique ids");
        service.set_fallback(Ok(movies));
        service
    }

    /// Service that always fails with `error`
    pub fn failing(error: FetchError) -> Self {
        let service = Self::default();
        service.set_fallback(Err(error));
        service
    }

    pub fn set_fallback(&self, response: FetchResult<MovieCollection>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.fallback = response;
        }
    }

    pub fn push_response(&self, response: FetchResult<MovieCollection>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.queued.push_back(response);
        }
    }

    /// Number of fetches issued so far
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MovieService for TestMovieService {
    async fn fetch_movies(&self) -> FetchResult<MovieCollection> {
        self.fetches.fetch_add(1, Ordering::SeqCst);

        let mut guard = self.inner.write().map_err(|_| {
            FetchError::Transport("TestMovieService state poisoned".into())
        })?;
        match guard.queued.pop_front() {
            Some(response) => response,
            None => guard.fallback.clone(),
        }
    }

    fn base_url(&self) -> &str {
        &self.base_url
    }
}
