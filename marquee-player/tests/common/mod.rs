//! Shared helpers for the Marquee player integration tests
//!
//! Provides an in-process movie backend on an ephemeral port, fixtures, and
//! a recorder for select handler invocations.
#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use axum::{Router, http::StatusCode, routing::get};
use marquee_model::Movie;
use marquee_player::domains::movies::{MovieListView, MovieListViewBuilder};
use parking_lot::Mutex;
use serde_json::{Value, json};
use tokio::net::TcpListener;

/// The two-movie listing used throughout the tests
pub fn movie_a_and_b() -> Vec<Movie> {
    vec![Movie::new(1, "Movie A"), Movie::new(2, "Movie B")]
}

pub fn movie_a_and_b_json() -> Value {
    json!({
        "movies": [
            { "id": 1, "title": "Movie A" },
            { "id": 2, "title": "Movie B" }
        ]
    })
}

/// Records every movie handed to a select handler
#[derive(Debug, Clone, Default)]
pub struct SelectionRecorder {
    selected: Arc<Mutex<Vec<Movie>>>,
}

impl SelectionRecorder {
    pub fn handler(&self) -> impl Fn(Movie) + Send + Sync + 'static {
        let selected = Arc::clone(&self.selected);
        move |movie| selected.lock().push(movie)
    }

    pub fn selected(&self) -> Vec<Movie> {
        self.selected.lock().clone()
    }
}

/// Builder pre-wired with a recording select handler
pub fn recording_builder(recorder: &SelectionRecorder) -> MovieListViewBuilder {
    MovieListView::builder().on_select(recorder.handler())
}

/// Movie service double served over real HTTP
pub struct MovieBackend {
    pub addr: SocketAddr,
    hits: Arc<AtomicUsize>,
}

impl MovieBackend {
    /// Serve `body` with `status` on `GET /movies`
    pub async fn respond_with(status: StatusCode, body: String) -> Self {
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&hits);

        let router = Router::new().route(
            "/movies",
            get(move || {
                let counter = Arc::clone(&counter);
                let body = body.clone();
                async move {
                    counter.fetch_add(1, Ordering::SeqCst);
                    (
                        status,
                        [(axum::http::header::CONTENT_TYPE, "application/json")],
                        body,
                    )
                }
            }),
        );

        let addr = serve(router).await;
        Self { addr, hits }
    }

    pub async fn json(value: Value) -> Self {
        Self::respond_with(StatusCode::OK, value.to_string()).await
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Number of `GET /movies` requests received
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

async fn serve(router: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("listener address");

    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("test backend");
    });

    addr
}

/// Base URL of a port nothing listens on
pub async fn unreachable_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("listener address");
    drop(listener);
    format!("http://{}", addr)
}
