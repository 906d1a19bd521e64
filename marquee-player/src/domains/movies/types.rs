//! Movies domain types

use std::future::Future;

use futures::future::BoxFuture;
use iced::Task;
use marquee_model::{Movie, MovieId};

use super::messages::Message;

/// Identifies one mount of a view.
///
/// Settlements carry the epoch they were issued under and are dropped unless
/// the view is still mounted under that same epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MountEpoch(pub(crate) u64);

impl MountEpoch {
    pub fn get(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for MountEpoch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Per-mount load lifecycle: `Idle -> Fetching -> {Populated | EmptyOnError}`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum MoviesLoadState {
    /// Not mounted
    #[default]
    Idle,
    /// Mounted, the single fetch has not settled yet
    Fetching,
    /// Fetch settled successfully
    Populated { count: usize },
    /// Fetch failed; the list stays empty
    EmptyOnError { last_error: String },
}

impl MoviesLoadState {
    pub fn is_settled(&self) -> bool {
        matches!(
            self,
            MoviesLoadState::Populated { .. }
                | MoviesLoadState::EmptyOnError { .. }
        )
    }
}

/// One rendered list entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListEntry {
    pub key: MovieId,
    pub label: String,
}

impl ListEntry {
    pub fn from_movie(movie: &Movie) -> Self {
        Self {
            key: movie.id.clone(),
            label: movie.title.clone(),
        }
    }

    /// Message the entry emits when clicked
    pub fn select(&self) -> Message {
        Message::Select(self.key.clone())
    }
}

/// The outstanding fetch of a mount, not yet handed to a runtime.
pub struct PendingFetch {
    epoch: MountEpoch,
    future: BoxFuture<'static, Message>,
}

impl std::fmt::Debug for PendingFetch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PendingFetch")
            .field("epoch", &self.epoch)
            .finish_non_exhaustive()
    }
}

impl PendingFetch {
    pub(crate) fn new(
        epoch: MountEpoch,
        future: impl Future<Output = Message> + Send + 'static,
    ) -> Self {
        Self {
            epoch,
            future: Box::pin(future),
        }
    }

    pub fn epoch(&self) -> MountEpoch {
        self.epoch
    }

    /// Drive the request to settlement on the caller's executor
    pub async fn settle(self) -> Message {
        self.future.await
    }

    /// Hand the request to the iced runtime
    pub fn into_task(self) -> Task<Message> {
        Task::perform(self.future, std::convert::identity)
    }
}
