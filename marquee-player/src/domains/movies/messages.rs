use marquee_model::{MovieCollection, MovieId};

use super::types::MountEpoch;
use crate::infrastructure::services::api::FetchError;

#[derive(Debug, Clone)]
pub enum Message {
    /// Settlement of the fetch issued by the mount identified by `epoch`
    MoviesLoaded {
        epoch: MountEpoch,
        result: Result<MovieCollection, FetchError>,
    },
    /// An entry was clicked
    Select(MovieId),
    Unmount,
}

impl Message {
    pub fn name(&self) -> &'static str {
        match self {
            Self::MoviesLoaded { .. } => "Movies::MoviesLoaded",
            Self::Select(_) => "Movies::Select",
            Self::Unmount => "Movies::Unmount",
        }
    }
}
