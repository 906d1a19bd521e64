use log::{debug, error, info, warn};
use marquee_model::{MovieCollection, MovieId};

use super::MovieListView;
use super::messages::Message;
use super::types::{MountEpoch, MoviesLoadState};
use crate::infrastructure::services::api::FetchError;

impl MovieListView {
    pub fn update(&mut self, message: Message) {
        debug!("Movies update: {}", message.name());

        match message {
            Message::MoviesLoaded { epoch, result } => {
                self.handle_movies_loaded(epoch, result)
            }
            Message::Select(id) => self.handle_select(&id),
            Message::Unmount => self.unmount(),
        }
    }

    fn handle_movies_loaded(
        &mut self,
        epoch: MountEpoch,
        result: Result<MovieCollection, FetchError>,
    ) {
        if self.mounted != Some(epoch) {
            debug!(
                "Dropping movie fetch settlement for {} (mounted: {:?})",
                epoch, self.mounted
            );
            return;
        }

        if self.load_state != MoviesLoadState::Fetching {
            warn!(
                "Movie fetch for {} settled twice, keeping {:?}",
                epoch, self.load_state
            );
            return;
        }

        match result {
            Ok(movies) => {
                info!("Loaded {} movies", movies.len());
                self.load_state = MoviesLoadState::Populated {
                    count: movies.len(),
                };
                self.movies = movies;
            }
            Err(err) => {
                error!("Error fetching movies: {}", err);
                self.load_state = MoviesLoadState::EmptyOnError {
                    last_error: err.to_string(),
                };
                if let Some(handler) = &self.on_error {
                    handler(&err);
                }
                self.last_error = Some(err);
            }
        }
    }

    fn handle_select(&self, id: &MovieId) {
        match self.movies.find(id) {
            Some(movie) => (self.on_select)(movie.clone()),
            None => debug!("Ignoring select for unknown movie {}", id),
        }
    }
}
