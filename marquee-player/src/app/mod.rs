use std::sync::Arc;

use iced::{
    Element, Size, Task,
    widget::{column, text},
};
use marquee_model::Movie;
use parking_lot::Mutex;

use crate::domains::movies::{MovieListView, messages::Message};

pub mod bootstrap;

pub use bootstrap::AppConfig;

/// Last movie handed to the select handler
pub type SelectionSlot = Arc<Mutex<Option<Movie>>>;

#[derive(Debug)]
pub struct State {
    pub movie_list: MovieListView,
    pub selection: SelectionSlot,
}

/// Boot and run the Marquee window until it is closed.
pub fn run(config: AppConfig) -> anyhow::Result<()> {
    let (state, mount) = bootstrap::runtime_boot(&config)?;

    iced::application("Marquee", update, view)
        .window_size(Size::new(480.0, 640.0))
        .run_with(move || (state, mount))?;

    Ok(())
}

pub fn update(state: &mut State, message: Message) -> Task<Message> {
    state.movie_list.update(message);
    Task::none()
}

pub fn view(state: &State) -> Element<'_, Message> {
    let footer = match state.selection.lock().as_ref() {
        Some(movie) => format!("Selected: {}", movie.title),
        None => "Select a movie".to_string(),
    };

    column![state.movie_list.view(), text(footer).size(14)]
        .spacing(8)
        .padding(12)
        .into()
}
