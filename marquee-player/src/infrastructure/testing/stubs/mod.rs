pub mod api;

pub use api::TestMovieService;
