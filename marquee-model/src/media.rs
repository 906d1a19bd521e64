use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};
use crate::ids::MovieId;

/// A movie as listed by the movie service.
///
/// Only `id` and `title` are consumed; any other fields in the payload are
/// ignored during decoding.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
}

impl Movie {
    pub fn new(id: impl Into<MovieId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
        }
    }
}

/// Ordered, id-unique sequence of movies.
///
/// Order is exactly the order the service delivered; nothing is sorted or
/// deduplicated on the client.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MovieCollection {
    movies: Vec<Movie>,
}

impl MovieCollection {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a collection, rejecting any id that occurs twice.
    pub fn try_from_vec(movies: Vec<Movie>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(movies.len());
        for movie in &movies {
            if !seen.insert(&movie.id) {
                return Err(ModelError::DuplicateMovieId(movie.id.clone()));
            }
        }
        Ok(Self { movies })
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Movie> {
        self.movies.get(index)
    }

    pub fn find(&self, id: &MovieId) -> Option<&Movie> {
        self.movies.iter().find(|movie| &movie.id == id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Movie> {
        self.movies.iter()
    }

    pub fn as_slice(&self) -> &[Movie] {
        &self.movies
    }

    pub fn into_vec(self) -> Vec<Movie> {
        self.movies
    }
}

impl<'a> IntoIterator for &'a MovieCollection {
    type Item = &'a Movie;
    type IntoIter = std::slice::Iter<'a, Movie>;

    fn into_iter(self) -> Self::IntoIter {
        self.movies.iter()
    }
}

impl TryFrom<Vec<Movie>> for MovieCollection {
    type Error = ModelError;

    fn try_from(movies: Vec<Movie>) -> Result<Self> {
        Self::try_from_vec(movies)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collection_keeps_delivery_order() {
        let collection = MovieCollection::try_from_vec(vec![
            Movie::new(3, "Zodiac"),
            Movie::new(1, "Alien"),
            Movie::new(2, "Memento"),
        ])
        .unwrap();

        let titles: Vec<_> =
            collection.iter().map(|movie| movie.title.as_str()).collect();
        assert_eq!(titles, ["Zodiac", "Alien", "Memento"]);
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let err = MovieCollection::try_from_vec(vec![
            Movie::new(7, "Se7en"),
            Movie::new(7, "Se7en (Director's Cut)"),
        ])
        .unwrap_err();

        assert_eq!(err, ModelError::DuplicateMovieId(MovieId::Numeric(7)));
    }

    #[test]
    fn duplicate_titles_with_distinct_ids_are_kept() {
        let collection = MovieCollection::try_from_vec(vec![
            Movie::new(1, "Solaris"),
            Movie::new(2, "Solaris"),
        ])
        .unwrap();

        assert_eq!(collection.len(), 2);
        assert_eq!(collection.find(&MovieId::Numeric(2)).unwrap().title, "Solaris");
    }

    #[test]
    fn movie_ignores_unknown_fields() {
        let movie: Movie = serde_json::from_str(
            r#"{"id": 5, "title": "Heat", "year": 1995, "genres": ["crime"]}"#,
        )
        .unwrap();

        assert_eq!(movie, Movie::new(5, "Heat"));
    }

    #[test]
    fn movie_requires_string_title() {
        assert!(serde_json::from_str::<Movie>(r#"{"id": 5}"#).is_err());
        assert!(
            serde_json::from_str::<Movie>(r#"{"id": 5, "title": 12}"#).is_err()
        );
        assert!(
            serde_json::from_str::<Movie>(r#"{"title": "Heat"}"#).is_err()
        );
    }
}
