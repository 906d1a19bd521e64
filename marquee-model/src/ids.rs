use serde::{Deserialize, Serialize};

/// Identifier of a movie as delivered by the movie service.
///
/// Services key movies either by integer or by string; both are accepted
/// and compared by exact value, so `1` and `"1"` are different ids.
///
/// Integers that fit an `i64` always decode as [`MovieId::Numeric`]; only
/// values above `i64::MAX` land in [`MovieId::Unsigned`]. Fractional numbers
/// are not ids and are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MovieId {
    Numeric(i64),
    Unsigned(u64),
    Text(String),
}

impl MovieId {
    pub fn as_numeric(&self) -> Option<i64> {
        match self {
            MovieId::Numeric(value) => Some(*value),
            MovieId::Unsigned(_) | MovieId::Text(_) => None,
        }
    }
}

impl From<i64> for MovieId {
    fn from(value: i64) -> Self {
        MovieId::Numeric(value)
    }
}

impl From<&str> for MovieId {
    fn from(value: &str) -> Self {
        MovieId::Text(value.to_string())
    }
}

impl From<String> for MovieId {
    fn from(value: String) -> Self {
        MovieId::Text(value)
    }
}

impl std::fmt::Display for MovieId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MovieId::Numeric(value) => write!(f, "{}", value),
            MovieId::Unsigned(value) => write!(f, "{}", value),
            MovieId::Text(value) => write!(f, "{}", value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_and_text_ids_decode_from_json() {
        let numeric: MovieId = serde_json::from_str("42").unwrap();
        let text: MovieId = serde_json::from_str("\"tt0133093\"").unwrap();

        assert_eq!(numeric, MovieId::Numeric(42));
        assert_eq!(text, MovieId::Text("tt0133093".into()));
    }

    #[test]
    fn numeric_and_text_forms_are_distinct() {
        assert_ne!(MovieId::from(1), MovieId::from("1"));
        assert_eq!(MovieId::from(1).to_string(), "1");
        assert_eq!(MovieId::from("1").to_string(), "1");
    }

    #[test]
    fn ids_above_i64_max_decode_as_unsigned() {
        let big: MovieId =
            serde_json::from_str("18446744073709551615").unwrap();
        let small: MovieId = serde_json::from_str("7").unwrap();

        assert_eq!(big, MovieId::Unsigned(u64::MAX));
        assert_eq!(big.to_string(), "18446744073709551615");
        assert_eq!(small, MovieId::Numeric(7));
        assert_eq!(serde_json::to_string(&big).unwrap(), "18446744073709551615");
    }

    #[test]
    fn non_scalar_ids_are_rejected() {
        assert!(serde_json::from_str::<MovieId>("{\"id\": 1}").is_err());
        assert!(serde_json::from_str::<MovieId>("null").is_err());
        assert!(serde_json::from_str::<MovieId>("1.5").is_err());
    }
}
