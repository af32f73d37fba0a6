use crate::utils::error::ParseError;
use serde::Deserialize;

/// Loosely-typed movie record as decoded straight from the payload. Every
/// field is optional so an absent field never aborts parsing of sibling
/// records; unknown fields are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawMovie {
    pub id: Option<i64>,
    pub title: Option<String>,
    pub overview: Option<String>,
    #[serde(default)]
    pub genres: Vec<RawGenre>,
    pub vote_count: Option<i64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawGenre {
    pub id: Option<i64>,
    pub name: Option<String>,
}

/// Decodes the payload into raw records. A blank payload counts as an empty
/// list, matching the contract that "no records" is a valid outcome rather
/// than a failure.
pub fn parse_movies(text: &str) -> Result<Vec<RawMovie>, ParseError> {
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }

    Ok(serde_json::from_str(text)?)
}
