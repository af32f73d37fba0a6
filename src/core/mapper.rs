use crate::core::records::RawMovie;
use crate::domain::model::{Genre, Movie};
use crate::utils::error::ParseError;

/// Maps one raw record into a validated entity. Pure function: no shared
/// state between calls, so batch mapping can reuse it freely.
///
/// Missing optional fields substitute defaults (empty strings, zero counts,
/// empty genre list). Only the identity field is mandatory: a record with no
/// id, or a negative one, fails the whole mapping.
pub fn map_movie(index: usize, raw: RawMovie) -> Result<Movie, ParseError> {
    let id = raw.id.ok_or(ParseError::MissingId { index })?;
    let id = u64::try_from(id).map_err(|_| ParseError::NegativeId { index, id })?;

    let genres = raw
        .genres
        .into_iter()
        .map(|genre| Genre {
            id: genre.id.unwrap_or(0),
            name: genre.name.unwrap_or_default(),
        })
        .collect();

    Ok(Movie {
        id,
        title: raw.title.unwrap_or_default(),
        overview: raw.overview.unwrap_or_default(),
        genres,
        vote_count: raw.vote_count.unwrap_or(0).max(0) as u64,
    })
}
